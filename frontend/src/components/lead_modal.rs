use std::rc::Rc;

use chrono::Utc;
use log::error;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::error::BookingError;
use crate::booking::lead::{LeadEffect, LeadFlow, LeadStep};
use crate::booking::record::{ContactFields, PreferredTime};
use crate::booking::scheduler::LeadSink;
use crate::booking::wizard::Generation;
use crate::components::booking_button::{is_backdrop_click, BookingContext};
use crate::dom;
use crate::i18n::context::Tr;
use crate::i18n::language::Language;

#[derive(Clone)]
pub struct LeadSinkHandle(pub Rc<dyn LeadSink>);

impl PartialEq for LeadSinkHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub sink: LeadSinkHandle,
    pub lang: Language,
    pub on_error: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Open,
    Close,
    OverlayClick(MouseEvent),
    Submit(SubmitEvent),
    Finished(Generation, Result<(), BookingError>),
}

/// Request-a-callback modal: one form, answered by a person within a day.
pub struct LeadModal {
    flow: LeadFlow,
    overlay: NodeRef,
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    phone: NodeRef,
    preferred_time: NodeRef,
    message: NodeRef,
    booking: BookingContext,
}

impl LeadModal {
    fn read_form(&self) -> (ContactFields, PreferredTime) {
        let input = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        let fields = ContactFields {
            name: input(&self.name),
            email: input(&self.email),
            phone: input(&self.phone),
            message: self
                .message
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        let preferred_time = self
            .preferred_time
            .cast::<HtmlSelectElement>()
            .map(|el| PreferredTime::from_value(&el.value()))
            .unwrap_or_default();
        (fields, preferred_time)
    }

    fn run(&mut self, ctx: &Context<Self>, effects: Vec<LeadEffect>) {
        let props = ctx.props();
        for effect in effects {
            match effect {
                LeadEffect::LockScroll => dom::lock_scroll(),
                LeadEffect::UnlockScroll => dom::unlock_scroll(),
                LeadEffect::ResetForm => {
                    if let Some(form) = self.form.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                LeadEffect::Submit { generation, lead } => {
                    let submit = props.sink.0.submit_lead(lead);
                    ctx.link()
                        .send_future(async move { Msg::Finished(generation, submit.await) });
                }
                LeadEffect::ShowError(e) => {
                    error!("{}", e);
                    props.on_error.emit(e.user_message(props.lang).to_string());
                }
            }
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.flow.is_submitting();
        let lang = ctx.props().lang;
        let window_label = |window: PreferredTime| match (window, lang) {
            (PreferredTime::Any, Language::Ru) => "Выберите время",
            (PreferredTime::Any, Language::En) => "Choose a time",
            (PreferredTime::Morning, Language::Ru) => "Утром (9:00-12:00)",
            (PreferredTime::Morning, Language::En) => "Morning (9:00-12:00)",
            (PreferredTime::Afternoon, Language::Ru) => "Днем (12:00-17:00)",
            (PreferredTime::Afternoon, Language::En) => "Afternoon (12:00-17:00)",
            (PreferredTime::Evening, Language::Ru) => "Вечером (17:00-20:00)",
            (PreferredTime::Evening, Language::En) => "Evening (17:00-20:00)",
        };
        let placeholder = match lang {
            Language::Ru => "Расскажите о вашем проекте...",
            Language::En => "Tell us about your project...",
        };

        html! {
            <div id="booking-form-step" class="booking-step active">
                <p>
                    <Tr
                        ru="Заполните форму, и мы свяжемся с вами для планирования встречи:"
                        en="Fill in the form and we will get back to you to schedule a meeting:"
                    />
                </p>
                <form class="booking-form" ref={self.form.clone()} onsubmit={ctx.link().callback(Msg::Submit)}>
                    <div class="form-group">
                        <label for="booking-name"><Tr ru="Ваше имя *" en="Your name *" /></label>
                        <input type="text" id="booking-name" name="name" required=true ref={self.name.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="booking-email">{"Email *"}</label>
                        <input type="email" id="booking-email" name="email" required=true ref={self.email.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="booking-phone"><Tr ru="Телефон" en="Phone" /></label>
                        <input type="tel" id="booking-phone" name="phone" ref={self.phone.clone()} />
                    </div>
                    <div class="form-group">
                        <label for="booking-preferred-time"><Tr ru="Предпочтительное время" en="Preferred time" /></label>
                        <select id="booking-preferred-time" name="preferred_time" ref={self.preferred_time.clone()}>
                            { for PreferredTime::all().iter().map(|window| html! {
                                <option value={window.value()}>{ window_label(*window) }</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="booking-message"><Tr ru="Сообщение" en="Message" /></label>
                        <textarea id="booking-message" name="message" rows="3" {placeholder} ref={self.message.clone()}></textarea>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn-primary" id="submit-booking" disabled={submitting}>
                            if submitting {
                                <Tr ru="Отправка..." en="Sending..." />
                            } else {
                                <Tr ru="Отправить заявку" en="Send request" />
                            }
                        </button>
                    </div>
                </form>
            </div>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div id="booking-success-step" class="booking-step active">
                <div class="success-message">
                    <div class="success-icon">{"✅"}</div>
                    <h3><Tr ru="Заявка отправлена!" en="Request sent!" /></h3>
                    <p>
                        <Tr
                            ru="Мы получили вашу заявку и свяжемся с вами в течение 24 часов для планирования встречи."
                            en="We have received your request and will contact you within 24 hours to schedule a meeting."
                        />
                    </p>
                    <button class="btn-primary" onclick={ctx.link().callback(|_| Msg::Close)}>
                        <Tr ru="Закрыть" en="Close" />
                    </button>
                </div>
            </div>
        }
    }
}

impl Component for LeadModal {
    type Message = Msg;
    type Properties = LeadModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: LeadFlow::new(),
            overlay: NodeRef::default(),
            form: NodeRef::default(),
            name: NodeRef::default(),
            email: NodeRef::default(),
            phone: NodeRef::default(),
            preferred_time: NodeRef::default(),
            message: NodeRef::default(),
            booking: BookingContext {
                open: ctx.link().callback(|_| Msg::Open),
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = match msg {
            Msg::Open => self.flow.open(),
            Msg::Close => self.flow.close(),
            Msg::OverlayClick(e) => {
                if !is_backdrop_click(&e, &self.overlay) {
                    return false;
                }
                self.flow.close()
            }
            Msg::Submit(e) => {
                e.prevent_default();
                let (fields, preferred_time) = self.read_form();
                self.flow.submit(&fields, preferred_time, Utc::now())
            }
            Msg::Finished(generation, result) => self.flow.submit_finished(generation, result),
        };
        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<BookingContext> context={self.booking.clone()}>
                { for ctx.props().children.iter() }
                <div
                    id="simple-booking-modal"
                    ref={self.overlay.clone()}
                    class={classes!("booking-modal-overlay", self.flow.is_open().then(|| "open"))}
                    onclick={ctx.link().callback(Msg::OverlayClick)}
                >
                    <div class="booking-modal-content">
                        <div class="booking-modal-header">
                            <h2><Tr ru="Запланировать встречу" en="Schedule a Meeting" /></h2>
                            <button class="booking-modal-close" onclick={ctx.link().callback(|_| Msg::Close)}>
                                {"×"}
                            </button>
                        </div>
                        <div class="booking-modal-body">
                            {
                                match self.flow.step() {
                                    LeadStep::Form => self.view_form(ctx),
                                    LeadStep::Success => self.view_success(ctx),
                                }
                            }
                        </div>
                    </div>
                </div>
            </ContextProvider<BookingContext>>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.flow.is_open() {
            dom::unlock_scroll();
        }
    }
}
