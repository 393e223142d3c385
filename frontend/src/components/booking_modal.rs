use std::rc::Rc;

use chrono::{NaiveDate, Utc};
use gloo_timers::future::TimeoutFuture;
use log::error;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::error::BookingError;
use crate::booking::record::{BookingConfirmation, ContactFields};
use crate::booking::scheduler::Scheduler;
use crate::booking::wizard::{BookingWizard, Effect, Generation, Step};
use crate::components::booking_button::{is_backdrop_click, BookingContext};
use crate::dom;
use crate::i18n::context::Tr;
use crate::i18n::language::Language;

/// Shared handle to a scheduler; two handles are equal when they point at
/// the same instance.
#[derive(Clone)]
pub struct SchedulerHandle(pub Rc<dyn Scheduler>);

impl PartialEq for SchedulerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct CalBookingModalProps {
    pub scheduler: SchedulerHandle,
    pub lang: Language,
    pub on_error: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Open,
    Close,
    OverlayClick(MouseEvent),
    RetryLoad,
    SlotsLoaded(Generation, Result<Vec<String>, BookingError>),
    SelectDate(NaiveDate),
    SelectTime(String),
    AdvanceElapsed(Generation, Step),
    Back,
    Submit(SubmitEvent),
    SubmitFinished(Generation, Result<BookingConfirmation, BookingError>),
}

#[derive(Default)]
struct ContactRefs {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    phone: NodeRef,
    message: NodeRef,
}

impl ContactRefs {
    fn read(&self) -> ContactFields {
        let input = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        ContactFields {
            name: input(&self.name),
            email: input(&self.email),
            phone: input(&self.phone),
            message: self
                .message
                .cast::<HtmlTextAreaElement>()
                .map(|el| el.value())
                .unwrap_or_default(),
        }
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/// Date → time → details → confirmation modal. Wraps the page and provides
/// the [`BookingContext`] its trigger buttons use.
pub struct CalBookingModal {
    wizard: BookingWizard,
    contact: ContactRefs,
    overlay: NodeRef,
    booking: BookingContext,
}

impl CalBookingModal {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        let props = ctx.props();
        for effect in effects {
            match effect {
                Effect::LockScroll => dom::lock_scroll(),
                Effect::UnlockScroll => dom::unlock_scroll(),
                Effect::ResetForm => self.contact.reset(),
                Effect::LoadSlots(generation) => {
                    let load = props.scheduler.0.fetch_available_slots();
                    ctx.link()
                        .send_future(async move { Msg::SlotsLoaded(generation, load.await) });
                }
                Effect::ScheduleAdvance {
                    generation,
                    from,
                    delay_ms,
                } => {
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(delay_ms).await;
                        Msg::AdvanceElapsed(generation, from)
                    });
                }
                Effect::Submit { generation, record } => {
                    let submit = props.scheduler.0.create_booking(record, props.lang);
                    ctx.link()
                        .send_future(async move { Msg::SubmitFinished(generation, submit.await) });
                }
                Effect::ShowError(e) => {
                    error!("{}", e);
                    props.on_error.emit(e.user_message(props.lang).to_string());
                }
            }
        }
    }

    fn view_calendar(&self, ctx: &Context<Self>) -> Html {
        let lang = ctx.props().lang;
        html! {
            <div class="cal-calendar-grid">
                { for self.wizard.calendar().iter().map(|day| {
                    let date = day.date;
                    let onclick = ctx.link().callback(move |_| Msg::SelectDate(date));
                    html! {
                        <div
                            class={classes!(
                                "cal-day-slot",
                                day.is_today.then(|| "today"),
                                self.wizard.is_date_selected(date).then(|| "selected"),
                            )}
                            data-date={day.iso()}
                            {onclick}
                        >
                            <div class="cal-day-name">{ day.weekday_label(lang) }</div>
                            <div class="cal-day-number">{ day.day_number() }</div>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn view_times(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="cal-time-grid">
                { for self.wizard.session().time_slots.iter().map(|time| {
                    let onclick = {
                        let time = time.clone();
                        ctx.link().callback(move |_| Msg::SelectTime(time.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("cal-time-slot", self.wizard.is_time_selected(time).then(|| "selected"))}
                            data-time={time.clone()}
                            {onclick}
                        >
                            { time }
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn view_contact(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.wizard.session().submitting;
        html! {
            <form class="cal-user-form" ref={self.contact.form.clone()} onsubmit={ctx.link().callback(Msg::Submit)}>
                <div class="cal-form-group">
                    <label><Tr ru="Имя *" en="Name *" /></label>
                    <input type="text" name="name" required=true ref={self.contact.name.clone()} />
                </div>
                <div class="cal-form-group">
                    <label>{"Email *"}</label>
                    <input type="email" name="email" required=true ref={self.contact.email.clone()} />
                </div>
                <div class="cal-form-group">
                    <label><Tr ru="Телефон" en="Phone" /></label>
                    <input type="tel" name="phone" ref={self.contact.phone.clone()} />
                </div>
                <div class="cal-form-group">
                    <label><Tr ru="Комментарий" en="Message" /></label>
                    <textarea name="message" rows="3" ref={self.contact.message.clone()}></textarea>
                </div>
                <div class="cal-form-actions">
                    <button
                        type="button"
                        class="cal-btn cal-btn-secondary"
                        disabled={submitting}
                        onclick={ctx.link().callback(|_| Msg::Back)}
                    >
                        <Tr ru="Назад" en="Back" />
                    </button>
                    <button type="submit" class="cal-btn cal-btn-primary" disabled={submitting}>
                        if submitting {
                            <span class="cal-spinner small"></span>
                            <Tr ru=" Бронирование..." en=" Booking..." />
                        } else {
                            <Tr ru="Подтвердить встречу" en="Confirm Meeting" />
                        }
                    </button>
                </div>
            </form>
        }
    }

    fn view_step(&self, ctx: &Context<Self>, step: Step) -> Html {
        let body = match step {
            Step::DateSelect => html! {
                <>
                    <h3><Tr ru="Выберите дату" en="Choose Date" /></h3>
                    <div class="cal-calendar">{ self.view_calendar(ctx) }</div>
                </>
            },
            Step::TimeSelect => html! {
                <>
                    <h3><Tr ru="Выберите время" en="Choose Time" /></h3>
                    <div class="cal-time-slots">{ self.view_times(ctx) }</div>
                    <div class="cal-form-actions">
                        <button type="button" class="cal-btn cal-btn-secondary" onclick={ctx.link().callback(|_| Msg::Back)}>
                            <Tr ru="Назад" en="Back" />
                        </button>
                    </div>
                </>
            },
            Step::ContactForm => html! {
                <>
                    <h3><Tr ru="Ваши данные" en="Your Details" /></h3>
                    { self.view_contact(ctx) }
                </>
            },
            Step::Success => html! {
                <div class="cal-success-message">
                    <div class="cal-success-icon">{"✅"}</div>
                    <h3><Tr ru="Встреча запланирована!" en="Meeting Scheduled!" /></h3>
                    <p><Tr ru="Мы отправили вам подтверждение на email" en="We've sent you a confirmation email" /></p>
                    <button class="cal-btn cal-btn-primary" onclick={ctx.link().callback(|_| Msg::Close)}>
                        <Tr ru="Закрыть" en="Close" />
                    </button>
                </div>
            },
        };

        html! {
            <div class={classes!("cal-step", step.class(), (self.wizard.step() == step).then(|| "active"))}>
                { body }
            </div>
        }
    }

    fn view_body(&self, ctx: &Context<Self>) -> Html {
        let session = self.wizard.session();
        if session.loading {
            return html! {
                <div class="cal-loading-state">
                    <div class="cal-spinner"></div>
                    <p><Tr ru="Загрузка доступного времени..." en="Loading available times..." /></p>
                </div>
            };
        }
        if session.load_failed {
            return html! {
                <div class="cal-load-error">
                    <p><Tr ru="Не удалось загрузить расписание." en="Could not load the schedule." /></p>
                    <button class="cal-btn cal-btn-primary" onclick={ctx.link().callback(|_| Msg::RetryLoad)}>
                        <Tr ru="Попробовать снова" en="Try again" />
                    </button>
                </div>
            };
        }
        html! {
            <div class="cal-booking-form">
                { for Step::ALL.iter().map(|step| self.view_step(ctx, *step)) }
            </div>
        }
    }
}

impl Component for CalBookingModal {
    type Message = Msg;
    type Properties = CalBookingModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            wizard: BookingWizard::new(),
            contact: ContactRefs::default(),
            overlay: NodeRef::default(),
            booking: BookingContext {
                open: ctx.link().callback(|_| Msg::Open),
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = match msg {
            Msg::Open => self.wizard.open(Utc::now().date_naive()),
            Msg::Close => self.wizard.close(),
            Msg::OverlayClick(e) => {
                if !is_backdrop_click(&e, &self.overlay) {
                    return false;
                }
                self.wizard.close()
            }
            Msg::RetryLoad => self.wizard.reload_slots(),
            Msg::SlotsLoaded(generation, result) => self.wizard.slots_loaded(generation, result),
            Msg::SelectDate(date) => self.wizard.select_date(date),
            Msg::SelectTime(time) => self.wizard.select_time(&time),
            Msg::AdvanceElapsed(generation, from) => {
                self.wizard.advance_elapsed(generation, from);
                Vec::new()
            }
            Msg::Back => {
                self.wizard.back();
                Vec::new()
            }
            Msg::Submit(e) => {
                e.prevent_default();
                let fields = self.contact.read();
                self.wizard.submit_contact(&fields)
            }
            Msg::SubmitFinished(generation, result) => self.wizard.submit_finished(generation, result),
        };
        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<BookingContext> context={self.booking.clone()}>
                { for ctx.props().children.iter() }
                <div
                    id="cal-booking-modal"
                    ref={self.overlay.clone()}
                    class={classes!("cal-modal-overlay", self.wizard.is_open().then(|| "open"))}
                    onclick={ctx.link().callback(Msg::OverlayClick)}
                >
                    <div class="cal-modal-content">
                        <div class="cal-modal-header">
                            <h2 class="cal-modal-title">
                                <Tr ru="Запланировать встречу" en="Schedule a Meeting" />
                            </h2>
                            <button class="cal-modal-close" onclick={ctx.link().callback(|_| Msg::Close)}>
                                {"×"}
                            </button>
                        </div>
                        <div class="cal-modal-body">
                            if self.wizard.is_open() {
                                { self.view_body(ctx) }
                            }
                        </div>
                    </div>
                </div>
            </ContextProvider<BookingContext>>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.wizard.is_open() {
            dom::unlock_scroll();
        }
    }
}
