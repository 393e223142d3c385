use yew::prelude::*;

use crate::components::booking_button::is_backdrop_click;
use crate::components::expandable_card::ExpandableCard;
use crate::dom;
use crate::i18n::context::Tr;
use crate::pages::cases::CASES;

#[derive(Properties, PartialEq)]
pub struct CasesModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// Quick look at the case studies from the main page navigation.
#[function_component(CasesModal)]
pub fn cases_modal(props: &CasesModalProps) -> Html {
    let overlay = use_node_ref();

    use_effect_with_deps(
        |open: &bool| {
            dom::set_body_class("modal-active", *open);
            || dom::set_body_class("modal-active", false)
        },
        props.open,
    );

    let on_backdrop = {
        let overlay = overlay.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if is_backdrop_click(&e, &overlay) {
                on_close.emit(());
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="cases-modal"
            ref={overlay}
            class="modal"
            style={if props.open { "display: flex;" } else { "display: none;" }}
            onclick={on_backdrop}
        >
            <div class="modal-content">
                <button class="close-button" onclick={on_close_button}>{"×"}</button>
                <h2><Tr ru="Наши кейсы" en="Our Cases" /></h2>
                <div class="cases-grid">
                    { for CASES.iter().map(|case| html! {
                        <ExpandableCard href={Some(AttrValue::from(format!("/cases#{}", case.slug)))}>
                            <h3><Tr ru={case.title_ru} en={case.title_en} /></h3>
                            <p><Tr ru={case.summary_ru} en={case.summary_en} /></p>
                        </ExpandableCard>
                    }) }
                </div>
            </div>
        </div>
    }
}
