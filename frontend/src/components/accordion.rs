use yew::prelude::*;

use crate::i18n::context::Tr;

pub fn toggle_glyph(open: bool) -> &'static str {
    if open {
        "−"
    } else {
        "+"
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question_ru: AttrValue,
    pub question_en: AttrValue,
    pub children: Children,
}

/// One question of the FAQ. Items open independently of each other.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">
                    <Tr ru={props.question_ru.clone()} en={props.question_en.clone()} />
                </span>
                <span class="faq-toggle">{ toggle_glyph(*is_open) }</span>
            </button>
            <div class="faq-answer" style={if *is_open { "display: block;" } else { "display: none;" }}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_tracks_state() {
        assert_eq!(toggle_glyph(false), "+");
        assert_eq!(toggle_glyph(true), "−");
    }
}
