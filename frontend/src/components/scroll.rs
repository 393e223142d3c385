use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::BACK_TO_TOP_AFTER_PX;
use crate::dom;

/// Share of the element that must be visible before it animates in.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Triggers a little before the element clears the bottom edge.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Whether the window is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let past = use_state_eq(|| scrolled_past(dom::scroll_y(), threshold));

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold: &f64| {
                let threshold = *threshold;
                let window = web_sys::window();
                let listener = Closure::wrap(Box::new(move || {
                    past.set(scrolled_past(dom::scroll_y(), threshold));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            threshold,
        );
    }

    *past
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Gains the `animated` class the first time it scrolls into view.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let animated = use_state_eq(|| false);

    {
        let animated = animated.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let element = node.cast::<Element>();
                let on_animated = animated.clone();
                let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            on_animated.set(true);
                            observer.unobserve(&entry.target());
                        }
                    }
                }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                let observer =
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok();
                match (&observer, &element) {
                    (Some(observer), Some(element)) => observer.observe(element),
                    // no observer support: just show it
                    _ => animated.set(true),
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node.clone(),
        );
    }

    html! {
        <div ref={node} class={classes!("animate-on-scroll", props.class.clone(), (*animated).then(|| "animated"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after scrolling, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_follow: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// In-page `#section` link with smooth scrolling.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::scroll_to_anchor(&href) {
                e.prevent_default();
            }
            on_follow.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scrolled_past(BACK_TO_TOP_AFTER_PX);
    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    html! {
        <button
            id="back-to-top"
            aria-label="back to top"
            style={if visible { "display: block;" } else { "display: none;" }}
            {onclick}
        >
            {"↑"}
        </button>
    }
}
