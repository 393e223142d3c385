use log::warn;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Writes `<html lang="..">`.
pub fn set_document_lang(code: &str) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if root.set_attribute("lang", code).is_err() {
                warn!("Failed to set document lang to {}", code);
            }
        }
        None => warn!("No document element to set lang on"),
    }
}

/// Stops the page behind a modal from scrolling.
pub fn lock_scroll() {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

pub fn unlock_scroll() {
    if let Some(body) = body() {
        let _ = body.style().remove_property("overflow");
    }
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let list = body.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scrolls to the element referenced by `#anchor` or `/#anchor`.
/// Returns `false` when there is no such element on the current page.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.trim_start_matches('/').strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
