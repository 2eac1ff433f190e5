//! Height transitions that reveal or hide a control.
//!
//! The returned timer finishes the transition; dropping it cancels the finish,
//! which is how a newer slide on the same control overrides an older one.

use form_logging::form_warn;
use gloo::timers::callback::Timeout;
use web_sys::{CssStyleDeclaration, HtmlElement};

const ANIMATED: [&str; 3] = ["height", "overflow", "transition"];

/// Reveals `el`. A no-op when it is already shown and nothing is in flight.
pub(crate) fn down(el: &HtmlElement, duration_ms: u32) -> Option<Timeout> {
    let hidden = is_hidden(el);
    if !hidden && !in_flight(el) {
        return None;
    }
    let style = el.style();
    let start = if hidden { 0 } else { el.offset_height() };

    set(&style, "transition", "none");
    if hidden {
        remove(&style, "display");
        if is_hidden(el) {
            // Hidden by a stylesheet rule, not inline.
            set(&style, "display", "inline-block");
        }
    }
    set(&style, "overflow", "hidden");
    set(&style, "height", &format!("{start}px"));
    let target = el.scroll_height();

    animate_to(el, &style, target, duration_ms);
    let el = el.clone();
    Some(Timeout::new(duration_ms, move || {
        let style = el.style();
        for name in ANIMATED {
            remove(&style, name);
        }
    }))
}

/// Hides `el`. A no-op when it is already hidden and nothing is in flight.
pub(crate) fn up(el: &HtmlElement, duration_ms: u32) -> Option<Timeout> {
    if is_hidden(el) && !in_flight(el) {
        return None;
    }
    let style = el.style();
    let start = el.offset_height();

    set(&style, "transition", "none");
    set(&style, "overflow", "hidden");
    set(&style, "height", &format!("{start}px"));

    animate_to(el, &style, 0, duration_ms);
    let el = el.clone();
    Some(Timeout::new(duration_ms, move || {
        let style = el.style();
        set(&style, "display", "none");
        for name in ANIMATED {
            remove(&style, name);
        }
    }))
}

fn animate_to(el: &HtmlElement, style: &CssStyleDeclaration, height: i32, duration_ms: u32) {
    // Reading layout flushes the start height so the transition has something to run from.
    let _ = el.offset_height();
    set(style, "transition", &format!("height {duration_ms}ms"));
    set(style, "height", &format!("{height}px"));
}

/// An unfinished slide leaves its inline transition behind.
fn in_flight(el: &HtmlElement) -> bool {
    el.style()
        .get_property_value("transition")
        .is_ok_and(|transition| !transition.is_empty())
}

fn is_hidden(el: &HtmlElement) -> bool {
    if el.style().get_property_value("display").ok().as_deref() == Some("none") {
        return true;
    }
    web_sys::window()
        .and_then(|window| window.get_computed_style(el).ok().flatten())
        .and_then(|computed| computed.get_property_value("display").ok())
        .is_some_and(|display| display == "none")
}

fn set(style: &CssStyleDeclaration, name: &str, value: &str) {
    if let Err(err) = style.set_property(name, value) {
        form_warn!("style {}={} rejected: {:?}", name, value, err);
    }
}

fn remove(style: &CssStyleDeclaration, name: &str) {
    if let Err(err) = style.remove_property(name) {
        form_warn!("style {} could not be removed: {:?}", name, err);
    }
}
