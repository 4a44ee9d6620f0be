//! Thin `web-sys` helpers shared by every behavior.
//!
//! Lookups return [`BehaviorError`] instead of `Option` so setup code can
//! bail out with `?` and the boot sequence can log why a behavior was
//! skipped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::NoDocument)
}

/// First element in the document matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<Element, BehaviorError> {
    document.query_selector(selector)?.ok_or_else(|| BehaviorError::missing(selector))
}

/// First descendant of `root` matching `selector`.
pub fn query_within(root: &Element, selector: &str) -> Result<Element, BehaviorError> {
    root.query_selector(selector)?.ok_or_else(|| BehaviorError::missing(selector))
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`, in document order.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.dyn_into::<Element>())
        .filter_map(Result::ok)
        .collect()
}

pub fn as_html(element: Element) -> Result<HtmlElement, BehaviorError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BehaviorError::Js("element is not an HTMLElement".to_owned()))
}

/// Rendered height of the fixed header, or zero when the page has none.
pub fn header_offset(document: &Document, selector: &str) -> f64 {
    match query(document, selector).and_then(as_html) {
        Ok(header) => f64::from(header.offset_height()),
        Err(_) => 0.0,
    }
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(event: &Event, selector: &str) -> Option<Element> {
    let Ok(element) = event.target()?.dyn_into::<Element>() else {
        return None;
    };
    element.closest(selector).unwrap_or(None)
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Like [`listen`], but tells the browser the handler never cancels the event.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), BehaviorError> {
    if on {
        element.class_list().add_1(class)?;
    } else {
        element.class_list().remove_1(class)?;
    }
    Ok(())
}

/// Lock or restore page scrolling by setting `overflow` on `<body>`.
pub fn set_body_overflow(document: &Document, value: &str) -> Result<(), BehaviorError> {
    let body = document.body().ok_or_else(|| BehaviorError::missing("body"))?;
    if value.is_empty() {
        body.style().remove_property("overflow")?;
    } else {
        body.style().set_property("overflow", value)?;
    }
    Ok(())
}

/// Log a failed handler step. Missing elements are expected and stay at debug.
pub fn report(context: &str, result: Result<(), BehaviorError>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_missing_element() => log::debug!("{context}: skipped ({e})"),
        Err(e) => log::warn!("{context}: {e}"),
    }
}
