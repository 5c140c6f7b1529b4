//! DOM Helpers
//!
//! Thin web-sys wrappers over the server-rendered page.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<web_sys::HtmlElement> {
    let element = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if element.is_none() {
        warn!("[DOM] #{} not found", id);
    }
    element
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn show(id: &str) {
    if let Some(el) = by_id(id) {
        let _ = el.style().set_property("display", "block");
    }
}

/// Attach a listener that lives for the rest of the page
pub fn listen<F>(element: &web_sys::HtmlElement, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = element.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Run `f` once the document has been parsed
pub fn on_content_ready<F: FnOnce() + 'static>(f: F) {
    let Some(doc) = document() else { return };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once(f);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref());
    cb.forget();
}

/// `window.location.search`, empty when unavailable
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(url) {
            warn!("[DOM] navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn open_new_window(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.open_with_url_and_target(url, "_blank") {
            warn!("[DOM] could not open {}: {:?}", url, e);
        }
    }
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// True when at least one element matches `selector`
pub fn exists(selector: &str) -> bool {
    document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .is_some()
}
