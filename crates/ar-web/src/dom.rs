use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{element_id}");
    }
}

/// Set inline `display` on the first element matching `selector`.
pub fn set_display(document: &web::Document, selector: &str, display: &str) {
    if let Some(el) = query_html(document, selector) {
        _ = el.style().set_property("display", display);
    }
}

#[inline]
pub fn show(document: &web::Document, selector: &str) {
    set_display(document, selector, "flex");
}

#[inline]
pub fn hide(document: &web::Document, selector: &str) {
    set_display(document, selector, "none");
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Set text content of `#id`; no-op when absent.
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Whether `el` sits inside any subtree matching one of `selectors`.
pub fn within_any(el: &web::Element, selectors: &[&str]) -> bool {
    selectors
        .iter()
        .any(|sel| matches!(el.closest(sel), Ok(Some(_))))
}

/// Collect `data-*` attributes of `#id` as (key, value) pairs.
pub fn data_attributes(document: &web::Document, id: &str) -> Vec<(String, String)> {
    let Some(el) = document.get_element_by_id(id) else {
        return Vec::new();
    };
    el.get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = name.strip_prefix("data-")?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}
