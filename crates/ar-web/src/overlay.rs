use crate::dom;
use ar_core::{MarkerStatus, PopupContent, PopupRequest};
use web_sys as web;

#[inline]
pub fn show_popup(document: &web::Document, content: &PopupContent) {
    dom::set_text(document, "popup-title", &content.title);
    dom::set_text(document, "popup-desc", &content.description);
    dom::show(document, "#info-popup");
}

#[inline]
pub fn close_popup(document: &web::Document) {
    dom::hide(document, "#info-popup");
}

pub fn apply_popup(document: &web::Document, request: &PopupRequest) {
    match request {
        PopupRequest::Show(content) => show_popup(document, content),
        PopupRequest::Close => close_popup(document),
    }
}

/// Update the marker status label in the header
pub fn update_status(document: &web::Document, status: MarkerStatus) {
    let Some(el) = dom::query_html(document, "#status-text") else {
        return;
    };
    el.set_text_content(Some(status.label()));
    let style = el.style();
    _ = style.set_property("color", status.color());
    if let Some(bg) = status.background() {
        _ = style.set_property("background", bg);
    }
}

/// Swap the dashboard for the AR layer and show the loading screen
pub fn enter_ar_layer(document: &web::Document) {
    dom::hide(document, "#dashboard");
    dom::show(document, ".ar-header");
    dom::show(document, ".control-panel");
    dom::show(document, "#loading");
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    dom::hide(document, "#loading");
}
