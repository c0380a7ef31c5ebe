use crate::dom;
use crate::overlay;
use ar_core::{Contacts, ControlButton, Viewer, ViewerEvent};
use glam::Vec2;
use smallvec::smallvec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedViewer = Rc<RefCell<Viewer<web::EventTarget>>>;

fn listen<E, F>(target: &web::EventTarget, kind: &str, handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
fn mouse_contacts(ev: &web::MouseEvent) -> Contacts {
    smallvec![Vec2::new(ev.client_x() as f32, ev.client_y() as f32)]
}

fn touch_contacts(ev: &web::TouchEvent) -> Contacts {
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

fn press(viewer: &SharedViewer, ev: &web::Event, contacts: Contacts) {
    let Some(target) = ev.target() else {
        return;
    };
    viewer.borrow_mut().handle(ViewerEvent::Press {
        target: &target,
        contacts,
    });
}

/// Mouse and single-finger touch drag on the whole window.
pub fn wire_drag_handlers(window: &web::Window, viewer: &SharedViewer) {
    let target: &web::EventTarget = window.as_ref();

    let v = viewer.clone();
    listen(target, "mousedown", move |ev: web::MouseEvent| {
        press(&v, &ev, mouse_contacts(&ev));
    });
    let v = viewer.clone();
    listen(target, "mousemove", move |ev: web::MouseEvent| {
        v.borrow_mut().handle(ViewerEvent::Move {
            contacts: mouse_contacts(&ev),
        });
    });
    let v = viewer.clone();
    listen(target, "mouseup", move |_: web::MouseEvent| {
        v.borrow_mut().handle(ViewerEvent::Release);
    });

    let v = viewer.clone();
    listen(target, "touchstart", move |ev: web::TouchEvent| {
        press(&v, &ev, touch_contacts(&ev));
    });
    let v = viewer.clone();
    listen(target, "touchmove", move |ev: web::TouchEvent| {
        v.borrow_mut().handle(ViewerEvent::Move {
            contacts: touch_contacts(&ev),
        });
    });
    for kind in ["touchend", "touchcancel"] {
        let v = viewer.clone();
        listen(target, kind, move |_: web::TouchEvent| {
            v.borrow_mut().handle(ViewerEvent::Release);
        });
    }
}

/// Found/lost events from the tracking engine's marker entity.
pub fn wire_marker(document: &web::Document, viewer: &SharedViewer) {
    let Ok(Some(marker)) = document.query_selector("#marker-hiro") else {
        log::warn!("[marker] #marker-hiro not found; model stays locked");
        return;
    };
    for (kind, found) in [("markerFound", true), ("markerLost", false)] {
        let v = viewer.clone();
        let doc = document.clone();
        listen(marker.as_ref(), kind, move |_: web::Event| {
            let status = {
                let mut viewer = v.borrow_mut();
                viewer.handle(if found {
                    ViewerEvent::MarkerFound
                } else {
                    ViewerEvent::MarkerLost
                });
                viewer.marker.status()
            };
            overlay::update_status(&doc, status);
        });
    }
}

/// Hotspot clicks open the info popup and never reach the drag handlers.
pub fn wire_hotspots(document: &web::Document, viewer: &SharedViewer) {
    let Ok(spots) = document.query_selector_all(".clickable") else {
        return;
    };
    for i in 0..spots.length() {
        let Some(spot) = spots.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let key = spot.get_attribute("data-part").unwrap_or_default();
        let v = viewer.clone();
        let doc = document.clone();
        listen(spot.as_ref(), "click", move |ev: web::Event| {
            ev.stop_propagation();
            let request = v.borrow_mut().handle(ViewerEvent::HotspotClick(&key));
            if let Some(request) = request {
                overlay::apply_popup(&doc, &request);
            }
        });
    }

    let v = viewer.clone();
    dom::add_click_listener(document, "contact-btn", move || {
        let Some(url) = v.borrow().hotspots.confirm_contact().map(|m| m.mailto_url()) else {
            return;
        };
        log::info!("[contact] opening mail client");
        if let Some(w) = web::window() {
            _ = w.location().set_href(&url);
        }
    });
}

pub fn wire_control_buttons(document: &web::Document, viewer: &SharedViewer) {
    for button in ControlButton::ALL {
        let v = viewer.clone();
        dom::add_click_listener(document, &button.element_id(), move || {
            v.borrow_mut().handle(ViewerEvent::Button(button));
        });
    }
}
