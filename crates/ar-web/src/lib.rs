#![cfg(target_arch = "wasm32")]
use ar_core::{HotspotCatalog, Viewer, ViewerConfig, RESERVED_UI_SELECTORS};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod overlay;
mod scene;

// Optional element whose data-* attributes override tuning defaults
const CONFIG_ELEMENT_ID: &str = "ar-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ar-web starting");
    Ok(())
}

/// Leave the dashboard and bring up the AR layer. Bound to the dashboard's
/// start button; extra calls are ignored.
#[wasm_bindgen(js_name = startAR)]
pub fn start_ar() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[start] AR already started; ignoring");
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

#[wasm_bindgen(js_name = closePopup)]
pub fn close_popup() {
    if let Some(document) = dom::window_document() {
        overlay::close_popup(&document);
    }
}

#[wasm_bindgen(js_name = backToDashboard)]
pub fn back_to_dashboard() {
    if let Some(w) = web::window() {
        _ = w.location().reload();
    }
}

fn load_config(document: &web::Document) -> anyhow::Result<ViewerConfig> {
    let attrs = dom::data_attributes(document, CONFIG_ELEMENT_ID);
    let config = ViewerConfig::default()
        .with_overrides(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
    Ok(config)
}

// Occlusion test: presses inside the control panel, popup or back button
fn is_interactive(target: &web::EventTarget) -> bool {
    target
        .dyn_ref::<web::Element>()
        .map(|el| dom::within_any(el, &RESERVED_UI_SELECTORS))
        .unwrap_or(false)
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = match load_config(&document) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            ViewerConfig::default()
        }
    };
    let delay_ms = config.loading_delay_ms;

    overlay::enter_ar_layer(&document);

    let viewer: events::SharedViewer = Rc::new(RefCell::new(
        Viewer::new(config, is_interactive, HotspotCatalog::property())?,
    ));

    // Give the tracking engine time to bring up the camera before wiring
    let closure = Closure::once(move || {
        if let Some(document) = dom::window_document() {
            overlay::hide_loading(&document);
            init_ar(&document, &viewer);
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

fn init_ar(document: &web::Document, viewer: &events::SharedViewer) {
    let binding = Rc::new(RefCell::new(scene::SceneBinding::default()));
    binding.borrow_mut().bind(document);
    {
        let binding = binding.clone();
        viewer
            .borrow_mut()
            .on_scene_changed(move |t| binding.borrow().apply(t));
    }

    events::wire_marker(document, viewer);
    if let Some(window) = web::window() {
        events::wire_drag_handlers(&window, viewer);
    }
    events::wire_hotspots(document, viewer);
    events::wire_control_buttons(document, viewer);
    log::info!("[start] AR interactions ready");
}
