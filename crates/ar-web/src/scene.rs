//! Pushes scene transforms into the A-Frame entities.

use ar_core::SceneTransform;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Entity handles, resolved once the scene has loaded. Until then every
/// apply is a no-op.
#[derive(Default)]
pub struct SceneBinding {
    container: Option<web::Element>,
    model: Option<web::Element>,
}

impl SceneBinding {
    pub fn bind(&mut self, document: &web::Document) {
        self.container = document.query_selector("#model-container").ok().flatten();
        self.model = document.query_selector("#house-model").ok().flatten();
        if self.container.is_none() || self.model.is_none() {
            log::warn!("[scene] model entities not found; pose updates disabled");
        }
    }

    pub fn apply(&self, t: &SceneTransform) {
        let (Some(container), Some(model)) = (&self.container, &self.model) else {
            return;
        };
        _ = container.set_attribute("position", &t.position_attr());
        _ = container.set_attribute("rotation", &t.rotation_attr());
        _ = model.set_attribute("scale", &t.scale_attr());

        // Keep hotspot hit-testing in sync with the moved geometry
        if let Err(e) = refresh_raycaster(container) {
            log::debug!("[scene] raycaster refresh skipped: {:?}", e);
        }
    }
}

fn refresh_raycaster(anchor: &web::Element) -> Result<(), JsValue> {
    let Some(scene) = anchor.owner_document().and_then(|d| d.query_selector("a-scene").ok().flatten())
    else {
        return Ok(());
    };
    let systems = js_sys::Reflect::get(&scene, &JsValue::from_str("systems"))?;
    if systems.is_undefined() || systems.is_null() {
        return Ok(());
    }
    let raycaster = js_sys::Reflect::get(&systems, &JsValue::from_str("raycaster"))?;
    if raycaster.is_undefined() || raycaster.is_null() {
        return Ok(());
    }
    let refresh = js_sys::Reflect::get(&raycaster, &JsValue::from_str("refreshObjects"))?;
    if let Some(f) = refresh.dyn_ref::<js_sys::Function>() {
        f.call0(&raycaster)?;
    }
    Ok(())
}
