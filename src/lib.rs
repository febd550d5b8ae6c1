// Browser-facing entry point: resolves the device-class config once, then
// wires every page effect. Each effect degrades independently; a missing
// element or context logs a warning and the rest keep running.

mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod counter;
pub mod field;
pub mod konami;
pub mod leaf;
pub mod page;
pub mod particle;
pub mod render;
pub mod trail;

use animator::Animator;
use config::EffectsConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn initialize() {
    utils::set_panic_hook();
}

// Handle over the long-running pieces, so a hosting page can shut the frame
// loops and the leaf spawner down cleanly instead of leaving callbacks
// re-arming forever.
#[wasm_bindgen]
pub struct EffectsHandle {
    field: Option<Rc<Animator>>,
    trail: Option<Rc<Animator>>,
    leaf_interval: Option<i32>,
}

#[wasm_bindgen]
impl EffectsHandle {
    pub fn stop(&self) {
        if let Some(field) = &self.field {
            field.stop();
        }
        if let Some(trail) = &self.trail {
            trail.stop();
        }
        if let Some(interval) = self.leaf_interval {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(interval);
            }
        }
    }
}

#[wasm_bindgen]
pub fn start_effects() -> Result<EffectsHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = EffectsConfig::resolve(&window);

    let field = match page::canvas::start(&window, &document, &config) {
        Ok(animator) => Some(animator),
        Err(err) => {
            page::report_skipped("particle field", &err);
            None
        }
    };
    if let Err(err) = page::scroll::attach(&window, &document) {
        page::report_skipped("scroll effects", &err);
    }
    if let Err(err) = page::menu::attach(&document) {
        page::report_skipped("mobile menu", &err);
    }
    if let Err(err) = page::reveal::attach(&window, &document) {
        page::report_skipped("reveal animations", &err);
    }
    let trail = match page::pointer::attach(&window, &document, &config) {
        Ok(animator) => animator,
        Err(err) => {
            page::report_skipped("pointer effects", &err);
            None
        }
    };
    let leaf_interval = match page::leaves::attach(&window, &document, &config) {
        Ok(id) => Some(id),
        Err(err) => {
            page::report_skipped("floating leaves", &err);
            None
        }
    };
    if let Err(err) = page::keyboard::attach(&window, &document) {
        page::report_skipped("easter egg", &err);
    }

    Ok(EffectsHandle {
        field,
        trail,
        leaf_interval,
    })
}
