// DOM wiring for every effect. Each submodule attaches one concern; a missing
// page element skips that effect with a console warning and leaves the rest
// running.

pub mod canvas;
pub mod keyboard;
pub mod leaves;
pub mod menu;
pub mod pointer;
pub mod reveal;
pub mod scroll;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, Window};

pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

// All matches for a selector, as elements
pub fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut found = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                found.push(element);
            }
        }
    }
    Ok(found)
}

pub fn report_skipped(effect: &str, err: &JsValue) {
    console::warn_2(&JsValue::from_str(&format!("{} disabled:", effect)), err);
}
