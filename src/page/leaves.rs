// Interval-spawned floating leaves: random emoji drifting through their CSS
// animation, removed once the longest possible fall has finished. Spawn rate
// comes from the device-class config.

use crate::config::EffectsConfig;
use crate::leaf::{LeafSpec, LEAF_LIFETIME_MS};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, Window};

pub fn attach(window: &Window, document: &Document, config: &EffectsConfig) -> Result<i32, JsValue> {
    let live_leaves: Rc<RefCell<VecDeque<Element>>> = Rc::new(RefCell::new(VecDeque::new()));

    // every leaf shares one lifetime, so expiry is strictly first-in-first-out
    // and a single shared timeout callback can retire them
    let expire = {
        let live_leaves = Rc::clone(&live_leaves);
        Closure::wrap(Box::new(move || {
            if let Some(leaf) = live_leaves.borrow_mut().pop_front() {
                leaf.remove();
            }
        }) as Box<dyn FnMut()>)
    };

    let spawn_window = window.clone();
    let spawn_document = document.clone();
    let spawn = Closure::wrap(Box::new(move || {
        let mut rng = rand::thread_rng();
        let spec = LeafSpec::random(&mut rng);
        match spawn_leaf(&spawn_document, &spec) {
            Ok(leaf) => {
                live_leaves.borrow_mut().push_back(leaf);
                let _ = spawn_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    expire.as_ref().unchecked_ref(),
                    LEAF_LIFETIME_MS,
                );
            }
            Err(err) => console::warn_1(&err),
        }
    }) as Box<dyn FnMut()>);

    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        spawn.as_ref().unchecked_ref(),
        config.leaf_interval_ms,
    )?;
    spawn.forget();
    Ok(interval_id)
}

fn spawn_leaf(document: &Document, spec: &LeafSpec) -> Result<Element, JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let leaf = document.create_element("div")?;
    leaf.class_list().add_1("floating-leaf")?;
    leaf.set_text_content(Some(spec.icon));
    let style = format!(
        "left: {}vw; font-size: {}px; animation-duration: {}s;",
        spec.left_vw, spec.font_size_px, spec.fall_duration_s
    );
    leaf.set_attribute("style", &style)?;
    body.append_child(&leaf)?;
    Ok(leaf)
}
