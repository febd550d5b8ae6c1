// Konami code listener: a matched sequence hue-rotates the whole page for a
// few seconds, then fades back.

use crate::konami::KonamiDetector;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, KeyboardEvent, Window};

pub const HUE_SPIN_MS: i32 = 3_000;

pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let detector = Rc::new(RefCell::new(KonamiDetector::new()));

    let reset = {
        let body = body.clone();
        Closure::wrap(Box::new(move || {
            let _ = body.style().set_property("filter", "");
        }) as Box<dyn FnMut()>)
    };

    let timeout_window = window.clone();
    let callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if !detector.borrow_mut().push(event.key_code()) {
            return;
        }
        let _ = body.style().set_property("transition", "filter 0.5s");
        let _ = body.style().set_property("filter", "hue-rotate(90deg)");
        let _ = timeout_window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reset.as_ref().unchecked_ref(),
            HUE_SPIN_MS,
        );
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
