// Mobile menu wiring: the burger button opens, the close control, the
// overlay, and any nav link close. Body scrolling is locked while open.

use super::elements;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub fn attach(document: &Document) -> Result<(), JsValue> {
    let menu = require(document, "mobile-menu")?;
    let open_button = require(document, "mobile-menu-btn")?;
    let close_button = require(document, "mobile-menu-close")?;
    let overlay = require(document, "mobile-overlay")?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    {
        let menu = menu.clone();
        let overlay = overlay.clone();
        let body = body.clone();
        let callback = Closure::wrap(Box::new(move || {
            open_menu(&menu, &overlay, &body);
        }) as Box<dyn FnMut()>);
        open_button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }

    let mut closers = vec![close_button, overlay.clone()];
    closers.extend(elements(document, ".mobile-nav-link")?);
    for closer in closers {
        let menu = menu.clone();
        let overlay = overlay.clone();
        let body = body.clone();
        let callback = Closure::wrap(Box::new(move || {
            close_menu(&menu, &overlay, &body);
        }) as Box<dyn FnMut()>);
        closer.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(())
}

fn require(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

fn open_menu(menu: &Element, overlay: &Element, body: &HtmlElement) {
    let _ = menu.class_list().add_1("open");
    let _ = overlay.class_list().add_1("active");
    let _ = body.style().set_property("overflow", "hidden");
}

fn close_menu(menu: &Element, overlay: &Element, body: &HtmlElement) {
    let _ = menu.class_list().remove_1("open");
    let _ = overlay.class_list().remove_1("active");
    let _ = body.style().set_property("overflow", "");
}
