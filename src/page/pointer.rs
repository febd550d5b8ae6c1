// Pointer-driven touches: card tilt toward the cursor, gallery press
// feedback, and the fading cursor trail. Tilt and trail stay off on touch
// devices; gallery feedback works everywhere.

use super::elements;
use crate::animator::Animator;
use crate::config::EffectsConfig;
use crate::trail::{CursorTrail, TrailPoint};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

pub const GALLERY_PRESS_MS: i32 = 200;

// rotateX follows the vertical offset from the card center, rotateY the
// horizontal one, both damped by the same factor
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    ((y - center_y) / 20.0, (center_x - x) / 20.0)
}

pub fn attach(
    window: &Window,
    document: &Document,
    config: &EffectsConfig,
) -> Result<Option<Rc<Animator>>, JsValue> {
    attach_gallery_feedback(window, document)?;
    if config.touch {
        return Ok(None);
    }
    attach_tilt(document)?;
    let animator = attach_cursor_trail(window, document)?;
    Ok(Some(animator))
}

fn attach_tilt(document: &Document) -> Result<(), JsValue> {
    for card in elements(document, ".tilt-card")? {
        let card = match card.dyn_into::<HtmlElement>() {
            Ok(card) => card,
            Err(_) => continue,
        };
        {
            let card_ref = card.clone();
            let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = card_ref.get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                let (rotate_x, rotate_y) = tilt_angles(x, y, rect.width(), rect.height());
                let transform = format!(
                    "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
                    rotate_x, rotate_y
                );
                let _ = card_ref.style().set_property("transform", &transform);
            }) as Box<dyn FnMut(MouseEvent)>);
            card.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
            callback.forget();
        }
        {
            let card_ref = card.clone();
            let callback = Closure::wrap(Box::new(move || {
                let _ = card_ref.style().set_property(
                    "transform",
                    "perspective(1000px) rotateX(0) rotateY(0) translateY(0)",
                );
            }) as Box<dyn FnMut()>);
            card.add_event_listener_with_callback("mouseleave", callback.as_ref().unchecked_ref())?;
            callback.forget();
        }
    }
    Ok(())
}

fn attach_gallery_feedback(window: &Window, document: &Document) -> Result<(), JsValue> {
    for item in elements(document, ".gallery-placeholder")? {
        let item = match item.dyn_into::<HtmlElement>() {
            Ok(item) => item,
            Err(_) => continue,
        };
        let timeout_window = window.clone();
        let pressed = item.clone();
        let released = item.clone();
        // one reset closure per tile, reused across clicks
        let reset = Closure::wrap(Box::new(move || {
            let _ = released.style().set_property("transform", "");
        }) as Box<dyn FnMut()>);
        let callback = Closure::wrap(Box::new(move || {
            let _ = pressed.style().set_property("transform", "scale(0.95)");
            let _ = timeout_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.as_ref().unchecked_ref(),
                GALLERY_PRESS_MS,
            );
        }) as Box<dyn FnMut()>);
        item.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(())
}

// Samples pointer positions into the ring buffer on mousemove, and repaints
// the dots from its own frame loop
fn attach_cursor_trail(window: &Window, document: &Document) -> Result<Rc<Animator>, JsValue> {
    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("performance unavailable"))?;
    let trail = Rc::new(RefCell::new(CursorTrail::new()));

    {
        let trail = Rc::clone(&trail);
        let sample_clock = performance.clone();
        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
            trail.borrow_mut().push(
                event.client_x() as f64,
                event.client_y() as f64,
                sample_clock.now(),
            );
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let animator = Rc::new(Animator::new());
    let dots: Rc<RefCell<Vec<Element>>> = Rc::new(RefCell::new(Vec::new()));
    let draw_document = document.clone();
    let step = {
        let trail = Rc::clone(&trail);
        move || {
            let now = performance.now();
            let mut trail = trail.borrow_mut();
            trail.prune(now);
            // last frame's dots out, this frame's in
            for dot in dots.borrow_mut().drain(..) {
                dot.remove();
            }
            for point in trail.points() {
                if let Ok(dot) = make_dot(&draw_document, point, now) {
                    if body.append_child(&dot).is_ok() {
                        dots.borrow_mut().push(dot);
                    }
                }
            }
        }
    };
    animator.start(step)?;
    Ok(animator)
}

fn make_dot(document: &Document, point: &TrailPoint, now: f64) -> Result<Element, JsValue> {
    let dot = document.create_element("div")?;
    dot.set_class_name("trail-dot");
    let size = point.dot_size(now);
    let style = format!(
        "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; \
         background: rgba(234, 118, 5, {}); border-radius: 50%; \
         pointer-events: none; z-index: 9999; transform: translate(-50%, -50%);",
        point.x,
        point.y,
        size,
        size,
        point.dot_opacity(now)
    );
    dot.set_attribute("style", &style)?;
    Ok(dot)
}
