// Wires the particle field to the #particle-canvas element: sizes the surface
// to the viewport, seeds the field from the device-class config, keeps both in
// sync on resize, and drives the frame loop.

use super::viewport_size;
use crate::animator::Animator;
use crate::config::EffectsConfig;
use crate::field::ParticleField;
use crate::render::FieldRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, HtmlCanvasElement, Window};

pub fn start(
    window: &Window,
    document: &Document,
    config: &EffectsConfig,
) -> Result<Rc<Animator>, JsValue> {
    let canvas = document
        .get_element_by_id("particle-canvas")
        .ok_or_else(|| JsValue::from_str("#particle-canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let renderer = Rc::new(FieldRenderer::new(canvas)?);

    let (width, height) = viewport_size(window)?;
    renderer.fit_to(width, height);
    let mut rng = rand::thread_rng();
    let field = Rc::new(RefCell::new(ParticleField::new(
        width,
        height,
        config.field,
        &mut rng,
    )));

    // the surface follows the viewport; particle state is deliberately untouched
    {
        let resize_window = window.clone();
        let renderer = Rc::clone(&renderer);
        let field = Rc::clone(&field);
        let callback = Closure::wrap(Box::new(move || {
            if let Ok((width, height)) = viewport_size(&resize_window) {
                renderer.fit_to(width, height);
                field.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }

    let animator = Rc::new(Animator::new());
    let step = {
        let field = Rc::clone(&field);
        let renderer = Rc::clone(&renderer);
        move || {
            let mut field = field.borrow_mut();
            field.step();
            if let Err(err) = renderer.draw(&field) {
                console::warn_1(&err);
            }
        }
    };
    animator.start(step)?;
    Ok(animator)
}
