// Owned requestAnimationFrame loop. The callback re-arms itself only while
// `running` is set, so `stop` ends the chain at the next callback instead of
// leaking a perpetual one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub struct Animator {
    running: Cell<bool>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Animator {
    pub fn new() -> Animator {
        Animator {
            running: Cell::new(false),
            frame: RefCell::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    // Arms the first frame and keeps going until `stop`. Starting an already
    // running animator is a no-op.
    pub fn start<F>(self: &Rc<Self>, mut step: F) -> Result<(), JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window to animate in"))?;
        if self.running.replace(true) {
            return Ok(());
        }

        let animator = Rc::clone(self);
        let closure = Closure::wrap(Box::new(move || {
            if !animator.running.get() {
                return;
            }
            step();
            if !animator.running.get() {
                return;
            }
            if let Some(window) = web_sys::window() {
                if let Some(frame) = animator.frame.borrow().as_ref() {
                    let _ = window.request_animation_frame(frame.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut()>);

        if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            self.running.set(false);
            return Err(err);
        }
        *self.frame.borrow_mut() = Some(closure);
        Ok(())
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}
