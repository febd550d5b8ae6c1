// Scroll-into-view reveals: stat counters count up once when 30% visible,
// progress bars get their width set after a short delay. Both watch with an
// IntersectionObserver and unobserve after triggering, so each element
// animates exactly once.

use super::elements;
use crate::animator::Animator;
use crate::counter::CountUp;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    console, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

pub const REVEAL_THRESHOLD: f64 = 0.3;
pub const PROGRESS_REVEAL_DELAY_MS: i32 = 300;

pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    observe_once(window, elements(document, ".counter")?, start_counter)?;
    observe_once(window, elements(document, ".progress-bar")?, reveal_progress_bar)?;
    Ok(())
}

// One observer per element set; the handler fires once per element
fn observe_once(
    window: &Window,
    targets: Vec<Element>,
    on_visible: fn(&Window, Element),
) -> Result<(), JsValue> {
    if targets.is_empty() {
        return Ok(());
    }
    let handler_window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(&handler_window, target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

// Count from zero to the element's data-target over the fixed duration,
// stopping the frame loop once the target value is painted
fn start_counter(window: &Window, element: Element) {
    let target = element
        .get_attribute("data-target")
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);
    let count = CountUp::new(target, element.has_attribute("data-decimal"));
    let performance = match window.performance() {
        Some(performance) => performance,
        None => return,
    };
    let started_at = performance.now();
    let animator = Rc::new(Animator::new());
    let step = {
        let animator = Rc::clone(&animator);
        move || {
            let elapsed = performance.now() - started_at;
            element.set_text_content(Some(&count.format(count.value_at(elapsed))));
            if count.finished(elapsed) {
                animator.stop();
            }
        }
    };
    if let Err(err) = animator.start(step) {
        console::warn_1(&err);
    }
}

fn reveal_progress_bar(window: &Window, element: Element) {
    let width = match element.get_attribute("data-width") {
        Some(width) => width,
        None => return,
    };
    let element = match element.dyn_into::<HtmlElement>() {
        Ok(element) => element,
        Err(_) => return,
    };
    let callback = Closure::wrap(Box::new(move || {
        let _ = element.style().set_property("width", &width);
    }) as Box<dyn FnMut()>);
    let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        PROGRESS_REVEAL_DELAY_MS,
    );
    if scheduled.is_ok() {
        callback.forget();
    }
}
