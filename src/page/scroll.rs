// Scroll-driven chrome: navbar background past 80px, back-to-top visibility
// past 500px, active nav link tracking, and smooth in-page anchor scrolling.

use super::elements;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, ScrollBehavior,
    ScrollToOptions, Window,
};

pub const NAVBAR_SOLID_AT: f64 = 80.0;
pub const BACK_TO_TOP_AT: f64 = 500.0;
pub const SECTION_ACTIVE_MARGIN: f64 = 200.0;
pub const ANCHOR_OFFSET: f64 = 70.0;

pub fn attach(window: &Window, document: &Document) -> Result<(), JsValue> {
    let navbar = document.get_element_by_id("navbar");
    let back_to_top = document.get_element_by_id("back-to-top");
    let sections: Vec<HtmlElement> = elements(document, "section[id]")?
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect();
    let nav_links = elements(document, ".nav-link")?;

    let listener_window = window.clone();
    let callback = Closure::wrap(Box::new(move || {
        let scroll_y = listener_window.scroll_y().unwrap_or(0.0);
        if let Some(navbar) = &navbar {
            apply_navbar_state(navbar, scroll_y);
        }
        if let Some(button) = &back_to_top {
            apply_back_to_top_state(button, scroll_y);
        }
        highlight_active_link(&sections, &nav_links, scroll_y);
    }) as Box<dyn FnMut()>);
    let mut options = AddEventListenerOptions::new();
    options.passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    // bring the chrome in line with wherever the page loaded at
    let handler: &js_sys::Function = callback.as_ref().unchecked_ref();
    let _ = handler.call0(&JsValue::NULL);
    callback.forget();

    attach_back_to_top_click(window, document)?;
    attach_anchor_scroll(window, document)?;
    Ok(())
}

fn apply_navbar_state(navbar: &Element, scroll_y: f64) {
    let classes = navbar.class_list();
    if scroll_y > NAVBAR_SOLID_AT {
        let _ = classes.add_3("bg-white/95", "backdrop-blur-md", "shadow-md");
        let _ = classes.remove_1("bg-white/0");
    } else {
        let _ = classes.remove_3("bg-white/95", "backdrop-blur-md", "shadow-md");
        let _ = classes.add_1("bg-white/0");
    }
}

fn apply_back_to_top_state(button: &Element, scroll_y: f64) {
    let classes = button.class_list();
    if scroll_y > BACK_TO_TOP_AT {
        let _ = classes.remove_2("opacity-0", "pointer-events-none");
        let _ = classes.add_1("opacity-100");
    } else {
        let _ = classes.add_2("opacity-0", "pointer-events-none");
        let _ = classes.remove_1("opacity-100");
    }
}

// The lowest section whose top has scrolled within the margin wins
fn highlight_active_link(sections: &[HtmlElement], nav_links: &[Element], scroll_y: f64) {
    let mut current = String::new();
    for section in sections {
        if scroll_y >= section.offset_top() as f64 - SECTION_ACTIVE_MARGIN {
            current = section.id();
        }
    }
    let target = format!("#{}", current);
    for link in nav_links {
        let _ = link.class_list().remove_1("active");
        if link.get_attribute("href").as_deref() == Some(target.as_str()) {
            let _ = link.class_list().add_1("active");
        }
    }
}

fn attach_back_to_top_click(window: &Window, document: &Document) -> Result<(), JsValue> {
    let button = match document.get_element_by_id("back-to-top") {
        Some(button) => button,
        None => return Ok(()),
    };
    let scroll_window = window.clone();
    let callback = Closure::wrap(Box::new(move || {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        scroll_window.scroll_to_with_scroll_to_options(&options);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

// In-page anchors scroll smoothly, offset for the fixed header
fn attach_anchor_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    for anchor in elements(document, "a[href^='#']")? {
        let href = match anchor.get_attribute("href") {
            Some(href) => href,
            None => continue,
        };
        let scroll_window = window.clone();
        let target_document = document.clone();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let target = match target_document.query_selector(&href) {
                Ok(Some(target)) => target,
                _ => return,
            };
            let top = target.get_bounding_client_rect().top()
                + scroll_window.scroll_y().unwrap_or(0.0)
                - ANCHOR_OFFSET;
            let mut options = ScrollToOptions::new();
            options.top(top).behavior(ScrollBehavior::Smooth);
            scroll_window.scroll_to_with_scroll_to_options(&options);
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(())
}
