// Device-class configuration. Touch capability is read once at startup and
// resolved into one config value that every effect takes from there; nothing
// else re-checks the device class later.

use wasm_bindgen::JsValue;
use web_sys::Window;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub connection_distance: f64,
    pub draw_connections: bool,
}

impl FieldConfig {
    // Touch devices get a lighter field: fewer particles, shorter connection
    // reach, and no connection pass at all.
    pub fn for_device(touch: bool) -> FieldConfig {
        if touch {
            FieldConfig {
                particle_count: 30,
                connection_distance: 100.0,
                draw_connections: false,
            }
        } else {
            FieldConfig {
                particle_count: 60,
                connection_distance: 150.0,
                draw_connections: true,
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub touch: bool,
    pub field: FieldConfig,
    pub leaf_interval_ms: i32,
}

impl EffectsConfig {
    const DESKTOP_LEAF_INTERVAL_MS: i32 = 3_000;
    const TOUCH_LEAF_INTERVAL_MS: i32 = 5_000;

    pub fn for_device(touch: bool) -> EffectsConfig {
        EffectsConfig {
            touch,
            field: FieldConfig::for_device(touch),
            leaf_interval_ms: if touch {
                Self::TOUCH_LEAF_INTERVAL_MS
            } else {
                Self::DESKTOP_LEAF_INTERVAL_MS
            },
        }
    }

    pub fn resolve(window: &Window) -> EffectsConfig {
        EffectsConfig::for_device(is_touch_device(window))
    }
}

// Same signal the page uses: an `ontouchstart` property on the window, or a
// navigator reporting touch points.
pub fn is_touch_device(window: &Window) -> bool {
    let has_touch_start = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
        .unwrap_or(false);
    has_touch_start || window.navigator().max_touch_points() > 0
}
