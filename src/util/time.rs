//! Wall-clock helpers for chat message timestamps.
//!
//! Backed by `js_sys::Date` in the browser; inert off wasm so the state
//! models stay host-testable.

/// Current time in milliseconds since the epoch.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Format a millisecond timestamp as a local `HH:MM` stamp.
pub fn format_hh_mm(timestamp_ms: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}
