/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Wall-clock labels for chat messages and insights.

use wasm_bindgen::JsValue;

/// `HH:MM` in the browser's local time zone.
pub fn clock_label(epoch_ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms));
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}
