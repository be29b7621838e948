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

//! Browser implementations of [`MediaPlatform`](crate::MediaPlatform) and
//! [`RenderSurface`](crate::RenderSurface) on top of `web-sys`.

mod platform;
mod surface;

pub use platform::{WebMediaPlatform, WebTrack};
pub use surface::VideoElementSurface;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Extracts `(name, message)` from a rejected browser promise value.
pub(crate) fn js_error_parts(error: &JsValue) -> (String, String) {
    if let Some(dom) = error.dyn_ref::<DomException>() {
        return (dom.name(), dom.message());
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return (String::from(err.name()), String::from(err.message()));
    }
    (
        "Error".to_string(),
        error.as_string().unwrap_or_else(|| format!("{error:?}")),
    )
}
