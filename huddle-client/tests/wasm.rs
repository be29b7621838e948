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

//! Browser tests for the web-sys backend. Run with
//! `wasm-pack test --headless --chrome -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use huddle_client::web::VideoElementSurface;
use huddle_client::{BindOutcome, RenderSurface, SurfaceBinding};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlVideoElement;

wasm_bindgen_test_configure!(run_in_browser);

fn video_element() -> HtmlVideoElement {
    gloo_utils::document()
        .create_element("video")
        .unwrap()
        .dyn_into::<HtmlVideoElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn new_surface_is_empty() {
    let surface = VideoElementSurface::new(video_element());
    assert_eq!(surface.attached_stream(), None);
}

#[wasm_bindgen_test]
async fn bind_without_stream_clears_element() {
    let binding = SurfaceBinding::new(VideoElementSurface::new(video_element()), "You", true);

    let outcome = binding.bind(None, true).await.unwrap();

    assert_eq!(outcome, BindOutcome::Detached);
    assert!(binding.surface().element().src_object().is_none());
}

#[wasm_bindgen_test]
async fn settle_resolves() {
    let surface = VideoElementSurface::new(video_element());
    surface.settle().await;
}
