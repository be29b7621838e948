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

use gloo_utils::window;
use log::{debug, error};
use std::cell::Cell;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use super::js_error_parts;
use super::platform::{browser_stream, WebTrack};
use crate::binding::{PlaybackError, RenderSurface};
use crate::media::{LocalStream, StreamId};

/// Delay between clearing `srcObject` and assigning the next stream.
const SETTLE_MS: i32 = 10;

/// A `<video>` element used as a [`RenderSurface`].
pub struct VideoElementSurface {
    element: HtmlVideoElement,
    attached: Cell<Option<StreamId>>,
}

impl VideoElementSurface {
    pub fn new(element: HtmlVideoElement) -> Self {
        Self {
            element,
            attached: Cell::new(None),
        }
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl RenderSurface for VideoElementSurface {
    type Track = WebTrack;

    fn attached_stream(&self) -> Option<StreamId> {
        self.attached.get()
    }

    fn attach(&self, stream: &LocalStream<WebTrack>, muted: bool) {
        match browser_stream(stream.tracks()) {
            Ok(media_stream) => {
                self.element.set_muted(muted);
                self.element.set_src_object(Some(&media_stream));
                self.attached.set(Some(stream.id()));
            }
            Err(e) => error!("Failed to build media stream for {}: {e:?}", stream.id()),
        }
    }

    fn detach(&self) {
        self.element.set_src_object(None);
        self.attached.set(None);
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            debug!("Ignoring pause error: {e:?}");
        }
    }

    async fn settle(&self) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Err(e) = window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, SETTLE_MS)
            {
                error!("setTimeout failed: {e:?}");
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    async fn play(&self) -> Result<(), PlaybackError> {
        let promise = self.element.play().map_err(|e| {
            let (name, message) = js_error_parts(&e);
            PlaybackError::from_dom_exception(&name, &message)
        })?;
        JsFuture::from(promise).await.map(|_| ()).map_err(|e| {
            let (name, message) = js_error_parts(&e);
            PlaybackError::from_dom_exception(&name, &message)
        })
    }
}
