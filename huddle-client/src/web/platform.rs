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
use js_sys::Array;
use log::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DisplayMediaStreamConstraints, MediaDevices, MediaStream, MediaStreamConstraints,
    MediaStreamTrack, MediaStreamTrackState,
};

use super::js_error_parts;
use crate::media::{
    DisplayMediaConstraints, MediaError, MediaPlatform, MediaTrack, TrackKind,
    UserMediaConstraints,
};

/// A browser `MediaStreamTrack`.
#[derive(Clone, Debug, PartialEq)]
pub struct WebTrack(MediaStreamTrack);

impl WebTrack {
    pub fn new(track: MediaStreamTrack) -> Self {
        Self(track)
    }

    pub fn inner(&self) -> &MediaStreamTrack {
        &self.0
    }
}

impl MediaTrack for WebTrack {
    fn id(&self) -> String {
        self.0.id()
    }

    fn kind(&self) -> TrackKind {
        if self.0.kind() == "audio" {
            TrackKind::Audio
        } else {
            TrackKind::Video
        }
    }

    fn enabled(&self) -> bool {
        self.0.enabled()
    }

    fn set_enabled(&self, enabled: bool) {
        self.0.set_enabled(enabled);
    }

    fn stop(&self) {
        self.0.stop();
    }

    fn is_live(&self) -> bool {
        self.0.ready_state() == MediaStreamTrackState::Live
    }
}

/// Capture through `navigator.mediaDevices`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMediaPlatform;

impl WebMediaPlatform {
    fn media_devices() -> Result<MediaDevices, MediaError> {
        window().navigator().media_devices().map_err(|_| {
            MediaError::Unsupported("navigator.mediaDevices is not available".to_string())
        })
    }
}

fn to_media_error(error: JsValue) -> MediaError {
    let (name, message) = js_error_parts(&error);
    MediaError::from_dom_exception(&name, &message)
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, MediaError> {
    js_sys::JSON::parse(&value.to_string()).map_err(to_media_error)
}

fn tracks_of(stream: &MediaStream) -> Vec<WebTrack> {
    stream
        .get_tracks()
        .iter()
        .map(|t| WebTrack(t.unchecked_into::<MediaStreamTrack>()))
        .collect()
}

async fn await_stream(promise: js_sys::Promise) -> Result<Vec<WebTrack>, MediaError> {
    let stream = JsFuture::from(promise)
        .await
        .map_err(to_media_error)?
        .unchecked_into::<MediaStream>();
    Ok(tracks_of(&stream))
}

impl MediaPlatform for WebMediaPlatform {
    type Track = WebTrack;

    async fn request_user_media(
        &self,
        constraints: &UserMediaConstraints,
    ) -> Result<Vec<WebTrack>, MediaError> {
        let media_devices = Self::media_devices()?;
        let request = MediaStreamConstraints::new();
        request.set_video(&to_js(&constraints.video_json())?);
        request.set_audio(&to_js(&constraints.audio_json())?);
        let promise = media_devices
            .get_user_media_with_constraints(&request)
            .map_err(to_media_error)?;
        await_stream(promise).await
    }

    async fn request_display_media(
        &self,
        constraints: &DisplayMediaConstraints,
    ) -> Result<Vec<WebTrack>, MediaError> {
        let media_devices = Self::media_devices()?;
        let request = DisplayMediaStreamConstraints::new();
        request.set_video(&to_js(&constraints.video_json())?);
        request.set_audio(&to_js(&constraints.audio_json())?);
        let promise = media_devices
            .get_display_media_with_constraints(&request)
            .map_err(to_media_error)?;
        await_stream(promise).await
    }

    fn watch_ended(&self, track: &WebTrack, on_ended: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || on_ended());
        match callback.dyn_ref::<js_sys::Function>() {
            Some(function) => track.0.set_onended(Some(function)),
            None => error!("Failed to register ended handler for track {}", track.id()),
        }
    }
}

/// Builds a browser `MediaStream` holding `tracks`, for assigning to
/// `srcObject`.
pub(crate) fn browser_stream(tracks: &[WebTrack]) -> Result<MediaStream, JsValue> {
    let array = Array::new();
    for track in tracks {
        array.push(track.inner());
    }
    MediaStream::new_with_tracks(&array)
}
