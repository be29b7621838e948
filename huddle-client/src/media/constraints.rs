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

//! Capture constraints for camera, microphone and display requests.
//!
//! The JSON shapes produced here are the dictionaries accepted by
//! `getUserMedia` and `getDisplayMedia`.

use serde_json::{json, Value};

pub const IDEAL_CAMERA_WIDTH: u32 = 1280;
pub const IDEAL_CAMERA_HEIGHT: u32 = 720;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacingMode {
    User,
    Environment,
}

impl FacingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoConstraints {
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub facing_mode: FacingMode,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            ideal_width: IDEAL_CAMERA_WIDTH,
            ideal_height: IDEAL_CAMERA_HEIGHT,
            facing_mode: FacingMode::User,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioConstraints {
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub auto_gain_control: bool,
}

impl Default for AudioConstraints {
    fn default() -> Self {
        Self {
            echo_cancellation: true,
            noise_suppression: true,
            auto_gain_control: true,
        }
    }
}

/// Constraints for the combined camera + microphone request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserMediaConstraints {
    pub video: VideoConstraints,
    pub audio: AudioConstraints,
}

impl UserMediaConstraints {
    pub fn video_json(&self) -> Value {
        json!({
            "width": { "ideal": self.video.ideal_width },
            "height": { "ideal": self.video.ideal_height },
            "facingMode": self.video.facing_mode.as_str(),
        })
    }

    pub fn audio_json(&self) -> Value {
        json!({
            "echoCancellation": self.audio.echo_cancellation,
            "noiseSuppression": self.audio.noise_suppression,
            "autoGainControl": self.audio.auto_gain_control,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorCapture {
    Always,
    Motion,
    Never,
}

impl CursorCapture {
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorCapture::Always => "always",
            CursorCapture::Motion => "motion",
            CursorCapture::Never => "never",
        }
    }
}

/// Constraints for the display-capture request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayMediaConstraints {
    pub cursor: CursorCapture,
    pub audio: bool,
}

impl Default for DisplayMediaConstraints {
    fn default() -> Self {
        Self {
            cursor: CursorCapture::Always,
            audio: true,
        }
    }
}

impl DisplayMediaConstraints {
    pub fn video_json(&self) -> Value {
        json!({ "cursor": self.cursor.as_str() })
    }

    pub fn audio_json(&self) -> Value {
        Value::Bool(self.audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_request_hd_user_facing() {
        let constraints = UserMediaConstraints::default();
        let video = constraints.video_json();
        assert_eq!(video["width"]["ideal"], 1280);
        assert_eq!(video["height"]["ideal"], 720);
        assert_eq!(video["facingMode"], "user");
    }

    #[test]
    fn microphone_defaults_enable_processing() {
        let audio = UserMediaConstraints::default().audio_json();
        assert_eq!(audio["echoCancellation"], true);
        assert_eq!(audio["noiseSuppression"], true);
        assert_eq!(audio["autoGainControl"], true);
    }

    #[test]
    fn display_capture_always_shows_cursor() {
        let constraints = DisplayMediaConstraints::default();
        assert_eq!(constraints.video_json()["cursor"], "always");
        assert_eq!(constraints.audio_json(), Value::Bool(true));
    }
}
