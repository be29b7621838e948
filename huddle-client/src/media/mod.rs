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

mod constraints;
mod error;
mod session;
mod track;

pub use constraints::{
    AudioConstraints, CursorCapture, DisplayMediaConstraints, FacingMode, UserMediaConstraints,
    VideoConstraints, IDEAL_CAMERA_HEIGHT, IDEAL_CAMERA_WIDTH,
};
pub use error::{MediaError, Operation};
pub use session::{MediaSession, SessionPhase, SessionSnapshot};
pub use track::{LocalStream, MediaTrack, StreamId, TrackKind};

/// Capture primitives the session is built on.
///
/// The browser implementation lives in [`crate::web`]; tests provide their
/// own. Futures are polled on a single-threaded executor and need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait MediaPlatform: 'static {
    type Track: MediaTrack;

    /// Prompts for camera and microphone access.
    async fn request_user_media(
        &self,
        constraints: &UserMediaConstraints,
    ) -> Result<Vec<Self::Track>, MediaError>;

    /// Prompts the user to pick a display or window to capture.
    async fn request_display_media(
        &self,
        constraints: &DisplayMediaConstraints,
    ) -> Result<Vec<Self::Track>, MediaError>;

    /// Registers `on_ended` to run once when `track` is ended by the
    /// platform, e.g. through the browser's "stop sharing" control.
    fn watch_ended(&self, track: &Self::Track, on_ended: Box<dyn FnOnce()>);
}
