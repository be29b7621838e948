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

//! Error types for the local media session.

use thiserror::Error;

use super::track::TrackKind;

/// Errors returned by [`MediaSession`](crate::MediaSession) operations and
/// by [`MediaPlatform`](crate::MediaPlatform) implementations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    /// The user or the browser refused access to the device.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The capability does not exist in this environment.
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// The user dismissed the capture prompt.
    #[error("Cancelled by user")]
    Cancelled,

    /// The device could not be opened or produced no usable tracks.
    #[error("Device error: {0}")]
    Device(String),

    /// The session was released or superseded while the request was pending.
    #[error("Operation superseded by teardown")]
    Stale,

    /// No camera/microphone stream has been acquired yet.
    #[error("Media is not initialized")]
    NotInitialized,

    /// The current stream has no track of the requested kind.
    #[error("No {0} track in the current stream")]
    MissingTrack(TrackKind),
}

/// The session operation an error came from. Selects the user-facing text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Acquire,
    ScreenShare,
    ToggleAudio,
    ToggleVideo,
}

impl MediaError {
    /// Classifies a browser `DOMException` (or `Error`) by its `name`.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" | "PermissionDeniedError" | "SecurityError" => {
                MediaError::PermissionDenied(message.to_string())
            }
            "NotSupportedError" | "TypeError" => MediaError::Unsupported(message.to_string()),
            "AbortError" => MediaError::Cancelled,
            _ if message.is_empty() => MediaError::Device(name.to_string()),
            _ => MediaError::Device(message.to_string()),
        }
    }

    /// Errors that are never shown to the user.
    pub fn is_silent(&self, operation: Operation) -> bool {
        match self {
            MediaError::Stale => true,
            MediaError::Cancelled => operation == Operation::ScreenShare,
            _ => false,
        }
    }

    /// Human-readable message for the call view, or `None` when the error
    /// must be swallowed.
    pub fn user_message(&self, operation: Operation) -> Option<String> {
        if self.is_silent(operation) {
            return None;
        }
        let message = match operation {
            Operation::Acquire => format!(
                "Failed to access camera/microphone: {}. Please check permissions and try again.",
                self.detail()
            ),
            Operation::ScreenShare => match self {
                MediaError::PermissionDenied(_) => {
                    "Screen sharing permission denied. Please allow screen sharing and try again."
                        .to_string()
                }
                MediaError::Unsupported(_) => {
                    "Screen sharing is not supported in this browser.".to_string()
                }
                other => format!("Screen sharing failed: {}", other.detail()),
            },
            Operation::ToggleAudio => "Failed to toggle microphone".to_string(),
            Operation::ToggleVideo => "Failed to toggle camera".to_string(),
        };
        Some(message)
    }

    fn detail(&self) -> String {
        match self {
            MediaError::PermissionDenied(m) | MediaError::Unsupported(m) | MediaError::Device(m)
                if !m.is_empty() =>
            {
                m.clone()
            }
            MediaError::PermissionDenied(_) => "Permission denied".to_string(),
            MediaError::Unsupported(_) => "Not supported".to_string(),
            MediaError::Device(_) => "Unknown error".to_string(),
            other => other.to_string(),
        }
    }
}
