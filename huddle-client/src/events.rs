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

//! Framework-agnostic event types for the media session and call room.
//!
//! These events are emitted via the event bus and can be subscribed to by any
//! frontend framework.

/// Screen share lifecycle as observed by the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenShareEvent {
    /// Display capture was granted and is now the current stream.
    Started,
    /// The user dismissed the capture picker.
    Cancelled,
    /// Sharing ended, either from the UI or from the browser's own control.
    Stopped,
    /// Display capture failed with a user-facing message.
    Failed(String),
}

/// Events emitted by the media session and call room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    // === Device Events ===
    /// Camera and microphone were granted and the session is initialized.
    PermissionGranted,

    /// Camera or microphone access failed; carries the user-facing message.
    PermissionDenied(String),

    // === Track Events ===
    /// The microphone was muted (`true`) or unmuted (`false`).
    MuteChanged(bool),

    /// The outgoing video was enabled (`true`) or disabled (`false`).
    VideoChanged(bool),

    /// Screen share state has changed
    ScreenShareStateChange(ScreenShareEvent),

    /// Every track owned by the session was stopped.
    Released,

    // === Room Events ===
    /// A participant joined the room.
    ParticipantJoined(String),

    /// The local user left the room.
    CallEnded,
}
