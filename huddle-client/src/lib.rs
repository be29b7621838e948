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

//! Client-side state for the huddle call view: the local media session,
//! binding streams to video elements, and the participants, chat and
//! analytics of a call.
//!
//! The crate makes no assumptions about the UI framework. Capture and
//! rendering go through the [`MediaPlatform`] and [`RenderSurface`] traits;
//! the browser implementations live in the [`web`] module behind the `wasm`
//! feature.
//!
//! # Outline of usage
//!
//! ## Call lifecycle:
//! ```ignore
//! let room = Rc::new(CallRoom::new(
//!     WebMediaPlatform,
//!     LocalIdentity::new("room_1", "current-user", "You"),
//! ));
//! room.set_on_change(move || rerender());
//!
//! room.join().await?;
//! room.toggle_mute()?;
//! room.toggle_screen_share().await?;
//! room.end();
//! ```
//!
//! ## Rendering:
//! ```ignore
//! let binding = SurfaceBinding::new(VideoElementSurface::new(video), "You", true);
//! binding.bind(room.session().current_stream().as_ref(), true).await?;
//! binding.unbind();
//! ```
//!
//! ## Events:
//! ```ignore
//! let mut rx = subscribe_session_events();
//! while let Ok(event) = rx.recv().await { /* ... */ }
//! ```

pub mod analytics;
pub mod binding;
pub mod call;
pub mod chat;
pub mod event_bus;
pub mod events;
pub mod media;
pub mod participants;
pub mod remote;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod web;

pub use analytics::CallAnalytics;
pub use binding::{BindOutcome, PlaybackError, RenderSurface, SurfaceBinding};
pub use call::{CallRoom, LocalIdentity};
pub use chat::{ChatLog, ChatMessage, ASSISTANT_NAME};
pub use event_bus::{emit_session_event, global_session_sender, subscribe_session_events};
pub use events::{ScreenShareEvent, SessionEvent};
pub use media::{
    LocalStream, MediaError, MediaPlatform, MediaSession, MediaTrack, SessionPhase,
    SessionSnapshot, StreamId, TrackKind,
};
pub use participants::{Participant, Roster};
pub use remote::{RemoteParticipantSource, RemoteProfile, SimulatedParticipants};
