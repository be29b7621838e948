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

//! Binds a [`LocalStream`] to a rendering surface such as a `<video>`
//! element.
//!
//! Each call to [`SurfaceBinding::bind`] or [`SurfaceBinding::unbind`]
//! supersedes the previous one. An attach whose binding was superseded while
//! it was suspended is discarded.

use log::{debug, warn};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

use crate::media::{LocalStream, MediaTrack, StreamId};

/// Why `play()` on a surface failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// A newer load replaced the stream before playback started.
    #[error("Playback interrupted: {0}")]
    Interrupted(String),

    /// Autoplay policy refused to start playback.
    #[error("Playback not allowed: {0}")]
    NotAllowed(String),

    #[error("Playback failed: {0}")]
    Failed(String),
}

impl PlaybackError {
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "AbortError" => PlaybackError::Interrupted(message.to_string()),
            "NotAllowedError" => PlaybackError::NotAllowed(message.to_string()),
            _ => PlaybackError::Failed(format!("{name}: {message}")),
        }
    }

    /// Interruption and policy refusals are part of normal operation.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            PlaybackError::Interrupted(_) | PlaybackError::NotAllowed(_)
        )
    }
}

/// A surface that can render one stream at a time.
#[allow(async_fn_in_trait)]
pub trait RenderSurface: 'static {
    type Track: MediaTrack;

    /// The stream currently attached, if any.
    fn attached_stream(&self) -> Option<StreamId>;

    /// Attaches `stream`. `muted` silences its audio on this surface.
    fn attach(&self, stream: &LocalStream<Self::Track>, muted: bool);

    fn detach(&self);

    fn pause(&self);

    /// Yields long enough for a detach to take effect.
    async fn settle(&self);

    async fn play(&self) -> Result<(), PlaybackError>;
}

/// Result of a [`SurfaceBinding::bind`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    /// The stream is attached and playing.
    Attached,
    /// Nothing should render; the surface was cleared.
    Detached,
    /// A newer bind or unbind took over; this attach was dropped.
    Stale,
    /// The stream is attached but playback was held back by an expected
    /// condition.
    PlaybackHeld,
}

/// Attaches streams to one surface, discarding superseded attaches.
pub struct SurfaceBinding<S> {
    surface: Rc<S>,
    generation: Rc<Cell<u64>>,
    label: Rc<str>,
    muted: bool,
}

impl<S> Clone for SurfaceBinding<S> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            generation: self.generation.clone(),
            label: self.label.clone(),
            muted: self.muted,
        }
    }
}

impl<S: RenderSurface> SurfaceBinding<S> {
    /// * `label` - name used in log lines
    /// * `muted` - silence audio on this surface; set for the local
    ///   self-preview to avoid feedback
    pub fn new(surface: S, label: &str, muted: bool) -> Self {
        Self {
            surface: Rc::new(surface),
            generation: Rc::new(Cell::new(0)),
            label: Rc::from(label),
            muted,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Renders `stream` while it is present and `video_enabled` holds,
    /// otherwise clears the surface.
    pub async fn bind(
        &self,
        stream: Option<&LocalStream<S::Track>>,
        video_enabled: bool,
    ) -> Result<BindOutcome, PlaybackError> {
        let generation = self.advance();
        let stream = match stream {
            Some(stream) if video_enabled => stream.clone(),
            _ => {
                self.clear();
                return Ok(BindOutcome::Detached);
            }
        };

        debug!("Setting video stream for {}: {}", self.label, stream.id());
        self.clear();
        self.surface.settle().await;

        if !self.is_current(generation) || self.surface.attached_stream().is_some() {
            debug!("Discarding stale attach of {} for {}", stream.id(), self.label);
            return Ok(BindOutcome::Stale);
        }
        self.surface.attach(&stream, self.muted);

        match self.surface.play().await {
            Ok(()) if self.is_current(generation) => Ok(BindOutcome::Attached),
            Ok(()) => Ok(BindOutcome::Stale),
            Err(e) if !self.is_current(generation) => {
                debug!("Ignoring play failure of superseded bind for {}: {e}", self.label);
                Ok(BindOutcome::Stale)
            }
            Err(e) if e.is_expected() => {
                debug!("Video play held for {}: {e}", self.label);
                Ok(BindOutcome::PlaybackHeld)
            }
            Err(e) => {
                warn!("Video play failed for {}: {e}", self.label);
                Err(e)
            }
        }
    }

    /// Supersedes any in-flight bind and clears the surface.
    pub fn unbind(&self) {
        self.advance();
        self.clear();
    }

    fn advance(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn clear(&self) {
        self.surface.pause();
        self.surface.detach();
    }
}
