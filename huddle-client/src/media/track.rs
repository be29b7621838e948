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

//! Track and stream handles shared by every media platform.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media carried by a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackKind::Audio => "audio",
            TrackKind::Video => "video",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single audio or video feed produced by a capture device.
///
/// Implementations are cheap handles: cloning one yields another reference
/// to the same underlying feed, so enabling or stopping through any clone is
/// visible through all of them.
pub trait MediaTrack: Clone + 'static {
    fn id(&self) -> String;
    fn kind(&self) -> TrackKind;
    fn enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);
    /// Permanently ends the feed. Calling it on an ended track does nothing.
    fn stop(&self);
    fn is_live(&self) -> bool;
}

/// Session-unique identity of a [`LocalStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(pub(crate) u64);

impl StreamId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream-{}", self.0)
    }
}

/// An ordered set of track handles.
///
/// Streams are compared by identity: two streams holding the same tracks but
/// created separately are different streams.
#[derive(Clone, Debug)]
pub struct LocalStream<T> {
    id: StreamId,
    tracks: Vec<T>,
}

impl<T> PartialEq for LocalStream<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: MediaTrack> LocalStream<T> {
    pub(crate) fn new(id: StreamId, tracks: Vec<T>) -> Self {
        Self { id, tracks }
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    pub fn audio_tracks(&self) -> impl Iterator<Item = &T> {
        self.tracks_of(TrackKind::Audio)
    }

    pub fn video_tracks(&self) -> impl Iterator<Item = &T> {
        self.tracks_of(TrackKind::Video)
    }

    pub fn first_track(&self, kind: TrackKind) -> Option<&T> {
        self.tracks_of(kind).next()
    }

    pub fn has_live_tracks(&self) -> bool {
        self.tracks.iter().any(MediaTrack::is_live)
    }

    pub fn stop_all(&self) {
        for track in &self.tracks {
            track.stop();
            log::debug!("Stopped {} track {}", track.kind(), track.id());
        }
    }

    fn tracks_of(&self, kind: TrackKind) -> impl Iterator<Item = &T> {
        self.tracks.iter().filter(move |t| t.kind() == kind)
    }
}
