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

//! Shared test doubles for huddle-client integration tests.
//!
//! `FakePlatform` hands out scripted capture results and records every track
//! it ever created so tests can count what is still live. `FakeSurface`
//! records attach/detach calls and plays back scripted `play()` results.
//!
//! Each test file that does `mod support;` compiles its own copy, so not every
//! function is used in every compilation unit.
#![allow(dead_code)]

use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use huddle_client::media::{DisplayMediaConstraints, UserMediaConstraints};
use huddle_client::{
    LocalStream, MediaError, MediaPlatform, MediaTrack, PlaybackError, RenderSurface, StreamId,
    TrackKind,
};

// ---------------------------------------------------------------------------
// Tracks
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct TrackState {
    id: String,
    kind: TrackKind,
    enabled: Cell<bool>,
    live: Cell<bool>,
}

#[derive(Clone, Debug)]
pub struct FakeTrack(Rc<TrackState>);

impl PartialEq for FakeTrack {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeTrack {
    pub fn new(id: &str, kind: TrackKind) -> Self {
        Self(Rc::new(TrackState {
            id: id.to_string(),
            kind,
            enabled: Cell::new(true),
            live: Cell::new(true),
        }))
    }
}

impl MediaTrack for FakeTrack {
    fn id(&self) -> String {
        self.0.id.clone()
    }

    fn kind(&self) -> TrackKind {
        self.0.kind
    }

    fn enabled(&self) -> bool {
        self.0.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        self.0.enabled.set(enabled);
    }

    fn stop(&self) {
        self.0.live.set(false);
    }

    fn is_live(&self) -> bool {
        self.0.live.get()
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// What the next capture request does.
pub enum Outcome {
    Grant,
    Fail(MediaError),
    /// Grant with exactly these track kinds.
    Only(Vec<TrackKind>),
    /// Grant once the sender fires; fail with `Device` if it is dropped.
    Gate(oneshot::Receiver<()>),
}

#[derive(Default)]
pub struct FakePlatform {
    user_outcomes: RefCell<VecDeque<Outcome>>,
    display_outcomes: RefCell<VecDeque<Outcome>>,
    created: RefCell<Vec<FakeTrack>>,
    ended_watchers: RefCell<Vec<(String, Box<dyn FnOnce()>)>>,
    next_track: Cell<u32>,
    pub user_requests: Cell<usize>,
    pub display_requests: Cell<usize>,
    pub last_user_constraints: RefCell<Option<UserMediaConstraints>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user_outcome(&self, outcome: Outcome) {
        self.user_outcomes.borrow_mut().push_back(outcome);
    }

    pub fn push_display_outcome(&self, outcome: Outcome) {
        self.display_outcomes.borrow_mut().push_back(outcome);
    }

    /// Every track ever produced that has not been stopped.
    pub fn live_tracks(&self) -> Vec<FakeTrack> {
        self.created
            .borrow()
            .iter()
            .filter(|t| t.is_live())
            .cloned()
            .collect()
    }

    pub fn created_tracks(&self) -> Vec<FakeTrack> {
        self.created.borrow().clone()
    }

    /// Simulates the browser's "stop sharing" control on `track`.
    pub fn end_track(&self, track: &FakeTrack) {
        track.stop();
        let id = track.id();
        let watcher = {
            let mut watchers = self.ended_watchers.borrow_mut();
            let index = watchers.iter().position(|(w, _)| *w == id);
            index.map(|i| watchers.remove(i).1)
        };
        if let Some(on_ended) = watcher {
            on_ended();
        }
    }

    fn make_track(&self, prefix: &str, kind: TrackKind) -> FakeTrack {
        let n = self.next_track.get() + 1;
        self.next_track.set(n);
        let track = FakeTrack::new(&format!("{prefix}-{kind}-{n}"), kind);
        self.created.borrow_mut().push(track.clone());
        track
    }

    async fn resolve(
        &self,
        outcome: Option<Outcome>,
        prefix: &str,
        kinds: &[TrackKind],
    ) -> Result<Vec<FakeTrack>, MediaError> {
        match outcome.unwrap_or(Outcome::Grant) {
            Outcome::Grant => {}
            Outcome::Fail(e) => return Err(e),
            Outcome::Only(only) => {
                return Ok(only.iter().map(|k| self.make_track(prefix, *k)).collect());
            }
            Outcome::Gate(rx) => {
                if rx.await.is_err() {
                    return Err(MediaError::Device("gate dropped".to_string()));
                }
            }
        }
        Ok(kinds.iter().map(|k| self.make_track(prefix, *k)).collect())
    }
}

impl MediaPlatform for FakePlatform {
    type Track = FakeTrack;

    async fn request_user_media(
        &self,
        constraints: &UserMediaConstraints,
    ) -> Result<Vec<FakeTrack>, MediaError> {
        self.user_requests.set(self.user_requests.get() + 1);
        *self.last_user_constraints.borrow_mut() = Some(constraints.clone());
        let outcome = self.user_outcomes.borrow_mut().pop_front();
        self.resolve(outcome, "camera", &[TrackKind::Audio, TrackKind::Video])
            .await
    }

    async fn request_display_media(
        &self,
        _constraints: &DisplayMediaConstraints,
    ) -> Result<Vec<FakeTrack>, MediaError> {
        self.display_requests.set(self.display_requests.get() + 1);
        let outcome = self.display_outcomes.borrow_mut().pop_front();
        self.resolve(outcome, "screen", &[TrackKind::Video, TrackKind::Audio])
            .await
    }

    fn watch_ended(&self, track: &FakeTrack, on_ended: Box<dyn FnOnce()>) {
        self.ended_watchers
            .borrow_mut()
            .push((track.id(), on_ended));
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeSurface {
    attached: Cell<Option<StreamId>>,
    pub muted: Cell<bool>,
    pub attach_count: Cell<usize>,
    pub pause_count: Cell<usize>,
    play_results: RefCell<VecDeque<Result<(), PlaybackError>>>,
    settle_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_play_result(&self, result: Result<(), PlaybackError>) {
        self.play_results.borrow_mut().push_back(result);
    }

    /// Makes the next `settle()` wait for the returned sender.
    pub fn gate_settle(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.settle_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Attaches a stream behind the binding's back.
    pub fn force_attach(&self, id: StreamId) {
        self.attached.set(Some(id));
    }
}

impl RenderSurface for FakeSurface {
    type Track = FakeTrack;

    fn attached_stream(&self) -> Option<StreamId> {
        self.attached.get()
    }

    fn attach(&self, stream: &LocalStream<FakeTrack>, muted: bool) {
        self.attached.set(Some(stream.id()));
        self.muted.set(muted);
        self.attach_count.set(self.attach_count.get() + 1);
    }

    fn detach(&self) {
        self.attached.set(None);
    }

    fn pause(&self) {
        self.pause_count.set(self.pause_count.get() + 1);
    }

    async fn settle(&self) {
        let gate = self.settle_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    async fn play(&self) -> Result<(), PlaybackError> {
        self.play_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}
