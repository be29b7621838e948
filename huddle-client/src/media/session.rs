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

//! [`MediaSession`] owns the local camera, microphone and screen-capture
//! streams for one call view.
//!
//! The session is single-threaded and shared by cloning. Every asynchronous
//! request records the session generation before suspending and compares it
//! again on resumption; [`MediaSession::release`] bumps the generation, so a
//! request that resolves after teardown has its tracks stopped and changes
//! nothing.

use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

use super::constraints::{DisplayMediaConstraints, UserMediaConstraints};
use super::error::{MediaError, Operation};
use super::track::{LocalStream, MediaTrack, StreamId, TrackKind};
use super::MediaPlatform;
use crate::event_bus::emit_session_event;
use crate::events::{ScreenShareEvent, SessionEvent};

/// Where the session is in its camera/microphone lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No stream; [`MediaSession::acquire`] may be called.
    Idle,
    /// A camera/microphone request is awaiting the user or the device.
    Acquiring,
    /// The camera/microphone stream is held.
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShareState {
    Idle,
    Requesting,
    Active,
}

/// Point-in-time copy of the session state for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot<T> {
    pub phase: SessionPhase,
    pub current: Option<LocalStream<T>>,
    pub muted: bool,
    pub video_enabled: bool,
    pub screen_sharing: bool,
    pub error: Option<String>,
}

type ChangeListener<T> = Rc<dyn Fn(&SessionSnapshot<T>)>;

struct SessionInner<T> {
    phase: SessionPhase,
    share: ShareState,
    generation: u64,
    next_stream_id: u64,
    /// The camera + microphone capture, kept while screen sharing.
    camera: Option<LocalStream<T>>,
    /// Every track returned by the display-capture request.
    screen: Option<LocalStream<T>>,
    current: Option<LocalStream<T>>,
    muted: bool,
    video_enabled: bool,
    error: Option<String>,
    on_change: Option<ChangeListener<T>>,
}

impl<T: MediaTrack> SessionInner<T> {
    fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            share: ShareState::Idle,
            generation: 0,
            next_stream_id: 0,
            camera: None,
            screen: None,
            current: None,
            muted: false,
            video_enabled: true,
            error: None,
            on_change: None,
        }
    }

    fn new_stream(&mut self, tracks: Vec<T>) -> LocalStream<T> {
        self.next_stream_id += 1;
        LocalStream::new(StreamId(self.next_stream_id), tracks)
    }

    fn snapshot(&self) -> SessionSnapshot<T> {
        SessionSnapshot {
            phase: self.phase,
            current: self.current.clone(),
            muted: self.muted,
            video_enabled: self.video_enabled,
            screen_sharing: self.share == ShareState::Active,
            error: self.error.clone(),
        }
    }

    /// Re-reads the flags from the tracks of the current stream.
    fn mirror_current(&mut self) {
        if let Some(current) = &self.current {
            self.muted = current
                .first_track(TrackKind::Audio)
                .map(|t| !t.enabled())
                .unwrap_or(false);
            self.video_enabled = current
                .first_track(TrackKind::Video)
                .map(MediaTrack::enabled)
                .unwrap_or(false);
        }
    }
}

/// The local media session for one call view.
///
/// Cloning yields another handle to the same session.
pub struct MediaSession<P: MediaPlatform> {
    platform: Rc<P>,
    inner: Rc<RefCell<SessionInner<P::Track>>>,
}

impl<P: MediaPlatform> Clone for MediaSession<P> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<P: MediaPlatform> MediaSession<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform: Rc::new(platform),
            inner: Rc::new(RefCell::new(SessionInner::new())),
        }
    }

    /// Sets the listener invoked after every state change.
    ///
    /// The listener runs with no internal borrow held and may call back into
    /// the session.
    pub fn set_on_change(&self, listener: impl Fn(&SessionSnapshot<P::Track>) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(listener));
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.borrow().phase
    }

    pub fn is_initialized(&self) -> bool {
        self.phase() == SessionPhase::Ready
    }

    /// The stream that should be rendered and sent: the camera stream, or
    /// the screen + microphone composite while sharing.
    pub fn current_stream(&self) -> Option<LocalStream<P::Track>> {
        self.inner.borrow().current.clone()
    }

    pub fn camera_stream(&self) -> Option<LocalStream<P::Track>> {
        self.inner.borrow().camera.clone()
    }

    pub fn screen_stream(&self) -> Option<LocalStream<P::Track>> {
        self.inner.borrow().screen.clone()
    }

    pub fn is_muted(&self) -> bool {
        self.inner.borrow().muted
    }

    pub fn is_video_enabled(&self) -> bool {
        self.inner.borrow().video_enabled
    }

    pub fn is_screen_sharing(&self) -> bool {
        self.inner.borrow().share == ShareState::Active
    }

    pub fn error(&self) -> Option<String> {
        self.inner.borrow().error.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot<P::Track> {
        self.inner.borrow().snapshot()
    }

    /// Dismisses the current error message.
    pub fn clear_error(&self) {
        let changed = self.inner.borrow_mut().error.take().is_some();
        if changed {
            self.notify();
        }
    }

    /// Requests camera and microphone access.
    ///
    /// Does nothing while a request is in flight or a stream is already
    /// held. On failure the session stays [`SessionPhase::Idle`] with a
    /// user-facing error and may be retried. Returns [`MediaError::Stale`]
    /// when the session was released before the request resolved.
    pub async fn acquire(&self) -> Result<(), MediaError> {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != SessionPhase::Idle {
                debug!("Media acquisition already {:?}, ignoring", inner.phase);
                return Ok(());
            }
            inner.phase = SessionPhase::Acquiring;
            inner.generation
        };

        info!("Requesting camera and microphone access...");
        let result = self
            .platform
            .request_user_media(&UserMediaConstraints::default())
            .await;

        let mut inner = self.inner.borrow_mut();
        if inner.generation != generation {
            drop(inner);
            if let Ok(tracks) = result {
                info!("Session released during acquisition, stopping late tracks");
                for track in tracks {
                    track.stop();
                }
            }
            return Err(MediaError::Stale);
        }

        match result {
            Ok(tracks) => {
                let stream = inner.new_stream(tracks);
                info!(
                    "Media stream obtained: {} ({} tracks)",
                    stream.id(),
                    stream.tracks().len()
                );
                inner.camera = Some(stream.clone());
                inner.current = Some(stream);
                inner.mirror_current();
                inner.phase = SessionPhase::Ready;
                inner.error = None;
                drop(inner);
                emit_session_event(SessionEvent::PermissionGranted);
                self.notify();
                Ok(())
            }
            Err(e) => {
                error!("Error accessing media devices: {e}");
                inner.phase = SessionPhase::Idle;
                inner.error = e.user_message(Operation::Acquire);
                let message = inner.error.clone().unwrap_or_default();
                drop(inner);
                emit_session_event(SessionEvent::PermissionDenied(message));
                self.notify();
                Err(e)
            }
        }
    }

    /// Mutes or unmutes the first audio track of the current stream.
    pub fn set_muted(&self, muted: bool) -> Result<(), MediaError> {
        let result = self.set_track_enabled(TrackKind::Audio, !muted);
        if result.is_ok() {
            emit_session_event(SessionEvent::MuteChanged(muted));
        }
        self.notify();
        result
    }

    /// Enables or disables the first video track of the current stream.
    pub fn set_video_enabled(&self, enabled: bool) -> Result<(), MediaError> {
        let result = self.set_track_enabled(TrackKind::Video, enabled);
        if result.is_ok() {
            emit_session_event(SessionEvent::VideoChanged(enabled));
        }
        self.notify();
        result
    }

    pub fn toggle_mute(&self) -> Result<(), MediaError> {
        self.set_muted(!self.is_muted())
    }

    pub fn toggle_video(&self) -> Result<(), MediaError> {
        self.set_video_enabled(!self.is_video_enabled())
    }

    fn set_track_enabled(&self, kind: TrackKind, enabled: bool) -> Result<(), MediaError> {
        let mut inner = self.inner.borrow_mut();
        let track = match &inner.current {
            Some(stream) => stream
                .first_track(kind)
                .cloned()
                .ok_or(MediaError::MissingTrack(kind)),
            None => Err(MediaError::NotInitialized),
        };
        match track {
            Ok(track) => {
                track.set_enabled(enabled);
                match kind {
                    TrackKind::Audio => inner.muted = !enabled,
                    TrackKind::Video => inner.video_enabled = enabled,
                }
                Ok(())
            }
            Err(e) => {
                let operation = match kind {
                    TrackKind::Audio => Operation::ToggleAudio,
                    TrackKind::Video => Operation::ToggleVideo,
                };
                warn!("Cannot toggle {kind}: {e}");
                inner.error = e.user_message(operation);
                Err(e)
            }
        }
    }

    /// Replaces the current stream with the user's screen plus the original
    /// microphone audio.
    ///
    /// Does nothing while sharing or while a display request is pending, and
    /// fails with [`MediaError::NotInitialized`] before [`acquire`](Self::acquire)
    /// has succeeded.
    /// Cancelling the picker returns [`MediaError::Cancelled`] without
    /// recording an error message.
    pub async fn start_screen_share(&self) -> Result<(), MediaError> {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.share != ShareState::Idle {
                debug!("Screen share already {:?}, ignoring", inner.share);
                return Ok(());
            }
            if inner.phase != SessionPhase::Ready {
                let e = MediaError::NotInitialized;
                warn!("Cannot start screen share: {e}");
                inner.error = e.user_message(Operation::ScreenShare);
                drop(inner);
                self.notify();
                return Err(e);
            }
            inner.share = ShareState::Requesting;
            inner.generation
        };

        let result = self
            .platform
            .request_display_media(&DisplayMediaConstraints::default())
            .await;

        let mut inner = self.inner.borrow_mut();
        if inner.generation != generation {
            drop(inner);
            if let Ok(tracks) = result {
                for track in tracks {
                    track.stop();
                }
            }
            return Err(MediaError::Stale);
        }

        let tracks = match result {
            Ok(tracks) => tracks,
            Err(e) => {
                inner.share = ShareState::Idle;
                let message = e.user_message(Operation::ScreenShare);
                let event = match &message {
                    Some(message) => {
                        error!("Error starting screen share: {e}");
                        inner.error = Some(message.clone());
                        ScreenShareEvent::Failed(message.clone())
                    }
                    None => {
                        info!("Screen sharing was cancelled by user");
                        ScreenShareEvent::Cancelled
                    }
                };
                drop(inner);
                emit_session_event(SessionEvent::ScreenShareStateChange(event));
                self.notify();
                return Err(e);
            }
        };

        let screen = inner.new_stream(tracks);
        let Some(video) = screen.first_track(TrackKind::Video).cloned() else {
            let e = MediaError::Device("display capture produced no video track".to_string());
            inner.share = ShareState::Idle;
            inner.error = e.user_message(Operation::ScreenShare);
            drop(inner);
            screen.stop_all();
            self.notify();
            return Err(e);
        };

        let mut composite = vec![video.clone()];
        if let Some(camera) = &inner.camera {
            composite.extend(camera.audio_tracks().cloned());
        }
        let composite = inner.new_stream(composite);
        let screen_id = screen.id();
        info!("Screen share started: {screen_id}, composite {}", composite.id());

        inner.screen = Some(screen);
        inner.current = Some(composite);
        inner.mirror_current();
        inner.share = ShareState::Active;
        inner.error = None;
        drop(inner);

        let weak = Rc::downgrade(&self.inner);
        let platform = self.platform.clone();
        self.platform.watch_ended(
            &video,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    info!("Screen share ended by user");
                    MediaSession { platform, inner }.stop_screen_share_of(screen_id);
                }
            }),
        );

        emit_session_event(SessionEvent::ScreenShareStateChange(
            ScreenShareEvent::Started,
        ));
        self.notify();
        Ok(())
    }

    /// Stops every screen-capture track and restores the camera stream.
    pub fn stop_screen_share(&self) {
        let screen = {
            let mut inner = self.inner.borrow_mut();
            let Some(screen) = inner.screen.take() else {
                return;
            };
            inner.share = ShareState::Idle;
            inner.current = inner.camera.clone();
            inner.mirror_current();
            inner.error = None;
            screen
        };
        screen.stop_all();
        info!("Screen share stopped, restored camera stream");
        emit_session_event(SessionEvent::ScreenShareStateChange(
            ScreenShareEvent::Stopped,
        ));
        self.notify();
    }

    /// Stops sharing only if `screen_id` is still the active share.
    fn stop_screen_share_of(&self, screen_id: StreamId) {
        let active = self
            .inner
            .borrow()
            .screen
            .as_ref()
            .map(|s| s.id() == screen_id)
            .unwrap_or(false);
        if active {
            self.stop_screen_share();
        }
    }

    pub async fn toggle_screen_share(&self) -> Result<(), MediaError> {
        if self.is_screen_sharing() {
            self.stop_screen_share();
            Ok(())
        } else {
            self.start_screen_share().await
        }
    }

    /// Stops every track the session owns and forgets all streams.
    ///
    /// Any request still in flight is invalidated. Safe to call repeatedly;
    /// the session can be acquired again afterwards.
    pub fn release(&self) {
        let (camera, screen, was_active) = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            let was_active = inner.phase != SessionPhase::Idle
                || inner.share != ShareState::Idle
                || inner.error.is_some();
            inner.phase = SessionPhase::Idle;
            inner.share = ShareState::Idle;
            inner.current = None;
            inner.muted = false;
            inner.video_enabled = true;
            inner.error = None;
            (inner.camera.take(), inner.screen.take(), was_active)
        };
        if let Some(camera) = camera {
            camera.stop_all();
        }
        if let Some(screen) = screen {
            screen.stop_all();
        }
        if was_active {
            info!("Media session released");
            emit_session_event(SessionEvent::Released);
            self.notify();
        }
    }

    fn notify(&self) {
        let (listener, snapshot) = {
            let inner = self.inner.borrow();
            match &inner.on_change {
                Some(listener) => (listener.clone(), inner.snapshot()),
                None => return,
            }
        };
        listener(&snapshot);
    }
}
