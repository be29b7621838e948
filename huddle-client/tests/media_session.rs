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

//! Lifecycle tests for `MediaSession` against a scripted platform.

mod support;

use futures::channel::oneshot;
use std::cell::Cell;
use std::rc::Rc;

use huddle_client::{MediaError, MediaSession, MediaTrack, SessionPhase, TrackKind};
use support::{FakePlatform, Outcome};

fn session() -> MediaSession<FakePlatform> {
    MediaSession::new(FakePlatform::new())
}

#[tokio::test]
async fn test_acquire_populates_stream_and_flags() {
    let session = session();
    assert_eq!(session.phase(), SessionPhase::Idle);

    session.acquire().await.unwrap();

    assert!(session.is_initialized());
    let stream = session.current_stream().expect("stream after acquire");
    assert_eq!(stream.audio_tracks().count(), 1);
    assert_eq!(stream.video_tracks().count(), 1);
    assert_eq!(session.camera_stream(), Some(stream));
    assert!(!session.is_muted());
    assert!(session.is_video_enabled());
    assert!(!session.is_screen_sharing());
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn test_acquire_is_idempotent() {
    let session = session();
    session.acquire().await.unwrap();
    let first = session.current_stream();

    session.acquire().await.unwrap();

    assert_eq!(session.platform().user_requests.get(), 1);
    assert_eq!(session.current_stream(), first);
    assert_eq!(session.platform().live_tracks().len(), 2);
}

#[tokio::test]
async fn test_concurrent_acquire_issues_one_request() {
    let session = session();
    let (tx, rx) = oneshot::channel();
    session.platform().push_user_outcome(Outcome::Gate(rx));

    let (first, second, _) = futures::join!(session.acquire(), session.acquire(), async {
        tx.send(()).unwrap();
    });

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(session.platform().user_requests.get(), 1);
    assert_eq!(session.platform().live_tracks().len(), 2);
}

#[tokio::test]
async fn test_toggle_mute_twice_restores_audio() {
    let session = session();
    session.acquire().await.unwrap();
    let audio = session
        .current_stream()
        .and_then(|s| s.first_track(TrackKind::Audio).cloned())
        .unwrap();

    session.toggle_mute().unwrap();
    assert!(session.is_muted());
    assert!(!audio.enabled());

    session.toggle_mute().unwrap();
    assert!(!session.is_muted());
    assert!(audio.enabled());
}

#[tokio::test]
async fn test_toggle_video_flips_track_and_flag() {
    let session = session();
    session.acquire().await.unwrap();
    let video = session
        .current_stream()
        .and_then(|s| s.first_track(TrackKind::Video).cloned())
        .unwrap();

    session.toggle_video().unwrap();
    assert!(!session.is_video_enabled());
    assert!(!video.enabled());
    // Disabling is not stopping.
    assert!(video.is_live());

    session.toggle_video().unwrap();
    assert!(session.is_video_enabled());
    assert!(video.enabled());
}

#[tokio::test]
async fn test_toggle_before_acquire_reports_error() {
    let session = session();

    assert_eq!(session.toggle_mute(), Err(MediaError::NotInitialized));
    assert_eq!(
        session.error().as_deref(),
        Some("Failed to toggle microphone")
    );

    assert_eq!(session.toggle_video(), Err(MediaError::NotInitialized));
    assert_eq!(session.error().as_deref(), Some("Failed to toggle camera"));
}

#[tokio::test]
async fn test_release_stops_every_track() {
    let session = session();
    session.acquire().await.unwrap();
    session.toggle_video().unwrap();
    session.toggle_video().unwrap();

    session.release();

    assert!(session.platform().live_tracks().is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.current_stream(), None);
    assert_eq!(session.camera_stream(), None);
}

#[tokio::test]
async fn test_release_is_repeatable_and_session_reusable() {
    let session = session();
    session.acquire().await.unwrap();

    session.release();
    session.release();
    assert!(session.platform().live_tracks().is_empty());

    session.acquire().await.unwrap();
    assert!(session.is_initialized());
    assert_eq!(session.platform().live_tracks().len(), 2);
    assert_eq!(session.platform().user_requests.get(), 2);
}

#[tokio::test]
async fn test_release_during_acquire_leaves_nothing_live() {
    let session = session();
    let (tx, rx) = oneshot::channel();
    session.platform().push_user_outcome(Outcome::Gate(rx));

    let (result, _) = futures::join!(session.acquire(), async {
        session.release();
        tx.send(()).unwrap();
    });

    assert_eq!(result, Err(MediaError::Stale));
    assert_eq!(session.platform().created_tracks().len(), 2);
    assert!(session.platform().live_tracks().is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.current_stream(), None);
}

#[tokio::test]
async fn test_denied_then_retry_clears_error() {
    let session = session();
    session
        .platform()
        .push_user_outcome(Outcome::Fail(MediaError::from_dom_exception(
            "NotAllowedError",
            "Permission denied",
        )));

    let result = session.acquire().await;
    assert!(matches!(result, Err(MediaError::PermissionDenied(_))));
    assert_eq!(session.phase(), SessionPhase::Idle);
    let message = session.error().expect("error message");
    assert!(message.starts_with("Failed to access camera/microphone:"));
    assert!(message.ends_with("Please check permissions and try again."));

    session.acquire().await.unwrap();
    assert!(session.is_initialized());
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn test_screen_share_swaps_video_and_keeps_audio() {
    let session = session();
    session.acquire().await.unwrap();
    let camera = session.camera_stream().unwrap();
    let mic = camera.first_track(TrackKind::Audio).cloned().unwrap();

    session.toggle_screen_share().await.unwrap();

    assert!(session.is_screen_sharing());
    let current = session.current_stream().unwrap();
    let screen = session.screen_stream().unwrap();
    assert_ne!(current.id(), camera.id());
    assert_eq!(
        current.first_track(TrackKind::Video),
        screen.first_track(TrackKind::Video)
    );
    assert_eq!(current.audio_tracks().cloned().collect::<Vec<_>>(), vec![mic]);
    // The camera stays captured while sharing.
    assert!(camera.has_live_tracks());
}

#[tokio::test]
async fn test_stop_screen_share_restores_camera_stream() {
    let session = session();
    session.acquire().await.unwrap();
    let camera = session.camera_stream().unwrap();
    session.start_screen_share().await.unwrap();
    let screen = session.screen_stream().unwrap();

    session.toggle_screen_share().await.unwrap();

    assert!(!session.is_screen_sharing());
    assert_eq!(session.current_stream(), Some(camera.clone()));
    assert!(!screen.has_live_tracks());
    assert_eq!(
        camera.audio_tracks().cloned().collect::<Vec<_>>(),
        session
            .current_stream()
            .unwrap()
            .audio_tracks()
            .cloned()
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_mute_while_sharing_mutes_microphone() {
    let session = session();
    session.acquire().await.unwrap();
    session.start_screen_share().await.unwrap();

    session.toggle_mute().unwrap();
    session.stop_screen_share();

    assert!(session.is_muted());
    let mic = session
        .current_stream()
        .and_then(|s| s.first_track(TrackKind::Audio).cloned())
        .unwrap();
    assert!(!mic.enabled());
}

#[tokio::test]
async fn test_browser_ending_share_restores_camera() {
    let session = session();
    session.acquire().await.unwrap();
    let camera = session.camera_stream().unwrap();
    session.start_screen_share().await.unwrap();
    let screen_video = session
        .screen_stream()
        .and_then(|s| s.first_track(TrackKind::Video).cloned())
        .unwrap();

    session.platform().end_track(&screen_video);

    assert!(!session.is_screen_sharing());
    assert_eq!(session.current_stream(), Some(camera));
    assert_eq!(session.platform().live_tracks().len(), 2);
}

#[tokio::test]
async fn test_cancelled_share_is_silent() {
    let session = session();
    session.acquire().await.unwrap();
    let camera = session.camera_stream();
    session
        .platform()
        .push_display_outcome(Outcome::Fail(MediaError::Cancelled));

    let result = session.start_screen_share().await;

    assert_eq!(result, Err(MediaError::Cancelled));
    assert_eq!(session.error(), None);
    assert!(!session.is_screen_sharing());
    assert_eq!(session.current_stream(), camera);

    // The picker can be reopened.
    session.start_screen_share().await.unwrap();
    assert!(session.is_screen_sharing());
}

#[tokio::test]
async fn test_denied_share_reports_error() {
    let session = session();
    session.acquire().await.unwrap();
    session
        .platform()
        .push_display_outcome(Outcome::Fail(MediaError::PermissionDenied(
            "denied".to_string(),
        )));

    let result = session.start_screen_share().await;

    assert!(matches!(result, Err(MediaError::PermissionDenied(_))));
    assert!(session.error().is_some());
    assert!(!session.is_screen_sharing());
}

#[tokio::test]
async fn test_release_during_screen_share_request() {
    let session = session();
    session.acquire().await.unwrap();
    let (tx, rx) = oneshot::channel();
    session.platform().push_display_outcome(Outcome::Gate(rx));

    let (result, _) = futures::join!(session.start_screen_share(), async {
        session.release();
        tx.send(()).unwrap();
    });

    assert_eq!(result, Err(MediaError::Stale));
    assert!(session.platform().live_tracks().is_empty());
    assert!(!session.is_screen_sharing());
}

#[tokio::test]
async fn test_release_while_sharing_stops_screen_and_camera() {
    let session = session();
    session.acquire().await.unwrap();
    session.start_screen_share().await.unwrap();
    assert_eq!(session.platform().live_tracks().len(), 4);

    session.release();

    assert!(session.platform().live_tracks().is_empty());
    assert!(!session.is_screen_sharing());
}

#[tokio::test]
async fn test_change_listener_sees_updates() {
    let session = session();
    let calls = Rc::new(Cell::new(0));
    let last_muted = Rc::new(Cell::new(false));
    {
        let calls = calls.clone();
        let last_muted = last_muted.clone();
        session.set_on_change(move |snapshot| {
            calls.set(calls.get() + 1);
            last_muted.set(snapshot.muted);
        });
    }

    session.acquire().await.unwrap();
    session.toggle_mute().unwrap();

    assert_eq!(calls.get(), 2);
    assert!(last_muted.get());
}

#[tokio::test]
async fn test_listener_may_reenter_session() {
    let session = session();
    let seen_phase = Rc::new(Cell::new(SessionPhase::Idle));
    {
        let handle = session.clone();
        let seen_phase = seen_phase.clone();
        session.set_on_change(move |_| seen_phase.set(handle.phase()));
    }

    session.acquire().await.unwrap();

    assert_eq!(seen_phase.get(), SessionPhase::Ready);
}

#[tokio::test]
async fn test_screen_share_requires_camera_stream() {
    let session = session();

    let result = session.start_screen_share().await;

    assert_eq!(result, Err(MediaError::NotInitialized));
    assert_eq!(session.platform().display_requests.get(), 0);
    assert!(session.error().is_some());
    assert!(!session.is_screen_sharing());
}

#[tokio::test]
async fn test_audio_only_stream_reports_missing_video_track() {
    let session = session();
    session
        .platform()
        .push_user_outcome(Outcome::Only(vec![TrackKind::Audio]));
    session.acquire().await.unwrap();
    assert!(!session.is_video_enabled());

    assert_eq!(
        session.toggle_video(),
        Err(MediaError::MissingTrack(TrackKind::Video))
    );
    assert_eq!(session.error().as_deref(), Some("Failed to toggle camera"));
    assert!(session.toggle_mute().is_ok());
}

#[tokio::test]
async fn test_display_capture_without_video_is_rejected() {
    let session = session();
    session.acquire().await.unwrap();
    session
        .platform()
        .push_display_outcome(Outcome::Only(vec![TrackKind::Audio]));

    let result = session.start_screen_share().await;

    assert!(matches!(result, Err(MediaError::Device(_))));
    assert!(!session.is_screen_sharing());
    assert_eq!(session.platform().live_tracks().len(), 2);
}
