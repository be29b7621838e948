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

//! Tests for the global session event bus.
//!
//! The bus is process-wide and tests in this file run concurrently, so each
//! test waits for the specific event it expects instead of the next one.

mod support;

use std::time::Duration;

use huddle_client::{
    emit_session_event, subscribe_session_events, MediaError, MediaSession, ScreenShareEvent,
    SessionEvent,
};
use support::{FakePlatform, Outcome};

async fn expect_event(
    rx: &mut async_broadcast::Receiver<SessionEvent>,
    wanted: impl Fn(&SessionEvent) -> bool,
) -> SessionEvent {
    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            match rx.recv().await {
                Ok(event) if wanted(&event) => return event,
                Ok(_) => continue,
                Err(async_broadcast::RecvError::Overflowed(_)) => continue,
                Err(e) => panic!("event bus closed: {e}"),
            }
        }
    })
    .await
    .expect("timed out waiting for event")
}

#[tokio::test]
async fn test_subscriber_receives_emitted_event() {
    let mut rx = subscribe_session_events();

    emit_session_event(SessionEvent::ParticipantJoined("bus-test-user".to_string()));

    let event = expect_event(&mut rx, |e| {
        matches!(e, SessionEvent::ParticipantJoined(id) if id == "bus-test-user")
    })
    .await;
    assert_eq!(
        event,
        SessionEvent::ParticipantJoined("bus-test-user".to_string())
    );
}

#[test]
fn test_emit_without_subscribers_does_not_block() {
    for _ in 0..(huddle_client::event_bus::EVENT_BUS_CAPACITY * 2) {
        emit_session_event(SessionEvent::CallEnded);
    }
}

#[tokio::test]
async fn test_denied_acquire_emits_permission_denied() {
    let mut rx = subscribe_session_events();
    let session = MediaSession::new(FakePlatform::new());
    session
        .platform()
        .push_user_outcome(Outcome::Fail(MediaError::PermissionDenied(
            "bus-denied".to_string(),
        )));

    let _ = session.acquire().await;

    let event = expect_event(&mut rx, |e| {
        matches!(e, SessionEvent::PermissionDenied(m) if m.contains("bus-denied"))
    })
    .await;
    assert!(matches!(event, SessionEvent::PermissionDenied(_)));
}

#[tokio::test]
async fn test_screen_share_lifecycle_events() {
    let mut rx = subscribe_session_events();
    let session = MediaSession::new(FakePlatform::new());
    session.acquire().await.unwrap();

    session.start_screen_share().await.unwrap();
    expect_event(&mut rx, |e| {
        *e == SessionEvent::ScreenShareStateChange(ScreenShareEvent::Started)
    })
    .await;

    session.stop_screen_share();
    expect_event(&mut rx, |e| {
        *e == SessionEvent::ScreenShareStateChange(ScreenShareEvent::Stopped)
    })
    .await;
}
