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

//! Tests for the call room: roster, chat, analytics and teardown.

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use huddle_client::remote::SIMULATED_JOIN_DELAY;
use huddle_client::{
    CallRoom, LocalIdentity, MediaError, MediaTrack, RemoteParticipantSource,
    SimulatedParticipants, ASSISTANT_NAME,
};
use support::{FakePlatform, Outcome};

fn room() -> CallRoom<FakePlatform> {
    CallRoom::new(
        FakePlatform::new(),
        LocalIdentity::new("room_1", "current-user", "You"),
    )
}

#[tokio::test]
async fn test_join_adds_local_participant() {
    let room = room();

    room.join().await.unwrap();

    let participants = room.participants();
    assert_eq!(participants.len(), 1);
    let local = &participants[0];
    assert_eq!(local.id, "current-user");
    assert_eq!(local.name, "You");
    assert!(!local.muted);
    assert!(local.video_enabled);
    assert_eq!(local.stream, room.session().current_stream());
}

#[tokio::test]
async fn test_failed_join_adds_nobody() {
    let room = room();
    room.session()
        .platform()
        .push_user_outcome(Outcome::Fail(MediaError::PermissionDenied(
            "denied".to_string(),
        )));

    assert!(room.join().await.is_err());

    assert!(room.participants().is_empty());
    assert!(room.session().error().is_some());
    assert_eq!(room.admit_remote(&SimulatedParticipants), 0);
}

#[tokio::test]
async fn test_simulated_participants_join_once() {
    let room = room();
    room.join().await.unwrap();

    assert_eq!(room.admit_remote(&SimulatedParticipants), 2);
    assert_eq!(room.admit_remote(&SimulatedParticipants), 0);

    let roster = room.roster();
    let others: Vec<_> = roster.others().collect();
    assert_eq!(others.len(), 2);
    assert_eq!(others[0].name, "John Doe");
    assert!(others[0].muted);
    assert!(others[0].video_enabled);
    assert!(!others[0].hand_raised);
    assert_eq!(others[1].name, "Jane Smith");
    assert!(!others[1].muted);
    assert!(!others[1].video_enabled);
    assert!(others[1].hand_raised);
    assert!(others.iter().all(|p| p.stream.is_none()));
}

#[test]
fn test_simulated_delay_is_two_seconds() {
    assert_eq!(SimulatedParticipants.join_delay(), Duration::from_secs(2));
    assert_eq!(SIMULATED_JOIN_DELAY, Duration::from_secs(2));
}

#[tokio::test]
async fn test_local_participant_tracks_session_flags() {
    let room = room();
    room.join().await.unwrap();

    room.toggle_mute().unwrap();
    room.toggle_video().unwrap();

    let roster = room.roster();
    let local = roster.local().unwrap();
    assert!(local.muted);
    assert!(!local.video_enabled);
}

#[tokio::test]
async fn test_local_participant_follows_screen_share() {
    let room = room();
    room.join().await.unwrap();

    room.toggle_screen_share().await.unwrap();
    let shared = room.session().current_stream();
    assert_eq!(room.roster().local().unwrap().stream, shared);

    room.toggle_screen_share().await.unwrap();
    assert_eq!(
        room.roster().local().unwrap().stream,
        room.session().camera_stream()
    );
}

#[tokio::test]
async fn test_hand_raise_updates_local_participant() {
    let room = room();
    room.join().await.unwrap();

    room.set_hand_raised(true);
    assert!(room.roster().local().unwrap().hand_raised);

    room.set_hand_raised(false);
    assert!(!room.roster().local().unwrap().hand_raised);
}

#[test]
fn test_chat_ignores_blank_messages() {
    let room = room();
    assert_eq!(room.chat_messages().len(), 1);
    assert_eq!(room.chat_messages()[0].sender, ASSISTANT_NAME);

    assert_eq!(room.send_chat("   "), None);
    let id = room.send_chat("  hello  ").unwrap();

    let messages = room.chat_messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].id, id);
    assert_eq!(messages[1].text, "hello");
    assert_eq!(messages[1].sender, "You");
    assert!(!messages[1].from_assistant);
}

#[test]
fn test_assistant_messages_are_flagged() {
    let room = room();
    room.push_assistant_message("Summary ready");

    let last = room.chat_messages().pop().unwrap();
    assert!(last.from_assistant);
    assert_eq!(last.sender, ASSISTANT_NAME);
}

#[tokio::test]
async fn test_tick_analytics_reports_growth() {
    let room = room();
    room.join().await.unwrap();

    assert!(room.tick_analytics());
    assert!(!room.tick_analytics());

    room.admit_remote(&SimulatedParticipants);
    assert!(room.tick_analytics());
    assert_eq!(room.analytics().participant_count, 3);

    room.record_question();
    assert_eq!(room.analytics().questions_asked, 1);
}

#[tokio::test]
async fn test_end_releases_media_and_clears_roster() {
    let room = room();
    room.join().await.unwrap();
    room.admit_remote(&SimulatedParticipants);

    room.end();

    assert!(room.participants().is_empty());
    assert!(room.session().platform().live_tracks().is_empty());
    assert!(!room.session().is_initialized());
    assert_eq!(room.admit_remote(&SimulatedParticipants), 0);
}

#[tokio::test]
async fn test_drop_stops_tracks() {
    let room = room();
    room.join().await.unwrap();
    room.toggle_screen_share().await.unwrap();
    let tracks = room.session().platform().created_tracks();
    assert!(tracks.iter().all(MediaTrack::is_live));

    drop(room);

    assert!(tracks.iter().all(|t| !t.is_live()));
}

#[tokio::test]
async fn test_change_callback_fires_for_room_updates() {
    let room = room();
    let renders = Rc::new(Cell::new(0));
    {
        let renders = renders.clone();
        room.set_on_change(move || renders.set(renders.get() + 1));
    }

    room.join().await.unwrap();
    let after_join = renders.get();
    assert!(after_join >= 1);

    room.send_chat("hi");
    assert_eq!(renders.get(), after_join + 1);

    room.admit_remote(&SimulatedParticipants);
    assert_eq!(renders.get(), after_join + 2);
}
