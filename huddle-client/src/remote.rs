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

//! Sources of remote participants.
//!
//! There is no transport in this crate. A [`RemoteParticipantSource`] stands
//! in for whatever signaling layer eventually announces other people in the
//! room; [`SimulatedParticipants`] is the demo implementation.

use std::time::Duration;

use crate::media::MediaTrack;
use crate::participants::Participant;

/// Metadata of a participant announced by a remote source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteProfile {
    pub id: String,
    pub name: String,
    pub muted: bool,
    pub video_enabled: bool,
    pub hand_raised: bool,
}

impl RemoteProfile {
    pub fn into_participant<T: MediaTrack>(self) -> Participant<T> {
        Participant {
            id: self.id,
            name: self.name,
            stream: None,
            muted: self.muted,
            video_enabled: self.video_enabled,
            hand_raised: self.hand_raised,
        }
    }
}

pub trait RemoteParticipantSource {
    /// How long after the local user is ready the participants arrive.
    fn join_delay(&self) -> Duration;

    fn participants(&self, room_id: &str) -> Vec<RemoteProfile>;
}

pub const SIMULATED_JOIN_DELAY: Duration = Duration::from_secs(2);

/// Two fixed demo participants that "join" every room.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedParticipants;

impl RemoteParticipantSource for SimulatedParticipants {
    fn join_delay(&self) -> Duration {
        SIMULATED_JOIN_DELAY
    }

    fn participants(&self, _room_id: &str) -> Vec<RemoteProfile> {
        vec![
            RemoteProfile {
                id: "demo-user-1".to_string(),
                name: "John Doe".to_string(),
                muted: true,
                video_enabled: true,
                hand_raised: false,
            },
            RemoteProfile {
                id: "demo-user-2".to_string(),
                name: "Jane Smith".to_string(),
                muted: false,
                video_enabled: false,
                hand_raised: true,
            },
        ]
    }
}
