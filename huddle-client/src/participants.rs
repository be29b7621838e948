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

//! Participants shown in the call view.

use crate::media::{LocalStream, MediaTrack};

#[derive(Clone, Debug, PartialEq)]
pub struct Participant<T> {
    pub id: String,
    pub name: String,
    /// `None` for participants whose media is not available locally.
    pub stream: Option<LocalStream<T>>,
    pub muted: bool,
    pub video_enabled: bool,
    pub hand_raised: bool,
}

impl<T: MediaTrack> Participant<T> {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stream: None,
            muted: false,
            video_enabled: true,
            hand_raised: false,
        }
    }

    /// First letter of the display name, upper-cased, for avatar tiles.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// The ordered participant list of one call, local participant included.
#[derive(Clone, Debug)]
pub struct Roster<T> {
    local_id: String,
    participants: Vec<Participant<T>>,
}

impl<T: MediaTrack> Roster<T> {
    pub fn new(local_id: impl Into<String>) -> Self {
        Self {
            local_id: local_id.into(),
            participants: Vec::new(),
        }
    }

    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Inserts the local participant, replacing any earlier entry for it.
    pub fn upsert_local(&mut self, participant: Participant<T>) {
        self.participants.retain(|p| p.id != self.local_id);
        self.participants.push(Participant {
            id: self.local_id.clone(),
            ..participant
        });
    }

    /// Mirrors the session state onto the local participant, if present.
    pub fn sync_local(
        &mut self,
        muted: bool,
        video_enabled: bool,
        stream: Option<LocalStream<T>>,
    ) -> bool {
        let local_id = self.local_id.clone();
        match self.participants.iter_mut().find(|p| p.id == local_id) {
            Some(local) => {
                local.muted = muted;
                local.video_enabled = video_enabled;
                local.stream = stream;
                true
            }
            None => false,
        }
    }

    /// Appends the participants whose ids are not present yet. Returns the
    /// ids that were added.
    pub fn merge_remote(
        &mut self,
        incoming: impl IntoIterator<Item = Participant<T>>,
    ) -> Vec<String> {
        let mut added = Vec::new();
        for participant in incoming {
            if self.participants.iter().any(|p| p.id == participant.id) {
                continue;
            }
            added.push(participant.id.clone());
            self.participants.push(participant);
        }
        added
    }

    pub fn set_hand_raised(&mut self, id: &str, raised: bool) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.hand_raised = raised;
                true
            }
            None => false,
        }
    }

    pub fn local(&self) -> Option<&Participant<T>> {
        self.participants.iter().find(|p| p.id == self.local_id)
    }

    /// Everyone except the local participant, in join order.
    pub fn others(&self) -> impl Iterator<Item = &Participant<T>> {
        self.participants.iter().filter(|p| p.id != self.local_id)
    }

    pub fn all(&self) -> &[Participant<T>] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }
}
