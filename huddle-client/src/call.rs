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

//! [`CallRoom`] ties the media session, the participant roster, chat and
//! analytics of one call view together.
//!
//! The room owns its [`MediaSession`]; the view that creates the room calls
//! [`CallRoom::join`] on mount and [`CallRoom::end`] on unmount.

use log::info;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::analytics::CallAnalytics;
use crate::chat::{ChatLog, ChatMessage};
use crate::event_bus::emit_session_event;
use crate::events::SessionEvent;
use crate::media::{MediaError, MediaPlatform, MediaSession, SessionSnapshot};
use crate::participants::{Participant, Roster};
use crate::remote::RemoteParticipantSource;

/// Who the local user is and which room they are in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalIdentity {
    pub room_id: String,
    pub user_id: String,
    pub display_name: String,
}

impl LocalIdentity {
    pub fn new(
        room_id: impl Into<String>,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

type Listener = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

pub struct CallRoom<P: MediaPlatform> {
    identity: LocalIdentity,
    session: MediaSession<P>,
    roster: Rc<RefCell<Roster<P::Track>>>,
    chat: RefCell<ChatLog>,
    analytics: RefCell<CallAnalytics>,
    listener: Listener,
}

impl<P: MediaPlatform> CallRoom<P> {
    pub fn new(platform: P, identity: LocalIdentity) -> Self {
        let session = MediaSession::new(platform);
        let roster = Rc::new(RefCell::new(Roster::new(identity.user_id.clone())));
        let listener: Listener = Rc::new(RefCell::new(None));

        {
            let roster = Rc::downgrade(&roster);
            let listener = Rc::downgrade(&listener);
            session.set_on_change(move |snapshot: &SessionSnapshot<P::Track>| {
                if let Some(roster) = roster.upgrade() {
                    roster.borrow_mut().sync_local(
                        snapshot.muted,
                        snapshot.video_enabled,
                        snapshot.current.clone(),
                    );
                }
                if let Some(listener) = listener.upgrade() {
                    fire(&listener);
                }
            });
        }

        Self {
            identity,
            session,
            roster,
            chat: RefCell::new(ChatLog::new()),
            analytics: RefCell::new(CallAnalytics::default()),
            listener,
        }
    }

    /// Sets the callback run after any change visible in the call view.
    pub fn set_on_change(&self, callback: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn identity(&self) -> &LocalIdentity {
        &self.identity
    }

    pub fn session(&self) -> &MediaSession<P> {
        &self.session
    }

    /// Acquires local media and adds the local participant.
    pub async fn join(&self) -> Result<(), MediaError> {
        info!("Joining room {}", self.identity.room_id);
        self.session.acquire().await?;
        if !self.session.is_initialized() {
            return Ok(());
        }
        let snapshot = self.session.snapshot();
        let local = Participant {
            stream: snapshot.current,
            muted: snapshot.muted,
            video_enabled: snapshot.video_enabled,
            ..Participant::new(
                self.identity.user_id.clone(),
                self.identity.display_name.clone(),
            )
        };
        self.roster.borrow_mut().upsert_local(local);
        fire(&self.listener);
        Ok(())
    }

    /// Admits the participants announced by `source`.
    ///
    /// Ignored until local media is ready, and after the call ended.
    pub fn admit_remote(&self, source: &dyn RemoteParticipantSource) -> usize {
        if !self.session.is_initialized() {
            return 0;
        }
        let incoming = source
            .participants(&self.identity.room_id)
            .into_iter()
            .map(|profile| profile.into_participant());
        let added = self.roster.borrow_mut().merge_remote(incoming);
        for id in &added {
            info!("Participant {id} joined {}", self.identity.room_id);
            emit_session_event(SessionEvent::ParticipantJoined(id.clone()));
        }
        if !added.is_empty() {
            fire(&self.listener);
        }
        added.len()
    }

    pub fn toggle_mute(&self) -> Result<(), MediaError> {
        self.session.toggle_mute()
    }

    pub fn toggle_video(&self) -> Result<(), MediaError> {
        self.session.toggle_video()
    }

    pub async fn toggle_screen_share(&self) -> Result<(), MediaError> {
        self.session.toggle_screen_share().await
    }

    pub fn set_hand_raised(&self, raised: bool) {
        let changed = self
            .roster
            .borrow_mut()
            .set_hand_raised(&self.identity.user_id, raised);
        if changed {
            fire(&self.listener);
        }
    }

    pub fn dismiss_error(&self) {
        self.session.clear_error();
    }

    /// Posts a chat message from the local user. Returns its id.
    pub fn send_chat(&self, text: &str) -> Option<u64> {
        let id = self
            .chat
            .borrow_mut()
            .send(&self.identity.display_name, text)
            .map(|m| m.id);
        if id.is_some() {
            fire(&self.listener);
        }
        id
    }

    pub fn push_assistant_message(&self, text: &str) {
        self.chat.borrow_mut().push_assistant(text);
        fire(&self.listener);
    }

    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.borrow().messages().to_vec()
    }

    pub fn participants(&self) -> Vec<Participant<P::Track>> {
        self.roster.borrow().all().to_vec()
    }

    pub fn roster(&self) -> Ref<'_, Roster<P::Track>> {
        self.roster.borrow()
    }

    /// Refreshes analytics; returns true when people joined since the last
    /// refresh.
    pub fn tick_analytics(&self) -> bool {
        let count = self.roster.borrow().len();
        let mut analytics = self.analytics.borrow_mut();
        let grew = analytics.has_new_participants(count);
        analytics.tick_now(count);
        drop(analytics);
        fire(&self.listener);
        grew
    }

    pub fn record_question(&self) {
        self.analytics.borrow_mut().record_question();
    }

    pub fn analytics(&self) -> CallAnalytics {
        self.analytics.borrow().clone()
    }

    /// Releases all media and empties the roster.
    pub fn end(&self) {
        info!("Ending call in {} and cleaning up...", self.identity.room_id);
        self.session.release();
        self.roster.borrow_mut().clear();
        emit_session_event(SessionEvent::CallEnded);
        fire(&self.listener);
    }
}

impl<P: MediaPlatform> Drop for CallRoom<P> {
    fn drop(&mut self) {
        self.session.release();
    }
}

fn fire(listener: &RefCell<Option<Rc<dyn Fn()>>>) {
    let callback = listener.borrow().clone();
    if let Some(callback) = callback {
        callback();
    }
}
