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

//! Global event bus for session events.
//!
//! A broadcast channel: any component can subscribe and every subscriber
//! receives every event emitted after it subscribed.
//!
//! # Example
//!
//! ```ignore
//! use huddle_client::{subscribe_session_events, SessionEvent};
//!
//! let mut rx = subscribe_session_events();
//! wasm_bindgen_futures::spawn_local(async move {
//!     while let Ok(event) = rx.recv().await {
//!         if let SessionEvent::PermissionDenied(message) = event {
//!             log::warn!("{message}");
//!         }
//!     }
//! });
//! ```

use crate::events::SessionEvent;
use async_broadcast::{broadcast, InactiveReceiver, Receiver, Sender};
use once_cell::sync::Lazy;

/// Capacity of the event bus channel
pub const EVENT_BUS_CAPACITY: usize = 256;

struct EventBus {
    sender: Sender<SessionEvent>,
    // Keeps the channel open while nobody is subscribed.
    _keepalive: InactiveReceiver<SessionEvent>,
}

static BUS: Lazy<EventBus> = Lazy::new(|| {
    let (mut sender, receiver) = broadcast(EVENT_BUS_CAPACITY);
    sender.set_overflow(true);
    EventBus {
        sender,
        _keepalive: receiver.deactivate(),
    }
});

/// Get the global sender for emitting session events.
pub fn global_session_sender() -> Sender<SessionEvent> {
    BUS.sender.clone()
}

/// Subscribe to session events.
///
/// Returns a receiver that will receive all future events.
pub fn subscribe_session_events() -> Receiver<SessionEvent> {
    BUS.sender.new_receiver()
}

/// Emit a session event to all subscribers.
///
/// Never blocks. When the channel is full the oldest event is dropped, and
/// with no active subscribers the event is discarded.
pub fn emit_session_event(event: SessionEvent) {
    let _ = BUS.sender.try_broadcast(event);
}
