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

//! In-call chat log. Messages live only as long as the call view.

use serde::{Deserialize, Serialize};

use crate::utils::now_ms;

pub const ASSISTANT_NAME: &str = "AI Assistant";

pub const WELCOME_MESSAGE: &str = "Welcome to your AI-enhanced meeting! I'm analyzing the conversation and will provide real-time insights.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub sent_at_ms: f64,
    pub from_assistant: bool,
}

#[derive(Clone, Debug)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// A log that opens with the assistant's welcome message.
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push_assistant(WELCOME_MESSAGE);
        log
    }

    /// Appends a user message. Blank input is ignored.
    pub fn send(&mut self, sender: &str, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.push(sender, text, false))
    }

    pub fn push_assistant(&mut self, text: &str) -> &ChatMessage {
        self.push(ASSISTANT_NAME, text, true)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, sender: &str, text: &str, from_assistant: bool) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender: sender.to_string(),
            text: text.to_string(),
            sent_at_ms: now_ms(),
            from_assistant,
        });
        &self.messages[self.messages.len() - 1]
    }
}
