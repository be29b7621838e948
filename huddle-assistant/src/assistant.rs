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

//! The in-call assistant: generates insights into the feed and answers
//! questions typed into the assistant tab.

use log::{error, info};
use std::cell::{Cell, RefCell};
use std::fmt;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::error::AssistantError;
use crate::insights::{Insight, InsightFeed, InsightRequest, INSIGHT_TOKENS};
use crate::TextGenerator;

/// Token budget for one answer.
pub const ASSISTANT_ANSWER_TOKENS: u32 = 200;

/// Reply posted when the service fails to answer.
pub const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// Call facts passed to the model along with a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeetingContext {
    pub participant_count: usize,
    pub duration_minutes: u64,
    pub engagement_score: u8,
}

impl MeetingContext {
    pub fn new(participant_count: usize, duration_minutes: u64, engagement_score: u8) -> Self {
        Self {
            participant_count,
            duration_minutes,
            engagement_score,
        }
    }
}

impl fmt::Display for MeetingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} participants, {} minutes duration, engagement score: {}%",
            self.participant_count, self.duration_minutes, self.engagement_score
        )
    }
}

fn answer_prompt(question: &str, context: &MeetingContext) -> String {
    format!(
        "As an AI teaching assistant in a video call, answer this question: \"{question}\". \
         Context: Meeting context: {context}. Provide a helpful, educational response."
    )
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or_default()
}

/// Clears the thinking flag even if the answer future is dropped.
struct ThinkingGuard<'a>(&'a Cell<bool>);

impl Drop for ThinkingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct Assistant<G> {
    generator: G,
    feed: RefCell<InsightFeed>,
    next_insight_id: Cell<u64>,
    thinking: Cell<bool>,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            feed: RefCell::new(InsightFeed::new()),
            next_insight_id: Cell::new(1),
            thinking: Cell::new(false),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Newest first.
    pub fn insights(&self) -> Vec<Insight> {
        self.feed.borrow().to_vec()
    }

    /// True while [`answer`](Self::answer) is waiting on the service.
    pub fn is_thinking(&self) -> bool {
        self.thinking.get()
    }

    /// Generates an insight and adds it to the feed.
    pub async fn generate_insight(
        &self,
        request: &InsightRequest,
    ) -> Result<Insight, AssistantError> {
        let text = self
            .generator
            .generate(&request.prompt(), INSIGHT_TOKENS)
            .await
            .map_err(|e| {
                error!("Error generating AI insight: {e}");
                e
            })?;

        let id = self.next_insight_id.get();
        self.next_insight_id.set(id + 1);
        let insight = Insight {
            id,
            kind: request.kind,
            title: request.kind.title().to_string(),
            content: text.trim().to_string(),
            created_at_ms: now_ms(),
            priority: request.kind.priority(),
        };
        info!("New {:?} insight #{id}", request.kind);
        self.feed.borrow_mut().push(insight.clone());
        Ok(insight)
    }

    /// Answers `question` for the chat.
    ///
    /// Service failures produce [`APOLOGY`] rather than an error. Blank
    /// questions fail with [`AssistantError::EmptyPrompt`] and a question
    /// asked while another is pending fails with [`AssistantError::Busy`].
    pub async fn answer(
        &self,
        question: &str,
        context: &MeetingContext,
    ) -> Result<String, AssistantError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::EmptyPrompt);
        }
        if self.thinking.replace(true) {
            return Err(AssistantError::Busy);
        }
        let _thinking = ThinkingGuard(&self.thinking);

        let result = self
            .generator
            .generate(&answer_prompt(question, context), ASSISTANT_ANSWER_TOKENS)
            .await;

        match result {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                error!("Error processing AI query: {e}");
                Ok(APOLOGY.to_string())
            }
        }
    }
}
