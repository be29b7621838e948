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

//! Insights generated periodically during a call.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// How many insights the feed keeps.
pub const INSIGHT_FEED_CAPACITY: usize = 5;

/// Token budget for one insight.
pub const INSIGHT_TOKENS: u32 = 100;

/// Delay before the opening insight of a call.
pub const FIRST_INSIGHT_DELAY: Duration = Duration::from_secs(10);

/// Default cadence of periodic insights.
pub const INSIGHT_INTERVAL: Duration = Duration::from_secs(45);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Engagement,
    Summary,
    Suggestion,
    Alert,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

impl InsightPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightPriority::Low => "low",
            InsightPriority::Medium => "medium",
            InsightPriority::High => "high",
        }
    }
}

impl InsightKind {
    pub fn title(&self) -> &'static str {
        match self {
            InsightKind::Engagement => "📊 Engagement Analysis",
            InsightKind::Summary => "📝 Discussion Summary",
            InsightKind::Suggestion => "💡 AI Suggestion",
            InsightKind::Alert => "⚠️ Alert",
        }
    }

    pub fn priority(&self) -> InsightPriority {
        match self {
            InsightKind::Alert => InsightPriority::High,
            InsightKind::Suggestion => InsightPriority::Medium,
            InsightKind::Engagement | InsightKind::Summary => InsightPriority::Low,
        }
    }

    /// What the model is asked to concentrate on.
    pub fn focus(&self) -> &'static str {
        match self {
            InsightKind::Engagement => "participant engagement and interaction patterns",
            InsightKind::Summary => "key discussion points and outcomes",
            InsightKind::Suggestion => "actionable recommendations for improvement",
            InsightKind::Alert => "important alerts or concerns",
        }
    }
}

/// Builds the prompt for an insight of `kind` about `context`.
pub fn insight_prompt(kind: InsightKind, context: &str) -> String {
    format!(
        "As an AI teaching assistant analyzing a video call, provide a brief insight about: {context}. \
         Focus on {}. Keep it concise and actionable (max 2 sentences).",
        kind.focus()
    )
}

/// What to generate an insight about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsightRequest {
    pub kind: InsightKind,
    pub context: String,
}

impl InsightRequest {
    pub fn new(kind: InsightKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }

    /// The first insight of a call.
    pub fn opening(participant_count: usize) -> Self {
        Self::new(
            InsightKind::Engagement,
            format!("Meeting started with {participant_count} participants"),
        )
    }

    /// Raised when the headcount grew since the last analytics refresh.
    pub fn participant_joined(participant_count: usize) -> Self {
        Self::new(
            InsightKind::Alert,
            format!("New participant joined - now {participant_count} total participants"),
        )
    }

    /// One of the rotating periodic insights, picked at random.
    pub fn periodic<R: Rng + ?Sized>(
        participant_count: usize,
        engagement_score: u8,
        duration_minutes: u64,
        rng: &mut R,
    ) -> Self {
        let candidates = [
            Self::new(
                InsightKind::Engagement,
                format!("{participant_count} participants with {engagement_score}% engagement"),
            ),
            Self::new(
                InsightKind::Suggestion,
                format!("Meeting duration: {duration_minutes} minutes"),
            ),
            Self::new(
                InsightKind::Summary,
                "Current discussion progress and key points",
            ),
        ];
        candidates
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| Self::opening(participant_count))
    }

    /// [`periodic`](Self::periodic) with the thread-local generator.
    pub fn random_periodic(
        participant_count: usize,
        engagement_score: u8,
        duration_minutes: u64,
    ) -> Self {
        Self::periodic(
            participant_count,
            engagement_score,
            duration_minutes,
            &mut rand::thread_rng(),
        )
    }

    pub fn prompt(&self) -> String {
        insight_prompt(self.kind, &self.context)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: u64,
    pub kind: InsightKind,
    pub title: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: f64,
    pub priority: InsightPriority,
}

/// The newest insights, newest first.
#[derive(Clone, Debug, Default)]
pub struct InsightFeed {
    insights: VecDeque<Insight>,
}

impl InsightFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `insight` at the front, dropping the oldest beyond capacity.
    pub fn push(&mut self, insight: Insight) {
        self.insights.push_front(insight);
        self.insights.truncate(INSIGHT_FEED_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Insight> {
        self.insights.iter()
    }

    pub fn to_vec(&self) -> Vec<Insight> {
        self.insights.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}
