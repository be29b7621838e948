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

//! Simulated call analytics shown in the call header and assistant panel.

use rand::Rng;
use std::time::Duration;
use web_time::Instant;

use crate::utils::format_elapsed;

/// How often the call view refreshes analytics.
pub const ANALYTICS_INTERVAL: Duration = Duration::from_secs(10);

pub const BASELINE_ENGAGEMENT: f64 = 85.0;
pub const MIN_ENGAGEMENT: u8 = 60;
pub const MAX_ENGAGEMENT: u8 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct CallAnalytics {
    started_at: Instant,
    pub duration: Duration,
    pub participant_count: usize,
    /// Percentage in `MIN_ENGAGEMENT..=MAX_ENGAGEMENT`.
    pub engagement_score: u8,
    pub questions_asked: u32,
    pub key_topics: Vec<String>,
}

impl Default for CallAnalytics {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl CallAnalytics {
    pub fn starting_at(started_at: Instant) -> Self {
        Self {
            started_at,
            duration: Duration::ZERO,
            participant_count: 0,
            engagement_score: BASELINE_ENGAGEMENT as u8,
            questions_asked: 0,
            key_topics: Vec::new(),
        }
    }

    /// Refreshes duration and headcount. `jitter` moves engagement around
    /// the baseline; the result is clamped to the valid range.
    pub fn tick(&mut self, now: Instant, participant_count: usize, jitter: f64) {
        self.duration = now.saturating_duration_since(self.started_at);
        self.participant_count = participant_count;
        let score = (BASELINE_ENGAGEMENT + jitter)
            .round()
            .clamp(MIN_ENGAGEMENT as f64, MAX_ENGAGEMENT as f64);
        self.engagement_score = score as u8;
    }

    /// [`tick`](Self::tick) with a random jitter in `-5.0..5.0`.
    pub fn tick_now(&mut self, participant_count: usize) {
        let jitter = rand::thread_rng().gen_range(-5.0..5.0);
        self.tick(Instant::now(), participant_count, jitter);
    }

    pub fn record_question(&mut self) {
        self.questions_asked += 1;
    }

    /// True when more people are present than at the last tick.
    pub fn has_new_participants(&self, participant_count: usize) -> bool {
        participant_count > self.participant_count
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration.as_secs() / 60
    }

    pub fn formatted_duration(&self) -> String {
        format_elapsed(self.duration.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_updates_duration_and_count() {
        let start = Instant::now();
        let mut analytics = CallAnalytics::starting_at(start);
        analytics.tick(start + Duration::from_secs(125), 3, 0.0);
        assert_eq!(analytics.duration_minutes(), 2);
        assert_eq!(analytics.formatted_duration(), "2:05");
        assert_eq!(analytics.participant_count, 3);
        assert_eq!(analytics.engagement_score, 85);
    }

    #[test]
    fn engagement_is_clamped() {
        let start = Instant::now();
        let mut analytics = CallAnalytics::starting_at(start);
        analytics.tick(start, 1, 40.0);
        assert_eq!(analytics.engagement_score, MAX_ENGAGEMENT);
        analytics.tick(start, 1, -40.0);
        assert_eq!(analytics.engagement_score, MIN_ENGAGEMENT);
    }

    #[test]
    fn random_tick_stays_near_baseline() {
        let mut analytics = CallAnalytics::default();
        for _ in 0..50 {
            analytics.tick_now(2);
            assert!((80..=90).contains(&analytics.engagement_score));
        }
    }

    #[test]
    fn detects_new_participants() {
        let start = Instant::now();
        let mut analytics = CallAnalytics::starting_at(start);
        analytics.tick(start, 1, 0.0);
        assert!(analytics.has_new_participants(3));
        assert!(!analytics.has_new_participants(1));
    }
}
