//! # Dashboard Aggregation
//!
//! Pure summaries over snapshots of the interaction store, for the admin
//! dashboard. Nothing here touches the store itself.

use crate::providers::db::storage::{ChatRecord, ConcernRecord, FeedbackRecord};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// How many of each record kind the summary lists as recent activity.
pub const RECENT_ACTIVITY_LEN: usize = 5;
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

fn tally<'a>(values: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

fn sentiment_counts(feedback: &[FeedbackRecord]) -> BTreeMap<String, usize> {
    let labels: Vec<String> = feedback.iter().map(|f| f.sentiment.to_string()).collect();
    tally(labels.iter().map(String::as_str))
}

fn last<T: Clone>(records: &[T], n: usize) -> Vec<T> {
    records[records.len().saturating_sub(n)..].to_vec()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_feedback: usize,
    pub total_concerns: usize,
    pub total_chats: usize,
    pub sentiment_stats: BTreeMap<String, usize>,
    pub concern_categories: BTreeMap<String, usize>,
    pub concern_priorities: BTreeMap<String, usize>,
    pub concern_statuses: BTreeMap<String, usize>,
    pub recent_feedback: Vec<FeedbackRecord>,
    pub recent_concerns: Vec<ConcernRecord>,
    pub recent_chats: Vec<ChatRecord>,
}

impl DashboardSummary {
    pub fn from_records(
        feedback: &[FeedbackRecord],
        concerns: &[ConcernRecord],
        chats: &[ChatRecord],
    ) -> Self {
        Self {
            total_feedback: feedback.len(),
            total_concerns: concerns.len(),
            total_chats: chats.len(),
            sentiment_stats: sentiment_counts(feedback),
            concern_categories: tally(concerns.iter().map(|c| c.category.as_str())),
            concern_priorities: tally(concerns.iter().map(|c| c.priority.as_str())),
            concern_statuses: tally(concerns.iter().map(|c| c.status.as_str())),
            recent_feedback: last(feedback, RECENT_ACTIVITY_LEN),
            recent_concerns: last(concerns, RECENT_ACTIVITY_LEN),
            recent_chats: last(chats, RECENT_ACTIVITY_LEN),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub sentiment_distribution: BTreeMap<String, usize>,
    pub concern_categories: BTreeMap<String, usize>,
    pub concern_priorities: BTreeMap<String, usize>,
    /// Feedback submitted strictly after `now - 7 days`.
    pub weekly_feedback_count: usize,
    pub total_interactions: usize,
}

impl Analytics {
    pub fn from_records(
        feedback: &[FeedbackRecord],
        concerns: &[ConcernRecord],
        chats: &[ChatRecord],
        now: DateTime<Utc>,
    ) -> Self {
        let week_ago = now - Duration::days(WEEKLY_WINDOW_DAYS);
        Self {
            sentiment_distribution: sentiment_counts(feedback),
            concern_categories: tally(concerns.iter().map(|c| c.category.as_str())),
            concern_priorities: tally(concerns.iter().map(|c| c.priority.as_str())),
            weekly_feedback_count: feedback.iter().filter(|f| f.timestamp > week_ago).count(),
            total_interactions: chats.len() + feedback.len() + concerns.len(),
        }
    }
}
