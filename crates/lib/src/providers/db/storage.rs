use crate::{errors::StoreError, sentiment::SentimentLabel};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Status given to every newly filed concern.
pub const OPEN_STATUS: &str = "Open";

/// One question/answer exchange with the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: u64,
    pub user_question: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u64,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub timestamp: DateTime<Utc>,
}

/// A concern as submitted by a citizen, before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewConcern {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcernRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    /// Sentiment of the concern's description.
    pub sentiment: SentimentLabel,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// A store for chats, feedback and concerns.
///
/// Ids are assigned by the store, start at 1 and increase by one per record
/// kind. Listings are returned in insertion order.
#[async_trait]
pub trait InteractionStore: Send + Sync + DynClone + Debug {
    /// Returns the name of the store (e.g., "Memory").
    fn name(&self) -> &str;

    async fn record_chat(
        &self,
        user_question: &str,
        ai_response: &str,
    ) -> Result<ChatRecord, StoreError>;

    /// The `limit` most recent chats, oldest first.
    async fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>, StoreError>;

    async fn record_feedback(
        &self,
        text: &str,
        sentiment: SentimentLabel,
    ) -> Result<FeedbackRecord, StoreError>;

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError>;

    async fn record_concern(
        &self,
        concern: NewConcern,
        sentiment: SentimentLabel,
    ) -> Result<ConcernRecord, StoreError>;

    async fn list_concerns(&self) -> Result<Vec<ConcernRecord>, StoreError>;

    async fn get_concern(&self, id: u64) -> Result<Option<ConcernRecord>, StoreError>;
}

dyn_clone::clone_trait_object!(InteractionStore);
