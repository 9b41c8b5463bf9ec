use super::storage::{
    ChatRecord, ConcernRecord, FeedbackRecord, InteractionStore, NewConcern, OPEN_STATUS,
};
use crate::{errors::StoreError, sentiment::SentimentLabel};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Tables {
    chats: Vec<ChatRecord>,
    feedback: Vec<FeedbackRecord>,
    concerns: Vec<ConcernRecord>,
}

/// A process-local store. Clones share the same tables, so a clone can be
/// handed to each request handler.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(len: usize) -> u64 {
    len as u64 + 1
}

#[async_trait]
impl InteractionStore for MemoryStore {
    fn name(&self) -> &str {
        "Memory"
    }

    async fn record_chat(
        &self,
        user_question: &str,
        ai_response: &str,
    ) -> Result<ChatRecord, StoreError> {
        let mut tables = self.tables.write().await;
        let record = ChatRecord {
            id: next_id(tables.chats.len()),
            user_question: user_question.to_string(),
            ai_response: ai_response.to_string(),
            timestamp: Utc::now(),
        };
        tables.chats.push(record.clone());
        debug!(id = record.id, "Recorded chat.");
        Ok(record)
    }

    async fn recent_chats(&self, limit: usize) -> Result<Vec<ChatRecord>, StoreError> {
        let tables = self.tables.read().await;
        let skip = tables.chats.len().saturating_sub(limit);
        Ok(tables.chats[skip..].to_vec())
    }

    async fn record_feedback(
        &self,
        text: &str,
        sentiment: SentimentLabel,
    ) -> Result<FeedbackRecord, StoreError> {
        let mut tables = self.tables.write().await;
        let record = FeedbackRecord {
            id: next_id(tables.feedback.len()),
            text: text.to_string(),
            sentiment,
            timestamp: Utc::now(),
        };
        tables.feedback.push(record.clone());
        debug!(id = record.id, %sentiment, "Recorded feedback.");
        Ok(record)
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        Ok(self.tables.read().await.feedback.clone())
    }

    async fn record_concern(
        &self,
        concern: NewConcern,
        sentiment: SentimentLabel,
    ) -> Result<ConcernRecord, StoreError> {
        let mut tables = self.tables.write().await;
        let record = ConcernRecord {
            id: next_id(tables.concerns.len()),
            title: concern.title,
            description: concern.description,
            category: concern.category,
            priority: concern.priority,
            sentiment,
            status: OPEN_STATUS.to_string(),
            timestamp: Utc::now(),
        };
        tables.concerns.push(record.clone());
        debug!(id = record.id, category = %record.category, "Recorded concern.");
        Ok(record)
    }

    async fn list_concerns(&self) -> Result<Vec<ConcernRecord>, StoreError> {
        Ok(self.tables.read().await.concerns.clone())
    }

    async fn get_concern(&self, id: u64) -> Result<Option<ConcernRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.concerns.iter().find(|c| c.id == id).cloned())
    }
}
