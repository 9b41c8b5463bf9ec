//! # Prompt Templates
//!
//! Renders questions and feedback into the two instruction templates the
//! backend understands. Rendering is plain placeholder substitution.

pub mod tasks;

use serde::{Deserialize, Serialize};
use tasks::{SENTIMENT_CLASSIFICATION_PROMPT, SERVICE_ANSWER_PROMPT};

/// Labels the service and sentiment templates put in front of their inputs.
/// Lines that start with one of them in a completion are prompt echoes.
pub const ECHO_LABELS: [&str; 3] = ["Question:", "Text:", "Classification:"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplates {
    /// Template with a `{query}` placeholder.
    pub service: String,
    /// Template with a `{text}` placeholder.
    pub sentiment: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            service: SERVICE_ANSWER_PROMPT.to_string(),
            sentiment: SENTIMENT_CLASSIFICATION_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Renders `query` into the service template.
    pub fn build_service_prompt(&self, query: &str) -> String {
        self.service.replace("{query}", query)
    }

    /// Renders `text` into the sentiment template.
    pub fn build_sentiment_prompt(&self, text: &str) -> String {
        self.sentiment.replace("{text}", text)
    }
}
