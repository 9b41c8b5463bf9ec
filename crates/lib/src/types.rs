//! # Shared Types
//!
//! Plain data types shared by the library and its consumers.

use serde::{Deserialize, Serialize};

/// Configuration for the text-completion backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// What a prompt was built for. Decides how the backend's output is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    ServiceAnswer,
    SentimentClassification,
}

/// A raw backend completion together with the purpose of its prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCandidate {
    pub purpose: PromptPurpose,
    pub text: String,
}
