//! # Shared Constants
//!
//! This module provides a centralized location for the tunable defaults of the
//! generation pipeline and the names shared between the library and the server.
//! Using these constants helps to avoid "magic numbers" scattered across modules.

/// The key of the generic help answer in the knowledge base.
pub const DEFAULT_TOPIC: &str = "default";

/// Minimum confidence a generated service answer needs before it is shown.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Output token budget for service answers.
pub const DEFAULT_SERVICE_MAX_TOKENS: u32 = 400;

/// Output token budget for sentiment classification.
pub const DEFAULT_SENTIMENT_MAX_TOKENS: u32 = 30;

/// Seconds to wait for the backend before treating the call as failed.
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Default location of the editable knowledge file.
pub const DEFAULT_KNOWLEDGE_FILE: &str = "fallback_responses.json";
