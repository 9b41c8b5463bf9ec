//! # Citizen Services Assistant
//!
//! This crate answers citizens' questions about public services and classifies
//! the sentiment of their feedback. A generative backend is used when one is
//! configured, but its output is only trusted after it passes the adequacy and
//! confidence checks in [`validator`]; otherwise the curated answer from the
//! [`knowledge`] base for the matched topic is returned.
//!
//! The [`Assistant`] is the entry point. Interaction records live behind the
//! [`providers::db::storage::InteractionStore`] trait, owned by the caller.

pub mod assistant;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod knowledge;
pub mod matcher;
pub mod prompts;
pub mod providers;
pub mod sentiment;
pub mod types;
pub mod validator;

pub use assistant::{clean_response, Assistant, AssistantBuilder, GenerationPolicy};
pub use errors::{KnowledgeError, PromptError, StoreError};
pub use knowledge::KnowledgeBase;
pub use matcher::{TopicMatcher, TopicRule};
pub use sentiment::SentimentLabel;
pub use types::BackendConfig;
