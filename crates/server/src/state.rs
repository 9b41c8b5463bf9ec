//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds the configuration, the
//! assistant and the interaction store, making them accessible to all request
//! handlers.

use crate::config::AppConfig;
use citizen_ai::{
    prompts::PromptTemplates,
    providers::{
        db::{memory::MemoryStore, storage::InteractionStore},
        factory::create_provider,
    },
    Assistant, KnowledgeBase, TopicMatcher,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The citizen-facing assistant. Read-only after startup.
    pub assistant: Arc<Assistant>,
    /// Chats, feedback and concerns.
    pub store: Arc<dyn InteractionStore>,
}

impl AppState {
    /// Assembles a state from ready-made parts. Tests use this to inject
    /// their own assistant or store.
    pub fn new(
        config: AppConfig,
        assistant: Assistant,
        store: Arc<dyn InteractionStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
            store,
        }
    }
}

fn build_templates(config: &AppConfig) -> anyhow::Result<PromptTemplates> {
    let mut templates = PromptTemplates::default();
    if let Some(service) = &config.prompts.service {
        if !service.contains("{query}") {
            anyhow::bail!("prompts.service must contain a {{query}} placeholder");
        }
        templates.service = service.clone();
    }
    if let Some(sentiment) = &config.prompts.sentiment {
        if !sentiment.contains("{text}") {
            anyhow::bail!("prompts.sentiment must contain a {{text}} placeholder");
        }
        templates.sentiment = sentiment.clone();
    }
    Ok(templates)
}

/// Builds the shared application state from the configuration.
///
/// A backend that cannot be created is not fatal: the assistant then runs in
/// fallback mode for the lifetime of the process. Invalid policy values or
/// prompt templates are rejected.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let policy = &config.policy;
    if !(0.0..=1.0).contains(&policy.confidence_threshold) {
        anyhow::bail!(
            "policy.confidence_threshold must be within [0, 1], got {}",
            policy.confidence_threshold
        );
    }
    if policy.backend_timeout_secs == 0 {
        anyhow::bail!("policy.backend_timeout_secs must be greater than zero");
    }
    if config.jwt_secret.is_empty() {
        anyhow::bail!("jwt_secret must not be empty");
    }
    if let Some(name) = config.users.iter().find(|(_, u)| u.password.is_empty()).map(|(n, _)| n) {
        anyhow::bail!("user '{name}' has an empty password");
    }

    let insecure = config.insecure_defaults();
    if !insecure.is_empty() {
        warn!(
            settings = ?insecure,
            "Running with built-in credentials; set JWT_SECRET and user passwords before exposing the dashboard."
        );
    }

    let ai_provider = match &config.backend {
        Some(backend) => match create_provider(backend) {
            Ok(provider) => Some(provider),
            Err(e) => {
                warn!(provider = %backend.provider, "Backend unavailable, answering from the knowledge base: {e}");
                None
            }
        },
        None => {
            info!("No backend configured, answering from the knowledge base.");
            None
        }
    };

    let knowledge = KnowledgeBase::load(&config.knowledge_path);
    let matcher = config
        .topics
        .clone()
        .map(TopicMatcher::new)
        .unwrap_or_default();

    let assistant = Assistant::builder()
        .maybe_ai_provider(ai_provider)
        .knowledge(knowledge)
        .matcher(matcher)
        .templates(build_templates(&config)?)
        .policy(config.policy.clone())
        .build();

    let store: Arc<dyn InteractionStore> = Arc::new(MemoryStore::new());
    info!(store = store.name(), "Initialized interaction store.");

    Ok(AppState::new(config, assistant, store))
}
