//! # AI Provider Factory
//!
//! This module centralizes the logic for creating a text-completion backend from
//! configuration, so that every consumer (the server, tests, ad-hoc tools) builds
//! providers the same way.

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::BackendConfig,
};
use tracing::info;

/// Creates an AI provider instance from a `BackendConfig`.
///
/// - `gemini` requires an `api_key`; the URL is derived from `model_name` when
///   `api_url` is not set.
/// - `local` requires an `api_url` pointing at an OpenAI-compatible
///   chat-completions endpoint.
pub fn create_provider(config: &BackendConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config.api_key.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_key is required for the gemini provider".to_string(),
                )
            })?;
            let model_name = config.model_name.as_deref().unwrap_or("gemini-2.0-flash");
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| GeminiProvider::endpoint_for(model_name));
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_url is required for the local provider".to_string(),
                )
            })?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                config.model_name.clone(),
            )?)
        }
        other => {
            return Err(PromptError::MissingAiProvider(format!(
                "Unsupported AI provider type '{other}'"
            )))
        }
    };

    Ok(provider)
}
