pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// A trait for interacting with a text-completion backend.
///
/// The pipeline treats the model as an opaque function from a prompt to text.
/// Implementations signal every failure (transport, API status, malformed
/// body) as an `Err`; the caller decides what to show instead.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a completion for `prompt`, producing at most
    /// `max_output_tokens` tokens.
    async fn generate(&self, prompt: &str, max_output_tokens: u32)
        -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Sampling settings shared by the HTTP backends. Kept low so answers stay
/// close to the requested section layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sampling {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

pub(crate) const SAMPLING: Sampling = Sampling {
    temperature: 0.2,
    top_p: 0.85,
    top_k: 40,
};

/// Sends `body` as JSON and decodes a successful reply as `T`.
///
/// A non-2xx status becomes [`PromptError::AiApi`] carrying the reply body.
pub(crate) async fn send_json<B, T>(request: RequestBuilder, body: &B) -> Result<T, PromptError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = request
        .json(body)
        .send()
        .await
        .map_err(PromptError::AiRequest)?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "<-- Backend rejected the prompt");
        return Err(PromptError::AiApi(error_text));
    }

    response.json().await.map_err(PromptError::AiDeserialization)
}
