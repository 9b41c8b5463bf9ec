use super::{send_json, AiProvider, SAMPLING};
use crate::errors::PromptError;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

// --- OpenAI-compatible chat-completions wire format ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// A backend for a local or OpenAI-compatible chat-completions API
/// (llama.cpp server, vLLM, Ollama's OpenAI endpoint, ...).
///
/// `api_url` is the full completions endpoint, not a base URL.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl LocalAiProvider {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for LocalAiProvider {
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, PromptError> {
        let body = ChatCompletionRequest {
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            model: self.model.as_deref(),
            temperature: SAMPLING.temperature,
            top_p: SAMPLING.top_p,
            max_tokens: max_output_tokens,
            stream: false,
        };

        let mut request = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(url = %self.api_url, max_output_tokens, "--> Sending prompt to local AI provider");
        let reply: ChatCompletionResponse = send_json(request, &body).await?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
