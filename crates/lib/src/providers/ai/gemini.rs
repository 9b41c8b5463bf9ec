use super::{send_json, AiProvider, SAMPLING};
use crate::errors::PromptError;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// --- generateContent wire format ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [PromptContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct PromptContent<'a> {
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate, its parts joined. Empty when the reply was
    /// blocked or carried no candidate.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// A backend calling Google's Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    pub fn new(api_url: String, api_key: String) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// The `generateContent` endpoint for a Gemini model name.
    pub fn endpoint_for(model_name: &str) -> String {
        format!("{GEMINI_BASE_URL}/{model_name}:generateContent")
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, PromptError> {
        let body = GenerateContentRequest {
            contents: [PromptContent {
                parts: [TextPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens,
                temperature: SAMPLING.temperature,
                top_p: SAMPLING.top_p,
                top_k: SAMPLING.top_k,
            },
        };

        debug!(url = %self.api_url, max_output_tokens, "--> Sending prompt to Gemini");
        let request = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())]);
        let reply: GenerateContentResponse = send_json(request, &body).await?;

        Ok(reply.into_text())
    }
}
