use thiserror::Error;

/// Errors raised while talking to a text-completion backend.
///
/// None of these ever reach a citizen: the `Assistant` absorbs every one of
/// them into its fallback path. They exist so that providers can report what
/// went wrong and so the logs can tell the cases apart.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider did not answer within {0} seconds")]
    Timeout(u64),
    #[error("AI provider is misconfigured: {0}")]
    MissingAiProvider(String),
}

/// Errors raised while reading or writing an external knowledge file.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to access knowledge file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Knowledge file '{path}' is not a valid key/text JSON object: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by an `InteractionStore` implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend failure: {0}")]
    Backend(String),
}
