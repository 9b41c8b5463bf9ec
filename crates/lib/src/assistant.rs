//! # Generation Orchestrator
//!
//! The `Assistant` wraps an optional text-completion backend with a trust
//! policy. A service answer from the backend is shown only when it passes the
//! adequacy rules and clears the confidence threshold; otherwise the curated
//! knowledge-base answer for the matched topic is returned instead. Sentiment
//! classification follows the same shape with the keyword heuristic as its
//! fallback.
//!
//! ```text
//! BackendUnavailable ─────────────────────────────┐
//! Generating ──error/timeout──────────────────────┤
//!     │ ok                                        ▼
//! Validating ──inadequate / low confidence──► FallbackSubstituted
//!     │ pass
//! Accepted
//! ```
//!
//! Both public entry points are total: every failure is logged and absorbed.

use crate::{
    constants::{
        DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_SENTIMENT_MAX_TOKENS,
        DEFAULT_SERVICE_MAX_TOKENS,
    },
    errors::PromptError,
    knowledge::KnowledgeBase,
    matcher::TopicMatcher,
    prompts::{PromptTemplates, ECHO_LABELS},
    providers::ai::AiProvider,
    sentiment::{self, SentimentLabel},
    types::{GeneratedCandidate, PromptPurpose},
    validator::{self, AdequacyVerdict, RejectionReason},
};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use tracing::{debug, info, warn};

/// Tunable limits of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPolicy {
    /// Generated service answers scoring below this are discarded.
    pub confidence_threshold: f64,
    pub service_max_tokens: u32,
    pub sentiment_max_tokens: u32,
    /// A backend call running longer than this counts as a failed call.
    pub backend_timeout_secs: u64,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            service_max_tokens: DEFAULT_SERVICE_MAX_TOKENS,
            sentiment_max_tokens: DEFAULT_SENTIMENT_MAX_TOKENS,
            backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl GenerationPolicy {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

/// States a single generation passes through. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    BackendUnavailable,
    Generating,
    Validating,
    Accepted,
    FallbackSubstituted,
}

/// Why a generation ended in `FallbackSubstituted`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FallbackCause {
    BackendUnavailable,
    BackendError(String),
    Inadequate(RejectionReason),
    LowConfidence(f64),
    Unlabelled,
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackCause::BackendUnavailable => f.write_str("backend unavailable"),
            FallbackCause::BackendError(e) => write!(f, "backend error: {e}"),
            FallbackCause::Inadequate(reason) => write!(f, "inadequate response: {reason}"),
            FallbackCause::LowConfidence(score) => write!(f, "low confidence ({score:.2})"),
            FallbackCause::Unlabelled => f.write_str("no label in classification"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Accepted,
    Fallback(FallbackCause),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Generation<T> {
    pub value: T,
    pub outcome: Outcome,
}

/// Trims a completion, drops echoed prompt lines and cuts a trailing
/// unfinished sentence (one ending in `...` or `-`) back to the last full stop.
pub fn clean_response(raw: &str) -> String {
    let cleaned = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !ECHO_LABELS.iter().any(|label| line.starts_with(label)))
        .collect::<Vec<_>>()
        .join("\n");

    if cleaned.ends_with("...") || cleaned.ends_with('-') {
        let body = cleaned.trim_end_matches(|c: char| c == '.' || c == '-');
        if let Some(end) = body.rfind('.') {
            return body[..=end].to_string();
        }
    }
    cleaned
}

/// The citizen-facing assistant. Cheap to share behind an `Arc`; nothing in
/// it is mutated after construction.
#[derive(Debug, Clone)]
pub struct Assistant {
    ai_provider: Option<Box<dyn AiProvider>>,
    knowledge: KnowledgeBase,
    matcher: TopicMatcher,
    templates: PromptTemplates,
    policy: GenerationPolicy,
}

impl Assistant {
    pub fn builder() -> AssistantBuilder {
        AssistantBuilder::new()
    }

    /// False when the assistant runs in permanent fallback mode.
    pub fn has_backend(&self) -> bool {
        self.ai_provider.is_some()
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn matcher(&self) -> &TopicMatcher {
        &self.matcher
    }

    pub fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// The curated answer for the topic `query` matches.
    pub fn fallback_answer(&self, query: &str) -> &str {
        let topic = self.matcher.match_topic(query);
        self.knowledge.lookup(topic)
    }

    /// Answers a citizen's question. Never fails; the worst case is the
    /// generic help text.
    pub async fn chat_response(&self, query: &str) -> String {
        self.generate_service_answer(query).await.value
    }

    /// Classifies feedback or a concern. Never fails.
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentLabel {
        self.generate_sentiment(text).await.value
    }

    pub(crate) async fn generate_service_answer(&self, query: &str) -> Generation<String> {
        let Some(provider) = self.ai_provider.as_deref() else {
            return self.service_fallback(query, FallbackCause::BackendUnavailable);
        };

        let prompt = self.templates.build_service_prompt(query);
        let candidate = match self
            .call_backend(
                provider,
                &prompt,
                PromptPurpose::ServiceAnswer,
                self.policy.service_max_tokens,
            )
            .await
        {
            Ok(candidate) => candidate,
            Err(e) => return self.service_fallback(query, FallbackCause::BackendError(e.to_string())),
        };

        debug!(
            state = ?GenerationState::Validating,
            purpose = ?candidate.purpose,
            chars = candidate.text.len()
        );
        if let AdequacyVerdict::Rejected(reason) = validator::assess(&candidate.text, query) {
            return self.service_fallback(query, FallbackCause::Inadequate(reason));
        }

        let confidence = validator::confidence(&candidate.text, query);
        if confidence < self.policy.confidence_threshold {
            return self.service_fallback(query, FallbackCause::LowConfidence(confidence));
        }

        info!(
            state = ?GenerationState::Accepted,
            confidence,
            "Using generated service answer."
        );
        Generation {
            value: candidate.text,
            outcome: Outcome::Accepted,
        }
    }

    pub(crate) async fn generate_sentiment(&self, text: &str) -> Generation<SentimentLabel> {
        let Some(provider) = self.ai_provider.as_deref() else {
            return self.sentiment_fallback(text, FallbackCause::BackendUnavailable);
        };

        let prompt = self.templates.build_sentiment_prompt(text);
        let candidate = match self
            .call_backend(
                provider,
                &prompt,
                PromptPurpose::SentimentClassification,
                self.policy.sentiment_max_tokens,
            )
            .await
        {
            Ok(candidate) => candidate,
            Err(e) => return self.sentiment_fallback(text, FallbackCause::BackendError(e.to_string())),
        };

        if let Some(label) = sentiment::find_label(&candidate.text) {
            debug!(
                state = ?GenerationState::Accepted,
                purpose = ?candidate.purpose,
                %label,
                "Using generated sentiment label."
            );
            Generation {
                value: label,
                outcome: Outcome::Accepted,
            }
        } else {
            let label = sentiment::classify(text);
            warn!(
                state = ?GenerationState::FallbackSubstituted,
                cause = %FallbackCause::Unlabelled,
                %label,
                "Classification carried no label, using keyword heuristic."
            );
            Generation {
                value: label,
                outcome: Outcome::Fallback(FallbackCause::Unlabelled),
            }
        }
    }

    async fn call_backend(
        &self,
        provider: &dyn AiProvider,
        prompt: &str,
        purpose: PromptPurpose,
        max_output_tokens: u32,
    ) -> Result<GeneratedCandidate, PromptError> {
        debug!(state = ?GenerationState::Generating, ?purpose, max_output_tokens);
        let timeout = self.policy.backend_timeout();
        let raw = tokio::time::timeout(timeout, provider.generate(prompt, max_output_tokens))
            .await
            .map_err(|_| PromptError::Timeout(timeout.as_secs()))??;

        Ok(GeneratedCandidate {
            purpose,
            text: clean_response(&raw),
        })
    }

    fn service_fallback(&self, query: &str, cause: FallbackCause) -> Generation<String> {
        let topic = self.matcher.match_topic(query);
        warn!(
            state = ?GenerationState::FallbackSubstituted,
            %cause,
            topic,
            "Using knowledge base answer."
        );
        Generation {
            value: self.knowledge.lookup(topic).to_string(),
            outcome: Outcome::Fallback(cause),
        }
    }

    fn sentiment_fallback(&self, text: &str, cause: FallbackCause) -> Generation<SentimentLabel> {
        let label = sentiment::classify(text);
        warn!(
            state = ?GenerationState::FallbackSubstituted,
            %cause,
            %label,
            "Using keyword sentiment heuristic."
        );
        Generation {
            value: label,
            outcome: Outcome::Fallback(cause),
        }
    }
}

/// A builder for creating an `Assistant`.
///
/// Everything is optional: without a provider the assistant answers from the
/// knowledge base, and every other part defaults to its built-in value.
#[derive(Default)]
pub struct AssistantBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    knowledge: Option<KnowledgeBase>,
    matcher: Option<TopicMatcher>,
    templates: Option<PromptTemplates>,
    policy: Option<GenerationPolicy>,
}

impl AssistantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text-completion backend.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the backend if one is available; `None` leaves the assistant in
    /// fallback mode.
    pub fn maybe_ai_provider(mut self, ai_provider: Option<Box<dyn AiProvider>>) -> Self {
        self.ai_provider = ai_provider;
        self
    }

    pub fn knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    pub fn matcher(mut self, matcher: TopicMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn templates(mut self, templates: PromptTemplates) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Assistant {
        if self.ai_provider.is_none() {
            info!(state = ?GenerationState::BackendUnavailable, "Assistant running without a backend.");
        }
        Assistant {
            ai_provider: self.ai_provider,
            knowledge: self.knowledge.unwrap_or_default(),
            matcher: self.matcher.unwrap_or_default(),
            templates: self.templates.unwrap_or_default(),
            policy: self.policy.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug)]
    struct ScriptedProvider {
        reply: Result<String, String>,
        delay: Option<Duration>,
        prompts: Arc<Mutex<Vec<(String, u32)>>>,
    }

    impl ScriptedProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                delay: None,
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                ..Self::replying("")
            }
        }
    }

    #[async_trait]
    impl AiProvider for ScriptedProvider {
        async fn generate(
            &self,
            prompt: &str,
            max_output_tokens: u32,
        ) -> Result<String, PromptError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), max_output_tokens));
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(PromptError::AiApi)
        }
    }

    const GOOD_ANSWER: &str = "SUMMARY: The PAN card is issued by the Income Tax Department.\n\
        PROCEDURE: Fill Form 49A on the NSDL website and pay the fee of ₹107.\n\
        DOCUMENTS: Identity proof, address proof and two photographs.\n\
        FEES: ₹107 online. Processing takes 15-20 days.\n\
        CONTACT: Helpline 020-27218080 or the nearest PAN office.";

    fn assistant_with(provider: ScriptedProvider) -> Assistant {
        Assistant::builder().ai_provider(Box::new(provider)).build()
    }

    #[tokio::test]
    async fn accepts_a_confident_answer() {
        let provider = ScriptedProvider::replying(GOOD_ANSWER);
        let prompts = provider.prompts.clone();
        let assistant = assistant_with(provider);

        let generation = assistant
            .generate_service_answer("How to apply for PAN card?")
            .await;

        assert_eq!(generation.outcome, Outcome::Accepted);
        assert_eq!(generation.value, GOOD_ANSWER);
        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].0.contains("Question: How to apply for PAN card?"));
        assert_eq!(prompts[0].1, DEFAULT_SERVICE_MAX_TOKENS);
    }

    #[tokio::test]
    async fn without_backend_uses_knowledge_base() {
        let assistant = Assistant::builder().build();
        let generation = assistant
            .generate_service_answer("How to apply for PAN card?")
            .await;
        assert_eq!(
            generation.outcome,
            Outcome::Fallback(FallbackCause::BackendUnavailable)
        );
        assert_eq!(generation.value, assistant.knowledge().lookup("pan_card"));
    }

    #[tokio::test]
    async fn backend_error_falls_back() {
        let assistant = assistant_with(ScriptedProvider::failing("out of memory"));
        let generation = assistant.generate_service_answer("voter id").await;
        assert!(matches!(
            generation.outcome,
            Outcome::Fallback(FallbackCause::BackendError(_))
        ));
        assert_eq!(generation.value, assistant.knowledge().lookup("voter_id"));
    }

    #[tokio::test]
    async fn generic_ai_answer_is_rejected() {
        let assistant = assistant_with(ScriptedProvider::replying(
            "As an AI language model, I recommend contacting support.",
        ));
        let generation = assistant.generate_service_answer("aadhaar update").await;
        assert_eq!(
            generation.outcome,
            Outcome::Fallback(FallbackCause::Inadequate(
                RejectionReason::GenericAiResponse
            ))
        );
    }

    #[tokio::test]
    async fn low_confidence_answer_is_rejected() {
        // Adequate (two domain signals, long enough) but scores below 0.4.
        let answer = "You should apply after checking the process with your local authority.";
        let assistant = assistant_with(ScriptedProvider::replying(answer));
        let generation = assistant.generate_service_answer("ration card").await;
        assert!(matches!(
            generation.outcome,
            Outcome::Fallback(FallbackCause::LowConfidence(score)) if score < 0.4
        ));
        assert_eq!(generation.value, assistant.knowledge().lookup("ration_card"));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_backend_times_out() {
        let mut provider = ScriptedProvider::replying(GOOD_ANSWER);
        provider.delay = Some(Duration::from_secs(120));
        let assistant = Assistant::builder()
            .ai_provider(Box::new(provider))
            .policy(GenerationPolicy {
                backend_timeout_secs: 5,
                ..Default::default()
            })
            .build();

        let generation = assistant.generate_service_answer("passport").await;
        assert_eq!(
            generation.outcome,
            Outcome::Fallback(FallbackCause::BackendError(
                PromptError::Timeout(5).to_string()
            ))
        );
    }

    #[tokio::test]
    async fn sentiment_label_is_read_from_completion() {
        let provider = ScriptedProvider::replying("Negative");
        let prompts = provider.prompts.clone();
        let assistant = assistant_with(provider);

        let generation = assistant.generate_sentiment("The queue was fine").await;
        assert_eq!(generation.value, SentimentLabel::Negative);
        assert_eq!(generation.outcome, Outcome::Accepted);
        assert_eq!(prompts.lock().unwrap()[0].1, DEFAULT_SENTIMENT_MAX_TOKENS);
    }

    #[tokio::test]
    async fn unlabelled_completion_uses_heuristic() {
        let assistant = assistant_with(ScriptedProvider::replying("Hmm, hard to say."));
        let generation = assistant
            .generate_sentiment("Excellent service, thank you")
            .await;
        assert_eq!(generation.value, SentimentLabel::Positive);
        assert_eq!(generation.outcome, Outcome::Fallback(FallbackCause::Unlabelled));
    }

    #[test]
    fn cleaning_drops_echoed_labels() {
        let raw = "Question: how do I get a PAN card?\n\n  Fill Form 49A.  \nText: foo\nClassification: x";
        assert_eq!(clean_response(raw), "Fill Form 49A.");
    }

    #[test]
    fn cleaning_cuts_trailing_fragment() {
        assert_eq!(
            clean_response("Visit the RTO. Carry your documents and..."),
            "Visit the RTO."
        );
        assert_eq!(
            clean_response("Submit Form 6. Then wait for the BLO -"),
            "Submit Form 6."
        );
        assert_eq!(clean_response("No full stop at all..."), "No full stop at all...");
    }
}
