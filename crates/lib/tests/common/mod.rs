#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared mock providers and fixtures, so tests never reach a real backend.

use async_trait::async_trait;
use citizen_ai::{providers::ai::AiProvider, PromptError};
use dotenvy::dotenv;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, u32)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String, PromptError> {
        self.call_history
            .write()
            .unwrap()
            .push((prompt.to_string(), max_output_tokens));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

/// A backend that always fails, like an unreachable model server.
#[derive(Clone, Debug)]
pub struct FailingAiProvider;

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(&self, _prompt: &str, _max_output_tokens: u32) -> Result<String, PromptError> {
        Err(PromptError::AiApi("model server unreachable".to_string()))
    }
}

/// A generated answer that passes every adequacy rule and scores well above
/// the default confidence threshold for passport questions.
pub const GOOD_PASSPORT_ANSWER: &str = "\
SUMMARY: You can apply for a passport online through the Passport Seva portal.
STEP-BY-STEP PROCEDURE: Register on the website, fill the application form and book an appointment at the Passport Seva Kendra office.
REQUIRED DOCUMENTS: Proof of address, proof of date of birth and identity documents.
PROCESSING TIME & FEES: Normal processing takes 30 days and the fee is ₹1500.
CONTACT INFORMATION: Call the helpline 1800-258-1800 or visit passportindia.gov.in.";
