//! # API Payloads
//!
//! Request and response bodies of the JSON API.

use chrono::{DateTime, Utc};
use citizen_ai::{
    providers::db::storage::{ChatRecord, ConcernRecord},
    SentimentLabel,
};
use serde::{Deserialize, Serialize};

// --- Chat ---

#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub history: Vec<ChatRecord>,
}

// --- Feedback ---

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub feedback_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub sentiment: SentimentLabel,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub text: String,
    pub sentiment: SentimentLabel,
}

// --- Concerns ---

#[derive(Debug, Serialize, Deserialize)]
pub struct ConcernRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConcernSubmitResponse {
    pub success: bool,
    pub concern_id: u64,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConcernListResponse {
    pub concerns: Vec<ConcernRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConcernResponse {
    pub concern: ConcernRecord,
}

// --- Services ---

#[derive(Debug, Deserialize, Default)]
pub struct HelpParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HelpResponse {
    pub help: String,
}

// --- Auth ---

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub role: String,
}
