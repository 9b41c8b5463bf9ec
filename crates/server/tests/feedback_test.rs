//! # Feedback Endpoint Tests

mod common;

use anyhow::Result;
use citizen_ai::SentimentLabel;
use citizen_ai_server::types::{AnalyzeResponse, FeedbackResponse};
use common::TestApp;
use httpmock::Method;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_submit_feedback_uses_keyword_heuristic_without_backend() -> Result<()> {
    let app = TestApp::spawn_without_backend().await?;

    let response = app
        .client
        .post(app.url("/feedback/submit"))
        .json(&json!({ "feedback_text": "Very disappointed with the slow response" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: FeedbackResponse = response.json().await?;
    assert!(body.success);
    assert_eq!(body.sentiment, SentimentLabel::Negative);
    assert_eq!(body.message, "Thank you for your feedback!");

    let stored = app.app_state.store.list_feedback().await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "Very disappointed with the slow response");
    assert_eq!(stored[0].sentiment, SentimentLabel::Negative);
    Ok(())
}

#[tokio::test]
async fn test_submit_feedback_uses_backend_label() -> Result<()> {
    // --- 1. Arrange ---
    let app = TestApp::spawn().await?;
    let completion_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path(common::COMPLETIONS_PATH)
                .body_contains("The office staff explained everything");
            then.status(200).json_body(json!({
                "choices": [{ "message": { "role": "assistant", "content": "POSITIVE" } }]
            }));
        })
        .await;

    // --- 2. Act ---
    let body: FeedbackResponse = app
        .client
        .post(app.url("/feedback/submit"))
        .json(&json!({ "feedback_text": "The office staff explained everything" }))
        .send()
        .await?
        .json()
        .await?;

    // --- 3. Assert ---
    assert_eq!(body.sentiment, SentimentLabel::Positive);
    completion_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_unlabelled_classification_falls_back_to_heuristic() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_completion("I am not sure how to describe this text.")
        .await;

    let body: FeedbackResponse = app
        .client
        .post(app.url("/feedback/submit"))
        .json(&json!({ "feedback_text": "Excellent and helpful service" }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body.sentiment, SentimentLabel::Positive);
    Ok(())
}

#[tokio::test]
async fn test_blank_feedback_is_rejected() -> Result<()> {
    let app = TestApp::spawn_without_backend().await?;

    let response = app
        .client
        .post(app.url("/feedback/submit"))
        .json(&json!({ "feedback_text": "" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.app_state.store.list_feedback().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_analyze_classifies_without_storing() -> Result<()> {
    let app = TestApp::spawn_without_backend().await?;

    let response = app
        .client
        .get(app.url("/feedback/analyze"))
        .query(&[("text", "The portal is terrible and broken")])
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: AnalyzeResponse = response.json().await?;
    assert_eq!(body.text, "The portal is terrible and broken");
    assert_eq!(body.sentiment, SentimentLabel::Negative);
    assert!(app.app_state.store.list_feedback().await?.is_empty());
    Ok(())
}
