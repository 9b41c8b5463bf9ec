//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the
//! `citizen-ai-server` integration tests:
//!
//! - `TestApp`: spawns the real router on a random port, configured from a
//!   temporary `config.yml`, with an `httpmock::MockServer` standing in for
//!   the text-completion backend.
//! - Helpers for backend replies and login tokens.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use async_trait::async_trait;
use axum::serve;
use citizen_ai::{
    providers::db::storage::{
        ChatRecord, ConcernRecord, FeedbackRecord, InteractionStore, NewConcern,
    },
    SentimentLabel, StoreError,
};
use citizen_ai_server::{
    auth::middleware::Claims,
    config, router,
    state::{build_app_state, AppState},
};
use httpmock::{Method, Mock, MockServer};
use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::Client;
use serde_json::json;
use std::{
    fs,
    net::SocketAddr,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const TEST_JWT_SECRET: &str = "test-secret";
pub const ADMIN_PASSWORD: &str = "admin123";

/// A generated answer that passes the adequacy rules with high confidence.
pub const GOOD_PASSPORT_ANSWER: &str = "\
SUMMARY: You can apply for a passport online through the Passport Seva portal.
STEP-BY-STEP PROCEDURE: Register on the website, fill the application form and book an appointment at the Passport Seva Kendra office.
REQUIRED DOCUMENTS: Proof of address, proof of date of birth and identity documents.
PROCESSING TIME & FEES: Normal processing takes 30 days and the fee is ₹1500.
CONTACT INFORMATION: Call the helpline 1800-258-1800 or visit passportindia.gov.in.";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the mock server configured as its backend.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(true, None).await
    }

    /// Spawns the server with no backend, so every answer comes from the
    /// knowledge base and the keyword heuristic.
    pub async fn spawn_without_backend() -> Result<Self> {
        Self::spawn_with(false, None).await
    }

    /// Spawns the server without a backend, backed by `store`.
    pub async fn spawn_with_store(store: Arc<dyn InteractionStore>) -> Result<Self> {
        Self::spawn_with(false, Some(store)).await
    }

    async fn spawn_with(
        with_backend: bool,
        store: Option<Arc<dyn InteractionStore>>,
    ) -> Result<Self> {
        dotenvy::dotenv().ok();
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;
        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");

        let backend = if with_backend {
            format!(
                r#"
backend:
  provider: "local"
  api_url: "{}"
  api_key: null
  model_name: "mock-chat-model""#,
                mock_server.url(COMPLETIONS_PATH)
            )
        } else {
            String::new()
        };
        let config_content = format!(
            r#"
port: 0
knowledge_path: "{knowledge}"
jwt_secret: "{TEST_JWT_SECRET}"
policy:
  backend_timeout_secs: 5
users:
  admin:
    password: "{ADMIN_PASSWORD}"
    role: "admin"
  clerk:
    password: "clerk123"
    role: "user"
{backend}
"#,
            knowledge = config_dir.path().join("fallback_responses.json").display(),
        );
        fs::write(&config_path, config_content)?;

        let config = config::get_config(config_path.to_str())?;
        let mut app_state = build_app_state(config).await?;
        if let Some(store) = store {
            app_state.store = store;
        }

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let state_for_server = app_state.clone();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(state_for_server);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Makes the mock backend answer every completion request with `content`.
    pub async fn mock_completion(&self, content: &str) -> Mock<'_> {
        let body = json!({
            "choices": [{
                "message": { "role": "assistant", "content": content }
            }]
        });
        self.mock_server
            .mock_async(|when, then| {
                when.method(Method::POST).path(COMPLETIONS_PATH);
                then.status(200).json_body(body);
            })
            .await
    }

    /// Makes the mock backend fail every completion request.
    pub async fn mock_backend_failure(&self) -> Mock<'_> {
        self.mock_server
            .mock_async(|when, then| {
                when.method(Method::POST).path(COMPLETIONS_PATH);
                then.status(500).body("model crashed");
            })
            .await
    }

    /// Logs in through the API and returns the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?
            .error_for_status()?;
        let body: serde_json::Value = response.json().await?;
        body["token"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| anyhow::anyhow!("login response carried no token"))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked.
            let _ = tx.send(());
        }
    }
}

/// Generates a JWT signed with the test secret.
pub fn generate_jwt(sub: &str, role: &str, expires_in_secs: i64) -> Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
    let claims = Claims {
        sub: sub.to_string(),
        role: role.to_string(),
        exp: (now + expires_in_secs).max(0) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )?;
    Ok(token)
}

// --- Store that always fails ---

/// An `InteractionStore` whose every operation fails, for error-path tests.
#[derive(Clone, Debug, Default)]
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::Backend("database is unavailable".to_string())
}

#[async_trait]
impl InteractionStore for FailingStore {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn record_chat(&self, _question: &str, _answer: &str) -> Result<ChatRecord, StoreError> {
        Err(unavailable())
    }

    async fn recent_chats(&self, _limit: usize) -> Result<Vec<ChatRecord>, StoreError> {
        Err(unavailable())
    }

    async fn record_feedback(
        &self,
        _text: &str,
        _sentiment: SentimentLabel,
    ) -> Result<FeedbackRecord, StoreError> {
        Err(unavailable())
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackRecord>, StoreError> {
        Err(unavailable())
    }

    async fn record_concern(
        &self,
        _concern: NewConcern,
        _sentiment: SentimentLabel,
    ) -> Result<ConcernRecord, StoreError> {
        Err(unavailable())
    }

    async fn list_concerns(&self) -> Result<Vec<ConcernRecord>, StoreError> {
        Err(unavailable())
    }

    async fn get_concern(&self, _id: u64) -> Result<Option<ConcernRecord>, StoreError> {
        Err(unavailable())
    }
}
