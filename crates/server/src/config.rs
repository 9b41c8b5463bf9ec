//! # Application Configuration
//!
//! This module defines the configuration structure for the `citizen-ai-server`
//! and the logic for loading it from an optional `config.yml` file and
//! environment variables. Every field has a default, so the server also starts
//! with no file at all, answering from the built-in knowledge base.

use citizen_ai::{
    constants::DEFAULT_KNOWLEDGE_FILE, BackendConfig, GenerationPolicy, TopicRule,
};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::{collections::HashMap, env, fs, path::Path};
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The text-completion backend. Without one the assistant answers from
    /// the knowledge base only.
    #[serde(default)]
    pub backend: Option<BackendConfig>,
    /// JSON file of curated answers merged over the built-in ones.
    #[serde(default = "default_knowledge_path")]
    pub knowledge_path: String,
    #[serde(default)]
    pub policy: GenerationPolicy,
    /// Replaces the built-in topic priority list when set.
    #[serde(default)]
    pub topics: Option<Vec<TopicRule>>,
    #[serde(default)]
    pub prompts: PromptOverrides,
    /// Dashboard accounts, keyed by username.
    #[serde(default = "default_users")]
    pub users: HashMap<String, UserConfig>,
    /// HS256 secret for login tokens. Loaded from `JWT_SECRET` env var.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
    /// How many chats `/chat/history` returns.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Optional replacements for the built-in prompt templates.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PromptOverrides {
    /// Must contain a `{query}` placeholder.
    #[serde(default)]
    pub service: Option<String>,
    /// Must contain a `{text}` placeholder.
    #[serde(default)]
    pub sentiment: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UserConfig {
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_port() -> u16 {
    8000
}

fn default_knowledge_path() -> String {
    DEFAULT_KNOWLEDGE_FILE.to_string()
}

fn default_role() -> String {
    "user".to_string()
}

/// Built-in signing secret. Publicly known, so only fit for local use.
pub const DEFAULT_JWT_SECRET: &str = "a-secure-secret-key";
/// Password of the built-in `admin` account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

fn default_users() -> HashMap<String, UserConfig> {
    HashMap::from([(
        "admin".to_string(),
        UserConfig {
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            role: "admin".to_string(),
        },
    )])
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_history_limit() -> usize {
    10
}

impl AppConfig {
    /// Settings still at their publicly known built-in values. Anyone can
    /// forge dashboard tokens or log in as admin while this is non-empty.
    pub fn insecure_defaults(&self) -> Vec<String> {
        let mut found = Vec::new();
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            found.push("jwt_secret".to_string());
        }
        let mut names: Vec<&String> = self
            .users
            .iter()
            .filter(|(_, user)| user.password == DEFAULT_ADMIN_PASSWORD)
            .map(|(name, _)| name)
            .collect();
        names.sort();
        found.extend(names.into_iter().map(|name| format!("users.{name}.password")));
        found
    }
}

// Reads a file and substitutes `${VAR}` with the environment value.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - Layer 1 is the serde defaults of [`AppConfig`].
/// - Layer 2 is `config_path_override` if given (it must exist), otherwise
///   `config.yml` next to this crate's manifest if present.
/// - Top-level keys like `port` and `jwt_secret` are overridden by `PORT` and
///   `JWT_SECRET`.
/// - Nested keys are overridden by `CITIZEN_AI__...` variables (e.g.,
///   `CITIZEN_AI__POLICY__CONFIDENCE_THRESHOLD`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder();

    let main_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let user_config_path = format!("{base_path}/config.yml");
            let content = read_and_substitute(&user_config_path)?;
            if content.is_some() {
                info!("Loading user-defined configuration from '{user_config_path}'.");
            } else {
                info!("'{user_config_path}' not found. Using built-in defaults.");
            }
            content
        }
    };
    if let Some(content) = main_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("CITIZEN_AI")
                .prefix_separator("__")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
