use chrono::DateTime;
use reqwest::{StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Environment variable holding the GigaChat authorization key.
pub const AUTH_KEY_ENV_VAR: &str = "GIGACHAT_AUTH_KEY";

const DEFAULT_AUTH_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";
const DEFAULT_BASE_URL: &str = "https://gigachat.devices.sberbank.ru/api/v1";
const DEFAULT_MODEL: &str = "GigaChat-Max";
const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";

/// Configuration for the GigaChat API client
#[derive(Debug, Clone)]
pub struct GigaChatConfig {
    /// Base64 authorization key exchanged for access tokens
    pub auth_key: String,
    /// OAuth scope sent with every token request
    pub scope: String,
    /// Model to use (e.g., "GigaChat-Max")
    pub model: String,
    /// Token endpoint
    pub auth_url: String,
    /// Completion API base URL
    pub base_url: String,
    /// Verify TLS certificates; off by default because the GigaChat CA
    /// chain is not in standard trust stores
    pub verify_ssl_certs: bool,
}

impl GigaChatConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let auth_key = std::env::var(AUTH_KEY_ENV_VAR).unwrap_or_default();
        if auth_key.is_empty() {
            return Err(Error::Config(format!(
                "{AUTH_KEY_ENV_VAR} environment variable is not set"
            )));
        }
        Self::new(auth_key)
    }

    /// Create config from an explicit authorization key
    pub fn new(auth_key: impl Into<String>) -> Result<Self> {
        let auth_key = auth_key.into();
        if auth_key.is_empty() {
            return Err(Error::Config("authorization key is empty".to_string()));
        }

        Ok(Self {
            auth_key,
            scope: DEFAULT_SCOPE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            verify_ssl_certs: false,
        })
    }
}

/// GigaChat API client
pub struct GigaChatClient {
    client: reqwest::Client,
    config: GigaChatConfig,
}

impl GigaChatClient {
    pub fn new(config: GigaChatConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_ssl_certs)
            .build()?;
        Ok(Self { client, config })
    }

    /// Model identifier every request should carry
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Perform one request/response exchange with the completion API
    pub async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let token = self.fetch_access_token().await?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&token.access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!(
                "completion request rejected ({status}): {body}"
            )));
        }
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "GigaChat API error: {status} - {body}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Upstream(format!("failed to parse completion response: {e}")))
    }

    /// Exchange the authorization key for a short-lived access token.
    /// Tokens are not cached; every completion call performs its own exchange.
    async fn fetch_access_token(&self) -> Result<AccessToken> {
        let response = self
            .client
            .post(&self.config.auth_url)
            .header(header::AUTHORIZATION, format!("Basic {}", self.config.auth_key))
            .header(header::ACCEPT, "application/json")
            .header("RqUID", Uuid::new_v4().to_string())
            .form(&[("scope", self.config.scope.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!(
                "authorization key rejected ({status}): {body}"
            )));
        }
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "GigaChat OAuth error: {status} - {body}"
            )));
        }

        let token: AccessToken = serde_json::from_str(&body)
            .map_err(|e| Error::Upstream(format!("failed to parse token response: {e}")))?;

        if let Some(expires) = DateTime::from_timestamp_millis(token.expires_at) {
            debug!("Obtained access token valid until {expires}");
        }

        Ok(token)
    }
}

/// Message role on the completion wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message, built per request and discarded after
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    access_token: String,
    expires_at: i64,
}
