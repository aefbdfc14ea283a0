//! Waitlist persistence
//!
//! The handler talks to a [`WaitlistStore`]. The production implementation
//! inserts through the hosted store's PostgREST interface; tests swap in an
//! in-memory one.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use shared_types::WaitlistEntry;
use thiserror::Error;
use url::Url;

use crate::config::{ConfigError, StoreConfig};

/// Postgres SQLSTATE for "undefined table"
const UNDEFINED_TABLE: &str = "42P01";

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered with an error body
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// The waitlist table does not exist yet
    pub fn is_missing_table(&self) -> bool {
        match self {
            StoreError::Rejected { code, message, .. } => {
                code.as_deref() == Some(UNDEFINED_TABLE)
                    || (message.contains("relation") && message.contains("does not exist"))
            }
            _ => false,
        }
    }
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Insert one entry. Returns the inserted rows when the store echoes them.
    async fn insert(&self, entry: &WaitlistEntry) -> Result<Option<serde_json::Value>, StoreError>;
}

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Hosted-store client for the waitlist table
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: reqwest::Client,
    endpoint: Url,
}

impl SupabaseStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreBuildError> {
        let endpoint = config.table_endpoint()?;

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key).map_err(|_| StoreBuildError::InvalidKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|_| StoreBuildError::InvalidKey)?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WaitlistStore for SupabaseStore {
    async fn insert(&self, entry: &WaitlistEntry) -> Result<Option<serde_json::Value>, StoreError> {
        tracing::debug!("Inserting waitlist entry into {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&[entry])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(None);
            }
            let rows = serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
            return Ok(Some(rows));
        }

        let parsed = serde_json::from_str::<PostgrestError>(&body);
        let (code, message) = match parsed {
            Ok(err) => {
                tracing::debug!(
                    code = ?err.code,
                    details = ?err.details,
                    hint = ?err.hint,
                    "Store rejected insert"
                );
                let message = err
                    .message
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Store error").to_string());
                (err.code, message)
            }
            Err(_) if !body.trim().is_empty() => (None, body),
            Err(_) => (
                None,
                status.canonical_reason().unwrap_or("Store error").to_string(),
            ),
        };

        Err(StoreError::Rejected {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[derive(Debug, Error)]
pub enum StoreBuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("store key contains characters not allowed in a header")]
    InvalidKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
