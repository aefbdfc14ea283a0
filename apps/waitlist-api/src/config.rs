//! Store connection settings
//!
//! The hosted store's URL and anon key come from the environment (a `.env`
//! file is loaded first by the binary). Both the plain and the
//! `NEXT_PUBLIC_`-prefixed variable names are accepted.

use thiserror::Error;
use url::Url;

/// Table the waitlist rows are inserted into
pub const WAITLIST_TABLE: &str = "waitlist";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),

    #[error("STORE_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),
}

/// Connection settings for the hosted store.
///
/// `Debug` redacts the key.
#[derive(Clone)]
pub struct StoreConfig {
    pub url: Url,
    pub anon_key: String,
    pub table: String,
    /// Upper bound on the single insert attempt
    pub timeout_secs: u64,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .field("table", &self.table)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StoreConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(url)
            .map_err(|e| ConfigError::InvalidUrl("SUPABASE_URL".to_string(), e.to_string()))?;
        Ok(Self {
            url,
            anon_key: anon_key.to_string(),
            table: WAITLIST_TABLE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load from environment variables
    ///
    /// - `SUPABASE_URL` / `NEXT_PUBLIC_SUPABASE_URL` (required)
    /// - `SUPABASE_ANON_KEY` / `NEXT_PUBLIC_SUPABASE_ANON_KEY` (required)
    /// - `STORE_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|n| lookup(n))
                .find(|v| !v.trim().is_empty())
        };

        let url = first(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"])
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = first(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"])
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let mut config = Self::new(url.trim(), anon_key.trim())?;
        if let Some(raw) = lookup("STORE_TIMEOUT_SECS") {
            config.timeout_secs = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    /// PostgREST endpoint for the waitlist table
    pub fn table_endpoint(&self) -> Result<Url, ConfigError> {
        let mut base = self.url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("rest/v1/{}", self.table))
            .map_err(|e| ConfigError::InvalidUrl(self.url.to_string(), e.to_string()))
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}
