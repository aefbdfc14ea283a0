//! Log of submissions accepted while the waitlist table is missing
//!
//! Each deferred submission is written as a structured `tracing` event with
//! its timestamp. When a path is configured the same record is appended as
//! one JSON line, so the entries can be replayed once the table exists.

use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use shared_types::WaitlistEntry;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug, Serialize)]
struct FallbackRecord<'a> {
    #[serde(flatten)]
    entry: &'a WaitlistEntry,
    timestamp: String,
}

#[derive(Debug, Default)]
pub struct FallbackLog {
    path: Option<PathBuf>,
    write_lock: Mutex<()>,
}

impl FallbackLog {
    /// Log to `tracing` only
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append JSON lines to `path`
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub async fn record(&self, entry: &WaitlistEntry) -> std::io::Result<()> {
        let record = FallbackRecord {
            entry,
            timestamp: Utc::now().to_rfc3339(),
        };

        tracing::warn!(
            email = %entry.email,
            company_name = ?entry.company_name,
            business_type = ?entry.business_type,
            company_size = ?entry.company_size,
            current_compliance_challenges = ?entry.current_compliance_challenges,
            timestamp = %record.timestamp,
            "Waitlist submission (table needs to be created)"
        );

        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}
