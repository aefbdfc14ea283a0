//! HTTP client for the waitlist endpoint

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;
use shared_types::{WaitlistEntry, WaitlistResponse};
use url::Url;

use crate::error::{ClientError, GENERIC_FAILURE};
use crate::form::WaitlistForm;

const WAITLIST_PATH: &str = "api/waitlist";

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    error: Option<String>,
}

/// Clears the busy flag when the submission finishes, however it ends
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct WaitlistClient {
    http: reqwest::Client,
    endpoint: Url,
    busy: AtomicBool,
}

impl WaitlistClient {
    /// `base_url` is the site origin, e.g. `https://complianceiq.example`
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            http,
            endpoint: base.join(WAITLIST_PATH)?,
            busy: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// True while a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Send one entry. Never retried.
    pub async fn submit(&self, entry: &WaitlistEntry) -> Result<WaitlistResponse, ClientError> {
        if entry.email.is_empty() {
            return Err(ClientError::EmailRequired);
        }
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::SubmissionInProgress);
        }
        let _guard = BusyGuard(&self.busy);

        tracing::debug!(endpoint = %self.endpoint, "Submitting waitlist entry");
        let result = self.send(entry).await;
        match &result {
            Ok(_) => tracing::info!("Joined waitlist"),
            Err(e) => tracing::warn!(error = %e, "Waitlist submission failed"),
        }
        result
    }

    /// Submit the form's entry and mark the form done on success.
    /// A form is sent at most once.
    pub async fn submit_form(&self, form: &mut WaitlistForm) -> Result<WaitlistResponse, ClientError> {
        if form.is_submitted() {
            return Err(ClientError::AlreadySubmitted);
        }
        let entry = form.to_entry()?;
        let response = self.submit(&entry).await?;
        form.mark_submitted();
        Ok(response)
    }

    async fn send(&self, entry: &WaitlistEntry) -> Result<WaitlistResponse, ClientError> {
        let response = self.http.post(self.endpoint.clone()).json(entry).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<WaitlistResponse>().await?);
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<FailureBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_origin() {
        let client = WaitlistClient::new("https://complianceiq.example").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://complianceiq.example/api/waitlist"
        );
    }

    #[test]
    fn test_endpoint_keeps_mount_path() {
        let client = WaitlistClient::new("http://localhost:3000/preview").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:3000/preview/api/waitlist"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            WaitlistClient::new("localhost"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_idle_client_is_not_submitting() {
        let client = WaitlistClient::new("http://localhost:3000").unwrap();
        assert!(!client.is_submitting());
    }
}
