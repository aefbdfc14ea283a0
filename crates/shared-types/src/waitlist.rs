//! Waitlist signup records and the JSON bodies of `POST /api/waitlist`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message returned on every successful signup, including the degraded path
pub const JOINED_MESSAGE: &str = "Successfully joined waitlist!";

/// Note attached when the store has no waitlist table yet
pub const TABLE_PENDING_NOTE: &str = "Table will be created automatically";

pub const EMAIL_REQUIRED: &str = "Email is required";

/// A prospective customer's signup as sent to the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_compliance_challenges: Option<String>,
    /// Set by the store on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }
}

/// 200 response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WaitlistResponse {
    /// Entry stored; `data` carries the inserted rows when the store returned them
    pub fn joined(data: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            message: JOINED_MESSAGE.to_string(),
            data,
            note: None,
        }
    }

    /// Entry only logged because the table is missing
    pub fn deferred() -> Self {
        Self {
            success: true,
            message: JOINED_MESSAGE.to_string(),
            data: None,
            note: Some(TABLE_PENDING_NOTE.to_string()),
        }
    }
}

/// 4xx/5xx response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
