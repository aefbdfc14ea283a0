use thiserror::Error;

/// Shown for transport failures, where there is nothing more useful to say
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the server fails without an `error` field
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("This form has already been submitted")]
    AlreadySubmitted,

    /// Non-2xx response from the endpoint
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Text to show inline next to the form
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => RETRY_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_shows_server_message() {
        let err = ClientError::Rejected {
            status: 500,
            message: "duplicate key value".to_string(),
        };
        assert_eq!(err.user_message(), "duplicate key value");
    }

    #[test]
    fn test_validation_message_matches_server() {
        assert_eq!(
            ClientError::EmailRequired.user_message(),
            shared_types::waitlist::EMAIL_REQUIRED
        );
    }
}
