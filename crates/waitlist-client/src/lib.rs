//! Waitlist signup client
//!
//! [`WaitlistForm`] holds what the visitor has typed so far and
//! [`WaitlistClient`] sends it to `POST /api/waitlist` exactly once per
//! submit. A client refuses a second submission while one is in flight.
//!
//! ```no_run
//! use waitlist_client::{WaitlistClient, WaitlistForm};
//!
//! # async fn run() -> Result<(), waitlist_client::ClientError> {
//! let client = WaitlistClient::new("http://localhost:3000")?;
//! let mut form = WaitlistForm::default();
//! form.set_field("email", "owner@acme.test")?;
//! form.set_field("company_size", "6-20 employees")?;
//!
//! let response = client.submit_form(&mut form).await?;
//! assert!(response.success && form.is_submitted());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod form;

pub use client::WaitlistClient;
pub use error::ClientError;
pub use form::{FormField, WaitlistForm};
