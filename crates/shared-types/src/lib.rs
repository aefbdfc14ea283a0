pub mod types;
pub mod waitlist;

pub use types::{BusinessProfile, ComplianceItem, ComplianceReport, ItemStatus, Priority};
pub use waitlist::{ErrorBody, WaitlistEntry, WaitlistResponse};
