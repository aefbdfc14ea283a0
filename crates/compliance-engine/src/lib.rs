pub mod catalog;
pub mod options;
pub mod quiz;
pub mod rules;

pub use options::{quiz_options, QuizOptions};
pub use quiz::{Quiz, QuizError, QuizStep};

use shared_types::{BusinessProfile, ComplianceItem, ComplianceReport};

/// ComplianceEngine entry point
pub struct ComplianceEngine;

impl ComplianceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Ordered compliance items for a profile. Pure and deterministic.
    pub fn generate(&self, profile: &BusinessProfile) -> Vec<ComplianceItem> {
        rules::generate(profile)
    }

    pub fn report(&self, profile: &BusinessProfile) -> ComplianceReport {
        ComplianceReport {
            profile: profile.clone(),
            items: self.generate(profile),
        }
    }

    /// Ids of the rules that fire for a profile, in output order
    pub fn applicable_rules(&self, profile: &BusinessProfile) -> Vec<&'static str> {
        rules::applicable_rule_ids(profile)
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
