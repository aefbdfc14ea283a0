//! Four-step compliance quiz
//!
//! ```text
//! BusinessType --select--> CompanySize --select--> Location --generate--> Results
//!      ^                                                                     |
//!      +------------------------------ reset -------------------------------+
//! ```
//!
//! The first two steps advance as soon as an answer is picked. The location
//! step only records the pick; moving on needs an explicit `generate_report`.

use serde::Serialize;
use shared_types::{BusinessProfile, ComplianceReport};
use thiserror::Error;

use crate::{options, rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStep {
    BusinessType,
    CompanySize,
    Location,
    Results,
}

impl QuizStep {
    /// 1-based position in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            QuizStep::BusinessType => 1,
            QuizStep::CompanySize => 2,
            QuizStep::Location => 3,
            QuizStep::Results => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuizStep::BusinessType => "Business Type",
            QuizStep::CompanySize => "Company Size",
            QuizStep::Location => "Location",
            QuizStep::Results => "Results",
        }
    }
}

impl std::fmt::Display for QuizStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("{action} is not available during the {step} step")]
    WrongStep { step: QuizStep, action: &'static str },

    #[error("'{value}' is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Select a state before generating the report")]
    StateNotSelected,
}

/// Quiz session state. Holds the answers given so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    step: QuizStep,
    profile: BusinessProfile,
    report: Option<ComplianceReport>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            step: QuizStep::BusinessType,
            profile: BusinessProfile::default(),
            report: None,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn step_number(&self) -> u8 {
        self.step.number()
    }

    /// True for every step up to and including the current one
    pub fn has_reached(&self, step: QuizStep) -> bool {
        self.step.number() >= step.number()
    }

    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    /// Whether the generate action is offered
    pub fn can_generate(&self) -> bool {
        self.step == QuizStep::Location && !self.profile.state.is_empty()
    }

    /// Step 1: pick a business type and move to step 2
    pub fn select_business_type(&mut self, business_type: &str) -> Result<(), QuizError> {
        self.expect_step(QuizStep::BusinessType, "Selecting a business type")?;
        if !options::is_business_type(business_type) {
            return Err(QuizError::UnknownOption {
                field: "business type",
                value: business_type.to_string(),
            });
        }
        self.profile.business_type = business_type.to_string();
        self.step = QuizStep::CompanySize;
        Ok(())
    }

    /// Step 2: pick a company size and move to step 3
    pub fn select_company_size(&mut self, company_size: &str) -> Result<(), QuizError> {
        self.expect_step(QuizStep::CompanySize, "Selecting a company size")?;
        if !options::is_company_size(company_size) {
            return Err(QuizError::UnknownOption {
                field: "company size",
                value: company_size.to_string(),
            });
        }
        self.profile.company_size = company_size.to_string();
        self.step = QuizStep::Location;
        Ok(())
    }

    /// Step 3: pick (or change) the state. Does not advance.
    pub fn select_state(&mut self, state: &str) -> Result<(), QuizError> {
        self.expect_step(QuizStep::Location, "Selecting a state")?;
        if !options::is_state(state) {
            return Err(QuizError::UnknownOption {
                field: "state",
                value: state.to_string(),
            });
        }
        self.profile.state = state.to_string();
        Ok(())
    }

    /// Confirm step 3 and move to the results
    pub fn generate_report(&mut self) -> Result<&ComplianceReport, QuizError> {
        self.expect_step(QuizStep::Location, "Generating the report")?;
        if self.profile.state.is_empty() {
            return Err(QuizError::StateNotSelected);
        }

        let report = ComplianceReport {
            profile: self.profile.clone(),
            items: rules::generate(&self.profile),
        };
        self.step = QuizStep::Results;
        Ok(self.report.insert(report))
    }

    /// Report shown on the results step
    pub fn report(&self) -> Option<&ComplianceReport> {
        self.report.as_ref()
    }

    /// Back to step 1 with all answers cleared
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn expect_step(&self, expected: QuizStep, action: &'static str) -> Result<(), QuizError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(QuizError::WrongStep {
                step: self.step,
                action,
            })
        }
    }
}
