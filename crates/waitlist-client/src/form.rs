//! Signup form state

use std::str::FromStr;

use shared_types::WaitlistEntry;

use crate::error::ClientError;

/// Input names, as they appear in the form markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    CompanyName,
    BusinessType,
    CompanySize,
    CurrentComplianceChallenges,
}

impl FromStr for FormField {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(FormField::Email),
            "company_name" => Ok(FormField::CompanyName),
            "business_type" => Ok(FormField::BusinessType),
            "company_size" => Ok(FormField::CompanySize),
            "current_compliance_challenges" => Ok(FormField::CurrentComplianceChallenges),
            other => Err(ClientError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub email: String,
    pub company_name: String,
    pub business_type: String,
    pub company_size: String,
    pub current_compliance_challenges: String,
    submitted: bool,
}

impl WaitlistForm {
    /// Update one input by name
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ClientError> {
        let slot = match name.parse::<FormField>()? {
            FormField::Email => &mut self.email,
            FormField::CompanyName => &mut self.company_name,
            FormField::BusinessType => &mut self.business_type,
            FormField::CompanySize => &mut self.company_size,
            FormField::CurrentComplianceChallenges => &mut self.current_compliance_challenges,
        };
        *slot = value.into();
        Ok(())
    }

    /// Email is the only required input
    pub fn can_submit(&self) -> bool {
        !self.submitted && !self.email.is_empty()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub(crate) fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Entry to send; blank optional inputs are left out
    pub fn to_entry(&self) -> Result<WaitlistEntry, ClientError> {
        if self.email.is_empty() {
            return Err(ClientError::EmailRequired);
        }

        let optional = |value: &str| (!value.trim().is_empty()).then(|| value.to_string());
        Ok(WaitlistEntry {
            email: self.email.clone(),
            company_name: optional(&self.company_name),
            business_type: optional(&self.business_type),
            company_size: optional(&self.company_size),
            current_compliance_challenges: optional(&self.current_compliance_challenges),
            created_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_field_by_input_name() {
        let mut form = WaitlistForm::default();
        form.set_field("email", "owner@acme.test").unwrap();
        form.set_field("business_type", "Healthcare").unwrap();
        form.set_field("current_compliance_challenges", "Tracking renewals").unwrap();

        assert_eq!(form.email, "owner@acme.test");
        assert_eq!(form.business_type, "Healthcare");
        assert_eq!(form.current_compliance_challenges, "Tracking renewals");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = WaitlistForm::default();
        let err = form.set_field("phone", "555-0100").unwrap_err();
        assert!(matches!(err, ClientError::UnknownField(name) if name == "phone"));
        assert_eq!(form, WaitlistForm::default());
    }

    #[test]
    fn test_email_required_to_submit() {
        let mut form = WaitlistForm::default();
        form.set_field("company_name", "Acme").unwrap();
        assert!(!form.can_submit());
        assert!(matches!(form.to_entry(), Err(ClientError::EmailRequired)));

        form.set_field("email", "owner@acme.test").unwrap();
        assert!(form.can_submit());
    }

    #[test]
    fn test_blank_optional_fields_omitted() {
        let mut form = WaitlistForm::default();
        form.set_field("email", "owner@acme.test").unwrap();
        form.set_field("company_name", "  ").unwrap();
        form.set_field("company_size", "51+ employees").unwrap();

        let entry = form.to_entry().unwrap();
        assert_eq!(entry.company_name, None);
        assert_eq!(entry.company_size.as_deref(), Some("51+ employees"));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({ "email": "owner@acme.test", "company_size": "51+ employees" })
        );
    }

    #[test]
    fn test_submitted_form_cannot_submit_again() {
        let mut form = WaitlistForm::default();
        form.set_field("email", "owner@acme.test").unwrap();
        form.mark_submitted();
        assert!(form.is_submitted());
        assert!(!form.can_submit());
    }
}
