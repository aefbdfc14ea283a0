//! Request and response bodies for the waitlist API

use serde::{Deserialize, Serialize};
use shared_types::{BusinessProfile, ComplianceItem, ComplianceReport, WaitlistEntry};

/// Body of `POST /api/waitlist`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinWaitlistRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub current_compliance_challenges: Option<String>,
}

impl JoinWaitlistRequest {
    /// `None` when the email is missing or empty
    pub fn into_entry(self) -> Option<WaitlistEntry> {
        let email = self.email.filter(|e| !e.is_empty())?;
        Some(WaitlistEntry {
            email,
            company_name: self.company_name,
            business_type: self.business_type,
            company_size: self.company_size,
            current_compliance_challenges: self.current_compliance_challenges,
            created_at: None,
        })
    }
}

/// Body of `POST /api/report`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub company_size: String,
    #[serde(default)]
    pub state: String,
}

impl From<ReportRequest> for BusinessProfile {
    fn from(req: ReportRequest) -> Self {
        BusinessProfile {
            business_type: req.business_type,
            company_size: req.company_size,
            state: req.state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub summary: String,
    pub count: usize,
    pub items: Vec<ComplianceItem>,
}

impl From<ComplianceReport> for ReportResponse {
    fn from(report: ComplianceReport) -> Self {
        Self {
            success: true,
            summary: report.summary(),
            count: report.count(),
            items: report.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_empty_email_yields_no_entry() {
        assert!(JoinWaitlistRequest::default().into_entry().is_none());

        let req = JoinWaitlistRequest {
            email: Some(String::new()),
            company_name: Some("Acme".to_string()),
            ..Default::default()
        };
        assert!(req.into_entry().is_none());
    }

    #[test]
    fn test_fields_carried_into_entry() {
        let req: JoinWaitlistRequest = serde_json::from_value(serde_json::json!({
            "email": "owner@acme.test",
            "company_name": "Acme",
            "business_type": "Healthcare",
            "company_size": "6-20 employees",
            "current_compliance_challenges": "HIPAA audits"
        }))
        .unwrap();

        let entry = req.into_entry().unwrap();
        assert_eq!(entry.email, "owner@acme.test");
        assert_eq!(entry.company_name.as_deref(), Some("Acme"));
        assert_eq!(entry.business_type.as_deref(), Some("Healthcare"));
        assert_eq!(entry.company_size.as_deref(), Some("6-20 employees"));
        assert_eq!(entry.current_compliance_challenges.as_deref(), Some("HIPAA audits"));
        assert!(entry.created_at.is_none());
    }

    #[test]
    fn test_null_email_treated_as_missing() {
        let req: JoinWaitlistRequest =
            serde_json::from_value(serde_json::json!({ "email": null })).unwrap();
        assert!(req.into_entry().is_none());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn non_empty_email_always_kept(
                email in ".+",
                company in proptest::option::of(".*"),
                size in proptest::option::of(".*"),
            ) {
                let req = JoinWaitlistRequest {
                    email: Some(email.clone()),
                    company_name: company.clone(),
                    company_size: size.clone(),
                    ..Default::default()
                };
                let entry = req.into_entry().unwrap();
                prop_assert_eq!(entry.email, email);
                prop_assert_eq!(entry.company_name, company);
                prop_assert_eq!(entry.company_size, size);
            }
        }
    }
}
