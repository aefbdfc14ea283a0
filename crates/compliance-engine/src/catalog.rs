//! Pre-authored compliance items
//!
//! Every item the quiz can show is written out here. The generator only
//! selects and orders them; field values are never altered.

use lazy_static::lazy_static;
use shared_types::{ComplianceItem, ItemStatus, Priority};

pub const CTA: &str = "cta";
pub const CA_WAGE: &str = "ca_wage";
pub const FMLA: &str = "fmla";
pub const HIPAA: &str = "hipaa";
pub const FOOD_SAFETY: &str = "food_safety";
pub const PAYMENT_REPORTING: &str = "payment_reporting";

lazy_static! {
    /// FinCEN beneficial ownership reporting, applies to most small businesses
    static ref CORPORATE_TRANSPARENCY_ITEM: ComplianceItem = item(
        CTA,
        "Corporate Transparency Act Reporting",
        "File beneficial ownership information with FinCEN",
        "January 1, 2025",
        Priority::High,
        ItemStatus::Overdue,
        &[
            "Identify all beneficial owners (25%+ ownership)",
            "Collect required personal information and documents",
            "File BOI report through FinCEN website",
            "Set up annual update reminders",
        ],
    );

    static ref CA_WAGE_ITEM: ComplianceItem = item(
        CA_WAGE,
        "California Wage & Hour Compliance",
        "Update wage policies for 2025 minimum wage increases",
        "January 1, 2025",
        Priority::High,
        ItemStatus::DueSoon,
        &[
            "Update minimum wage to $16.50/hour",
            "Review overtime calculation methods",
            "Update employee handbooks",
            "Post new wage notices in workplace",
        ],
    );

    static ref FMLA_ITEM: ComplianceItem = item(
        FMLA,
        "FMLA Compliance Review",
        "Ensure Family Medical Leave Act compliance for eligible employees",
        "March 15, 2025",
        Priority::Medium,
        ItemStatus::Upcoming,
        &[
            "Review employee eligibility criteria",
            "Update FMLA policies and procedures",
            "Train managers on FMLA requirements",
            "Post required FMLA notices",
        ],
    );

    static ref HIPAA_ITEM: ComplianceItem = item(
        HIPAA,
        "HIPAA Security Assessment",
        "Annual review of patient data protection measures",
        "April 30, 2025",
        Priority::High,
        ItemStatus::Upcoming,
        &[
            "Conduct risk assessment of PHI handling",
            "Review business associate agreements",
            "Update security policies and procedures",
            "Train staff on privacy requirements",
        ],
    );

    static ref FOOD_SAFETY_ITEM: ComplianceItem = item(
        FOOD_SAFETY,
        "Food Safety Modernization Act Compliance",
        "Update food safety plans and training records",
        "February 28, 2025",
        Priority::High,
        ItemStatus::DueSoon,
        &[
            "Review and update HACCP plans",
            "Conduct supplier verification activities",
            "Update employee food safety training",
            "Schedule facility inspection",
        ],
    );

    /// 1099-K thresholds, applies to most businesses
    static ref PAYMENT_REPORTING_ITEM: ComplianceItem = item(
        PAYMENT_REPORTING,
        "1099-K Payment Platform Reporting",
        "New thresholds for payment platform transaction reporting",
        "January 31, 2025",
        Priority::Medium,
        ItemStatus::DueSoon,
        &[
            "Review payment platform transactions",
            "Reconcile 1099-K forms received",
            "Update accounting records",
            "Prepare for tax filing requirements",
        ],
    );
}

fn item(
    id: &str,
    title: &str,
    description: &str,
    deadline: &str,
    priority: Priority,
    status: ItemStatus,
    action_items: &[&str],
) -> ComplianceItem {
    ComplianceItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        priority,
        status,
        action_items: action_items.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn corporate_transparency() -> &'static ComplianceItem {
    &CORPORATE_TRANSPARENCY_ITEM
}

pub fn california_wage() -> &'static ComplianceItem {
    &CA_WAGE_ITEM
}

pub fn fmla() -> &'static ComplianceItem {
    &FMLA_ITEM
}

pub fn hipaa() -> &'static ComplianceItem {
    &HIPAA_ITEM
}

pub fn food_safety() -> &'static ComplianceItem {
    &FOOD_SAFETY_ITEM
}

pub fn payment_reporting() -> &'static ComplianceItem {
    &PAYMENT_REPORTING_ITEM
}

/// Every catalog item, in generator order
pub fn all_items() -> Vec<&'static ComplianceItem> {
    vec![
        corporate_transparency(),
        california_wage(),
        fmla(),
        hipaa(),
        food_safety(),
        payment_reporting(),
    ]
}

/// Look up an item by id
pub fn find(id: &str) -> Option<&'static ComplianceItem> {
    all_items().into_iter().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), all_items().len());
    }

    #[test]
    fn test_every_item_has_four_action_items() {
        for item in all_items() {
            assert_eq!(item.action_items.len(), 4, "item {}", item.id);
        }
    }

    #[test]
    fn test_cta_is_overdue_and_high_priority() {
        let cta = corporate_transparency();
        assert_eq!(cta.priority, Priority::High);
        assert_eq!(cta.status, ItemStatus::Overdue);
        assert_eq!(cta.deadline, "January 1, 2025");
    }

    #[test]
    fn test_find_by_id() {
        assert_eq!(find(HIPAA).map(|i| i.title.as_str()), Some("HIPAA Security Assessment"));
        assert!(find("osha").is_none());
    }
}
