//! Rule table mapping profile predicates to catalog items
//!
//! Rules are evaluated top to bottom and each one contributes at most one
//! item, so table order is output order.

use shared_types::{BusinessProfile, ComplianceItem};

use crate::catalog;

/// One entry of the rule table
pub struct Rule {
    /// Id of the item this rule contributes
    pub id: &'static str,
    pub applies: fn(&BusinessProfile) -> bool,
    pub item: fn() -> &'static ComplianceItem,
}

impl Rule {
    pub fn matches(&self, profile: &BusinessProfile) -> bool {
        (self.applies)(profile)
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        id: catalog::CTA,
        applies: always,
        item: catalog::corporate_transparency,
    },
    Rule {
        id: catalog::CA_WAGE,
        applies: is_california,
        item: catalog::california_wage,
    },
    Rule {
        id: catalog::FMLA,
        applies: has_fmla_headcount,
        item: catalog::fmla,
    },
    Rule {
        id: catalog::HIPAA,
        applies: is_healthcare,
        item: catalog::hipaa,
    },
    Rule {
        id: catalog::FOOD_SAFETY,
        applies: is_food_and_beverage,
        item: catalog::food_safety,
    },
    Rule {
        id: catalog::PAYMENT_REPORTING,
        applies: always,
        item: catalog::payment_reporting,
    },
];

fn always(_: &BusinessProfile) -> bool {
    true
}

fn is_california(profile: &BusinessProfile) -> bool {
    profile.state == "California"
}

/// Substring match so "21-50 employees" and "51+ employees" both count
fn has_fmla_headcount(profile: &BusinessProfile) -> bool {
    profile.company_size.contains("21-50") || profile.company_size.contains("51+")
}

fn is_healthcare(profile: &BusinessProfile) -> bool {
    profile.business_type == "Healthcare"
}

fn is_food_and_beverage(profile: &BusinessProfile) -> bool {
    profile.business_type == "Food & Beverage"
}

/// Build the ordered item list for a profile
pub fn generate(profile: &BusinessProfile) -> Vec<ComplianceItem> {
    RULES
        .iter()
        .filter(|rule| rule.matches(profile))
        .map(|rule| (rule.item)().clone())
        .collect()
}

/// Ids of the rules that fire for a profile
pub fn applicable_rule_ids(profile: &BusinessProfile) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| rule.matches(profile))
        .map(|rule| rule.id)
        .collect()
}
