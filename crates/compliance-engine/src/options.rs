//! Answer choices offered by each quiz step

use serde::Serialize;

/// Step 1 choices
pub const BUSINESS_TYPES: &[&str] = &[
    "Technology/Software",
    "Retail/E-commerce",
    "Professional Services",
    "Healthcare",
    "Food & Beverage",
    "Manufacturing",
    "Construction",
    "Other",
];

/// Step 2 choices
pub const COMPANY_SIZES: &[&str] = &[
    "1-5 employees",
    "6-20 employees",
    "21-50 employees",
    "51+ employees",
];

/// Step 3 choices
pub const STATES: &[&str] = &[
    "California",
    "Texas",
    "Florida",
    "New York",
    "Illinois",
    "Pennsylvania",
    "Ohio",
    "Georgia",
    "North Carolina",
    "Michigan",
    "Other",
];

/// All three choice lists, as served to the quiz front end
#[derive(Debug, Clone, Serialize)]
pub struct QuizOptions {
    pub business_types: &'static [&'static str],
    pub company_sizes: &'static [&'static str],
    pub states: &'static [&'static str],
}

pub fn quiz_options() -> QuizOptions {
    QuizOptions {
        business_types: BUSINESS_TYPES,
        company_sizes: COMPANY_SIZES,
        states: STATES,
    }
}

pub fn is_business_type(value: &str) -> bool {
    BUSINESS_TYPES.contains(&value)
}

pub fn is_company_size(value: &str) -> bool {
    COMPANY_SIZES.contains(&value)
}

pub fn is_state(value: &str) -> bool {
    STATES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_end_with_other_where_offered() {
        assert_eq!(BUSINESS_TYPES.last(), Some(&"Other"));
        assert_eq!(STATES.last(), Some(&"Other"));
    }

    #[test]
    fn test_membership_is_exact() {
        assert!(is_business_type("Food & Beverage"));
        assert!(!is_business_type("food & beverage"));
        assert!(is_company_size("51+ employees"));
        assert!(!is_company_size("51+"));
        assert!(is_state("North Carolina"));
        assert!(!is_state("CA"));
    }
}
