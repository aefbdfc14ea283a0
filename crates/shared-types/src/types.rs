use serde::{Deserialize, Serialize};

/// Answers collected by the compliance quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_type: String,
    pub company_size: String, // e.g. "21-50 employees"
    pub state: String,        // Full state name, e.g. "California"
}

impl BusinessProfile {
    pub fn new(business_type: &str, company_size: &str, state: &str) -> Self {
        Self {
            business_type: business_type.to_string(),
            company_size: company_size.to_string(),
            state: state.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Overdue => write!(f, "overdue"),
            ItemStatus::DueSoon => write!(f, "due_soon"),
            ItemStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

/// A pre-authored regulatory obligation shown in the quiz results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub deadline: String, // Display date, not parsed
    pub priority: Priority,
    pub status: ItemStatus,
    pub action_items: Vec<String>,
}

/// Ordered items generated for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub profile: BusinessProfile,
    pub items: Vec<ComplianceItem>,
}

impl ComplianceReport {
    /// Header line of the results dashboard
    pub fn summary(&self) -> String {
        format!(
            "Based on your {} business with {} in {}",
            self.profile.business_type, self.profile.company_size, self.profile.state
        )
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_item_serializes_with_camel_case_action_items() {
        let item = ComplianceItem {
            id: "cta".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            deadline: "January 1, 2025".to_string(),
            priority: Priority::High,
            status: ItemStatus::DueSoon,
            action_items: vec!["Do the thing".to_string()],
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["actionItems"][0], "Do the thing");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["status"], "due_soon");
    }

    #[test]
    fn test_summary_names_all_answers() {
        let report = ComplianceReport {
            profile: BusinessProfile::new("Healthcare", "6-20 employees", "Texas"),
            items: vec![],
        };
        assert_eq!(
            report.summary(),
            "Based on your Healthcare business with 6-20 employees in Texas"
        );
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn test_priority_display_matches_wire_name() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "high");
    }
}
