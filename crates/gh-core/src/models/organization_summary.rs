use serde::{Deserialize, Serialize};

/// An organization the subject account belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub login: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl OrganizationSummary {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            description: None,
        }
    }
}
