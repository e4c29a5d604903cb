//! Profile entity - the user or organization shown on a profile screen.

use crate::ProfileKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account as returned by `GET /users/{login}`.
///
/// Screens hold it behind an `Arc` and swap it wholesale on reload;
/// nothing mutates a loaded profile in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ProfileKind,
    #[serde(default)]
    pub email: Option<String>,
    /// GitHub calls this field `blog`
    #[serde(rename = "blog", default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub public_repos: u64,
    /// Only reported for the authenticated account
    #[serde(rename = "total_private_repos", default)]
    pub private_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

impl Profile {
    /// Create a profile with only the identifying fields set
    pub fn new(login: impl Into<String>, kind: ProfileKind) -> Self {
        Self {
            login: login.into(),
            name: None,
            kind,
            email: None,
            website: None,
            location: None,
            company: None,
            created_at: None,
            public_repos: 0,
            private_repos: 0,
            followers: 0,
            following: 0,
        }
    }

    pub fn is_organization(&self) -> bool {
        self.kind.is_organization()
    }

    /// Public plus private repositories
    pub fn total_repos(&self) -> u64 {
        self.public_repos.saturating_add(self.private_repos)
    }
}

/// Returns the value only when it contains something other than whitespace.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
