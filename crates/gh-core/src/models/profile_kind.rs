use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Whether a GitHub account is a person or an organization.
///
/// Serialized with GitHub's `type` vocabulary ("User" / "Organization").
/// Bot accounts behave like persons on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum ProfileKind {
    #[default]
    Person,
    Organization,
}

impl ProfileKind {
    /// GitHub wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "User",
            Self::Organization => "Organization",
        }
    }

    pub fn is_organization(&self) -> bool {
        *self == Self::Organization
    }
}

impl FromStr for ProfileKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "User" | "Bot" => Ok(Self::Person),
            "Organization" => Ok(Self::Organization),
            _ => Err(CoreError::InvalidProfileKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl TryFrom<String> for ProfileKind {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        value.parse()
    }
}

impl From<ProfileKind> for String {
    fn from(kind: ProfileKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
