//! View model of the profile screen.
//!
//! Regions are plain values: `Option::Some` means the region is shown.

use crate::{LOAD_ERROR_MESSAGE, ORGANIZATION_PICKER_TITLE, menu_actions, MenuAction};

use gh_core::{Credentials, Profile, non_blank};

use serde::Serialize;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d";
const ORGANIZATION_SUFFIX: &str = " (Organization)";

/// Count button with its in-place spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CountRegion {
    pub loading: bool,
    pub count: Option<u64>,
}

impl CountRegion {
    pub fn loading() -> Self {
        Self {
            loading: true,
            count: None,
        }
    }

    pub fn loaded(count: u64) -> Self {
        Self {
            loading: false,
            count: Some(count),
        }
    }

    /// Spinner hidden, nothing to show
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowersLabel {
    #[default]
    Followers,
    Members,
}

impl FollowersLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Members => "members",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// `login`, `login - name`, plus ` (Organization)` for organizations
    pub title: String,
    /// `Created at YYYY-MM-DD`, or empty when unknown
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationPicker {
    pub title: String,
    pub organizations: Vec<String>,
}

impl OrganizationPicker {
    pub fn new(organizations: Vec<String>) -> Self {
        Self {
            title: ORGANIZATION_PICKER_TITLE.to_string(),
            organizations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProfileView {
    /// Blocking loading indicator
    pub loading: bool,
    /// Screen-wide error state
    pub error: Option<String>,
    /// Transient message (follow results, empty organization list)
    pub message: Option<String>,
    pub header: Option<Header>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub news_feed_visible: bool,
    pub your_actions_visible: bool,
    pub public_repos: Option<u64>,
    pub watched_repos: CountRegion,
    pub followers: CountRegion,
    pub followers_label: FollowersLabel,
    /// Hidden (None) for organizations
    pub following: Option<u64>,
    pub organizations_visible: bool,
    pub organization_picker: Option<OrganizationPicker>,
    pub menu: Vec<MenuAction>,
}

impl ProfileView {
    /// State while the primary fetch is running
    pub fn loading(credentials: &Credentials, subject: &str) -> Self {
        Self {
            loading: true,
            watched_repos: CountRegion::loading(),
            followers: CountRegion::loading(),
            menu: menu_actions(credentials, subject),
            ..Default::default()
        }
    }

    /// Primary fetch failed: error state, nothing from the profile rendered
    pub fn failed(credentials: &Credentials, subject: &str) -> Self {
        Self {
            error: Some(LOAD_ERROR_MESSAGE.to_string()),
            menu: menu_actions(credentials, subject),
            ..Default::default()
        }
    }

    /// Populate every region from a freshly loaded profile.
    ///
    /// The watched-repo spinner stays on; so does the followers spinner for
    /// organizations, whose member count arrives separately.
    pub fn from_profile(profile: &Profile, credentials: &Credentials) -> Self {
        let is_self = credentials.is_self(&profile.login);
        let is_org = profile.is_organization();

        let mut title = match non_blank(&profile.name) {
            Some(name) => format!("{} - {}", profile.login, name),
            None => profile.login.clone(),
        };
        if is_org {
            title.push_str(ORGANIZATION_SUFFIX);
        }

        let created_at = profile
            .created_at
            .map(|at| format!("Created at {}", at.format(CREATED_AT_FORMAT)))
            .unwrap_or_default();

        Self {
            loading: false,
            error: None,
            message: None,
            header: Some(Header { title, created_at }),
            email: non_blank(&profile.email).map(String::from),
            website: non_blank(&profile.website).map(String::from),
            company: non_blank(&profile.company).map(String::from),
            location: non_blank(&profile.location).map(String::from),
            news_feed_visible: is_self,
            your_actions_visible: is_self,
            public_repos: Some(profile.total_repos()),
            watched_repos: CountRegion::loading(),
            followers: if is_org {
                CountRegion::loading()
            } else {
                CountRegion::loaded(profile.followers)
            },
            followers_label: if is_org {
                FollowersLabel::Members
            } else {
                FollowersLabel::Followers
            },
            following: (!is_org).then_some(profile.following),
            organizations_visible: !is_org,
            organization_picker: None,
            menu: menu_actions(credentials, &profile.login),
        }
    }
}
