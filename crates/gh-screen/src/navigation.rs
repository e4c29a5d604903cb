//! Click-driven actions of the profile screen.
//!
//! Actions only describe where to go next; performing the navigation is
//! up to the surrounding application.

use crate::{FollowAction, TaskOutcome};

use gh_core::{Credentials, Profile, ScreenIdentity};

use serde::Serialize;
use tokio::task::JoinHandle;

pub const NEWS_FEED_SUBTITLE: &str = "News Feed";
pub const PUBLIC_ACTIVITY_SUBTITLE: &str = "Public Activity";
pub const FOLLOWERS_SUBTITLE: &str = "Followers";
pub const FOLLOWING_SUBTITLE: &str = "Following";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenAction {
    NewsFeed,
    PublicActivity,
    YourActions,
    PublicRepos,
    WatchedRepos,
    Followers,
    Following,
    Organizations,
}

impl ScreenAction {
    pub const ALL: [ScreenAction; 8] = [
        ScreenAction::NewsFeed,
        ScreenAction::PublicActivity,
        ScreenAction::YourActions,
        ScreenAction::PublicRepos,
        ScreenAction::WatchedRepos,
        ScreenAction::Followers,
        ScreenAction::Following,
        ScreenAction::Organizations,
    ];
}

/// Next screen plus the parameters it is opened with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum NavigationTarget {
    Feed {
        login: String,
        title: String,
        subtitle: String,
    },
    PublicActivity {
        login: String,
        title: String,
        subtitle: String,
    },
    YourActions {
        login: String,
    },
    RepositoryList {
        owner: String,
        user_name: Option<String>,
    },
    WatchedRepositoryList {
        owner: String,
        user_name: Option<String>,
    },
    FollowerList {
        login: String,
        title: Option<String>,
        subtitle: String,
        find_followers: bool,
    },
    OrganizationMemberList {
        organization: String,
    },
    UserProfile {
        login: String,
    },
}

/// Result of dispatching a [`ScreenAction`]
#[derive(Debug)]
pub enum ActionOutcome {
    Navigate(NavigationTarget),
    /// The action started a fetch (organization picker)
    Started(JoinHandle<TaskOutcome>),
    /// Hidden for this subject, or the profile isn't loaded yet
    Unavailable,
}

/// Options-menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Follow,
    Unfollow,
}

impl From<MenuAction> for FollowAction {
    fn from(action: MenuAction) -> Self {
        match action {
            MenuAction::Follow => FollowAction::Follow,
            MenuAction::Unfollow => FollowAction::Unfollow,
        }
    }
}

/// Follow/unfollow is offered only to a signed-in user looking at someone else
pub fn menu_actions(credentials: &Credentials, subject: &str) -> Vec<MenuAction> {
    if credentials.is_authenticated() && !credentials.is_self(subject) {
        vec![MenuAction::Follow, MenuAction::Unfollow]
    } else {
        Vec::new()
    }
}

/// Navigation table: action to target.
///
/// `Organizations` never resolves here; it opens a picker that needs a fetch.
pub fn resolve(
    action: ScreenAction,
    identity: &ScreenIdentity,
    profile: Option<&Profile>,
    credentials: &Credentials,
) -> Option<NavigationTarget> {
    let profile = profile?;
    let login = identity.login().to_string();
    let user_name = identity.name().map(String::from);
    let is_self = credentials.is_self(identity.login());
    let is_org = profile.is_organization();

    match action {
        ScreenAction::NewsFeed if is_self => Some(NavigationTarget::Feed {
            login,
            title: identity.title(),
            subtitle: NEWS_FEED_SUBTITLE.to_string(),
        }),
        ScreenAction::PublicActivity => Some(NavigationTarget::PublicActivity {
            title: login.clone(),
            login,
            subtitle: PUBLIC_ACTIVITY_SUBTITLE.to_string(),
        }),
        ScreenAction::YourActions if is_self => Some(NavigationTarget::YourActions { login }),
        ScreenAction::PublicRepos => Some(NavigationTarget::RepositoryList {
            owner: login,
            user_name,
        }),
        ScreenAction::WatchedRepos => Some(NavigationTarget::WatchedRepositoryList {
            owner: login,
            user_name,
        }),
        ScreenAction::Followers if is_org => Some(NavigationTarget::OrganizationMemberList {
            organization: login,
        }),
        ScreenAction::Followers => Some(NavigationTarget::FollowerList {
            login,
            title: None,
            subtitle: FOLLOWERS_SUBTITLE.to_string(),
            find_followers: true,
        }),
        ScreenAction::Following if !is_org => Some(NavigationTarget::FollowerList {
            title: Some(identity.title()),
            login,
            subtitle: FOLLOWING_SUBTITLE.to_string(),
            find_followers: false,
        }),
        _ => None,
    }
}
