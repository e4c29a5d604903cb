use serde::Serialize;

/// Options-menu action on another account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowAction {
    Follow,
    Unfollow,
}

impl FollowAction {
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Follow => "follow_user",
            Self::Unfollow => "unfollow_user",
        }
    }

    pub fn success_message(&self, login: &str) -> String {
        match self {
            Self::Follow => format!("You are now following {login}"),
            Self::Unfollow => format!("You are no longer following {login}"),
        }
    }

    pub fn failure_message(&self, login: &str) -> String {
        match self {
            Self::Follow => format!("Failed to follow {login}"),
            Self::Unfollow => format!("Failed to unfollow {login}"),
        }
    }
}
