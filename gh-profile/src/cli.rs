use gh_screen::{FollowAction, ScreenAction};

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gh-profile")]
#[command(about = "Show a GitHub user or organization profile")]
#[command(version)]
pub struct Cli {
    /// Login of the user or organization to show
    pub login: String,

    /// Display name already known for the account
    #[arg(long)]
    pub name: Option<String>,

    /// Screen action to perform once the profile is loaded
    #[arg(long, value_enum)]
    pub action: Option<ActionArg>,

    /// Organization to open from the organization picker
    #[arg(long, requires = "action")]
    pub select: Option<String>,

    /// Follow the account as the configured user
    #[arg(long, conflicts_with = "unfollow")]
    pub follow: bool,

    /// Stop following the account as the configured user
    #[arg(long)]
    pub unfollow: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn follow_action(&self) -> Option<FollowAction> {
        if self.follow {
            Some(FollowAction::Follow)
        } else if self.unfollow {
            Some(FollowAction::Unfollow)
        } else {
            None
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionArg {
    NewsFeed,
    PublicActivity,
    YourActions,
    PublicRepos,
    WatchedRepos,
    Followers,
    Following,
    Organizations,
}

impl From<ActionArg> for ScreenAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::NewsFeed => ScreenAction::NewsFeed,
            ActionArg::PublicActivity => ScreenAction::PublicActivity,
            ActionArg::YourActions => ScreenAction::YourActions,
            ActionArg::PublicRepos => ScreenAction::PublicRepos,
            ActionArg::WatchedRepos => ScreenAction::WatchedRepos,
            ActionArg::Followers => ScreenAction::Followers,
            ActionArg::Following => ScreenAction::Following,
            ActionArg::Organizations => ScreenAction::Organizations,
        }
    }
}
