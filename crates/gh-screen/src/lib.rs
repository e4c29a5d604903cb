//! Profile screen core.
//!
//! A screen launches background fetches against the GitHub API and
//! reconciles their results into a view model on a single interactive
//! executor. Fetches hold only a weak reference to their screen and are
//! bound to the screen's lifecycle scope.

pub mod error;
pub mod fetch_task;
pub mod follow_action;
pub mod navigation;
pub mod profile_view;
pub mod scope_guard;
pub mod screen_scope;
pub mod ui_executor;
pub mod user_screen;

#[cfg(test)]
mod tests;

pub use error::{FetchError, Result as FetchResult};
pub use fetch_task::{FetchTask, TaskOutcome};
pub use follow_action::FollowAction;
pub use navigation::{ActionOutcome, MenuAction, NavigationTarget, ScreenAction, menu_actions};
pub use profile_view::{CountRegion, FollowersLabel, Header, OrganizationPicker, ProfileView};
pub use scope_guard::ScopeGuard;
pub use screen_scope::{ScreenScope, TaskTicket};
pub use ui_executor::{UiExecutor, UiHandle, UiJob};
pub use user_screen::{UserScreen, UserScreenHandle};

/// Screen-wide error text; failures carry no detail beyond the log
pub const LOAD_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";
pub const NO_ORGANIZATIONS_MESSAGE: &str = "No Organizations found";
pub const ORGANIZATION_PICKER_TITLE: &str = "Choose Organization";
