use crate::ClientResult;

use gh_core::{Credentials, OrganizationSummary, Profile};

use async_trait::async_trait;

/// Remote operations consumed by profile screens.
///
/// Credentials are bound when the implementation is constructed, so every
/// call acts on behalf of the same signed-in account.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Credentials this client acts with
    fn credentials(&self) -> &Credentials;

    /// `GET /users/{login}`
    async fn get_user(&self, login: &str) -> ClientResult<Profile>;

    /// Number of repositories `login` watches
    async fn count_watched_repositories(&self, login: &str) -> ClientResult<u64>;

    /// Number of public members of organization `login`
    async fn count_organization_members(&self, login: &str) -> ClientResult<u64>;

    /// Organizations `login` publicly belongs to
    async fn list_user_organizations(&self, login: &str)
    -> ClientResult<Vec<OrganizationSummary>>;

    /// Follow `login` as the signed-in account
    async fn follow_user(&self, login: &str) -> ClientResult<()>;

    /// Stop following `login` as the signed-in account
    async fn unfollow_user(&self, login: &str) -> ClientResult<()>;
}
