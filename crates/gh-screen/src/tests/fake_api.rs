//! In-memory [`GitHubApi`] with per-operation call counters and gates.

use gh_client::{ClientError, ClientResult, GitHubApi};
use gh_core::{Credentials, OrganizationSummary, Profile, ProfileKind};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

pub const GET_USER: &str = "get_user";
pub const COUNT_WATCHED: &str = "count_watched_repositories";
pub const COUNT_MEMBERS: &str = "count_organization_members";
pub const LIST_ORGANIZATIONS: &str = "list_user_organizations";
pub const FOLLOW: &str = "follow_user";
pub const UNFOLLOW: &str = "unfollow_user";

/// `None` results make the operation fail.
pub struct FakeGitHub {
    credentials: Credentials,
    profile: Mutex<Option<Profile>>,
    watched: Option<u64>,
    members: Option<u64>,
    organizations: Option<Vec<OrganizationSummary>>,
    follow_succeeds: bool,
    calls: Mutex<HashMap<&'static str, usize>>,
    gates: Mutex<HashMap<&'static str, Arc<Semaphore>>>,
}

impl FakeGitHub {
    pub fn new(profile: Option<Profile>) -> Self {
        Self {
            credentials: Credentials::anonymous(),
            profile: Mutex::new(profile),
            watched: Some(3),
            members: Some(12),
            organizations: Some(Vec::new()),
            follow_succeeds: true,
            calls: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn signed_in_as(mut self, login: &str) -> Self {
        self.credentials = Credentials::new(Some(login.to_string()), Some("t0ken".to_string()));
        self
    }

    pub fn with_watched(mut self, watched: Option<u64>) -> Self {
        self.watched = watched;
        self
    }

    pub fn with_members(mut self, members: Option<u64>) -> Self {
        self.members = members;
        self
    }

    pub fn with_organizations(mut self, organizations: Option<Vec<&str>>) -> Self {
        self.organizations = organizations
            .map(|logins| logins.into_iter().map(OrganizationSummary::new).collect());
        self
    }

    pub fn with_follow_failing(mut self) -> Self {
        self.follow_succeeds = false;
        self
    }

    /// Block `operation` until [`FakeGitHub::release`] lets calls through
    pub fn hold(self, operation: &'static str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(operation, Arc::new(Semaphore::new(0)));
        self
    }

    /// Let `count` held calls of `operation` complete
    pub fn release(&self, operation: &'static str, count: usize) {
        if let Some(gate) = self.gates.lock().unwrap().get(operation) {
            gate.add_permits(count);
        }
    }

    pub fn set_profile(&self, profile: Option<Profile>) {
        *self.profile.lock().unwrap() = profile;
    }

    pub fn calls(&self, operation: &'static str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    async fn enter(&self, operation: &'static str) {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;

        let gate = self.gates.lock().unwrap().get(operation).cloned();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}

fn server_error() -> ClientError {
    ClientError::api_error(500, "Internal Server Error")
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn get_user(&self, _login: &str) -> ClientResult<Profile> {
        self.enter(GET_USER).await;
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::api_error(404, "Not Found"))
    }

    async fn count_watched_repositories(&self, _login: &str) -> ClientResult<u64> {
        self.enter(COUNT_WATCHED).await;
        self.watched.ok_or_else(server_error)
    }

    async fn count_organization_members(&self, _login: &str) -> ClientResult<u64> {
        self.enter(COUNT_MEMBERS).await;
        self.members.ok_or_else(server_error)
    }

    async fn list_user_organizations(
        &self,
        _login: &str,
    ) -> ClientResult<Vec<OrganizationSummary>> {
        self.enter(LIST_ORGANIZATIONS).await;
        self.organizations.clone().ok_or_else(server_error)
    }

    async fn follow_user(&self, _login: &str) -> ClientResult<()> {
        self.enter(FOLLOW).await;
        if self.follow_succeeds {
            Ok(())
        } else {
            Err(ClientError::api_error(403, "Forbidden"))
        }
    }

    async fn unfollow_user(&self, _login: &str) -> ClientResult<()> {
        self.enter(UNFOLLOW).await;
        if self.follow_succeeds {
            Ok(())
        } else {
            Err(ClientError::api_error(403, "Forbidden"))
        }
    }
}

pub fn person(login: &str) -> Profile {
    let mut profile = Profile::new(login, ProfileKind::Person);
    profile.name = Some("The Octocat".to_string());
    profile.public_repos = 8;
    profile.private_repos = 2;
    profile.followers = 9000;
    profile.following = 9;
    profile
}

pub fn organization(login: &str) -> Profile {
    let mut profile = Profile::new(login, ProfileKind::Organization);
    profile.public_repos = 300;
    profile
}
