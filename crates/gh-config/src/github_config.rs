use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_PAGE_SIZE, MAX_TIMEOUT_SECS, MIN_PAGE_SIZE, MIN_TIMEOUT_SECS,
};

use gh_core::Credentials;

use std::time::Duration;

use serde::Deserialize;

/// Settings for talking to the GitHub REST API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API (GitHub Enterprise uses `https://host/api/v3`)
    pub api_url: String,
    /// Signed-in login, used to tell the own profile apart from others
    pub login: Option<String>,
    /// Personal access token. Never logged.
    pub token: Option<String>,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// `per_page` used when counting paginated lists
    pub page_size: u32,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            login: None,
            token: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GitHubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::github(format!(
                "github.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::github(format!(
                "github.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::github(format!(
                "github.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::github("github.user_agent must not be empty"));
        }

        if let Some(ref token) = self.token
            && token.trim().is_empty()
        {
            return Err(ConfigError::github(
                "github.token must not be empty when set",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.login.clone(), self.token.clone())
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("api_url", &self.api_url)
            .field("login", &self.login)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}
