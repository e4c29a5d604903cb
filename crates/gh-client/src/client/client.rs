use crate::{ClientError, ClientResult, GitHubApi};

use gh_config::GitHubConfig;
use gh_core::{Credentials, OrganizationSummary, Profile};

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Upper bound on pages fetched while counting, so a misbehaving server
/// can't keep us paging forever.
const MAX_PAGES: u32 = 1000;

/// HTTP client for the GitHub REST API
pub struct GitHubClient {
    pub base_url: String,
    pub page_size: u32,
    credentials: Credentials,
    client: ReqwestClient,
}

impl GitHubClient {
    /// Create a new client from config.
    ///
    /// Credentials (login and token) are taken from the config and bound
    /// to this client for its whole lifetime.
    pub fn new(config: &GitHubConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ClientError::invalid_input(format!("user agent: {e}")))?,
        );

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.clamp(1, 100),
            credentials: config.credentials(),
            client,
        })
    }

    /// Build a request with the bearer token when one is configured
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.credentials.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request, turning non-2xx responses into `ClientError::Api`
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// Execute request and decode the JSON body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.send(req).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute request whose success response carries no body
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        let response = self.send(req).await?;
        debug!("{} -> {}", response.url(), response.status());
        Ok(())
    }

    /// One page of a list endpoint, plus whether more pages may follow
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
    ) -> ClientResult<(Vec<T>, bool)> {
        let req = self.request(
            Method::GET,
            &format!("{}?per_page={}&page={}", path, self.page_size, page),
        );
        let items: Vec<T> = self.execute(req).await?;
        let more = items.len() >= self.page_size as usize;
        Ok((items, more))
    }

    /// Count the entries of a paginated list endpoint.
    ///
    /// Stops at the first page shorter than `page_size`.
    async fn count_paginated(&self, path: &str) -> ClientResult<u64> {
        let mut total: u64 = 0;

        for page in 1..=MAX_PAGES {
            let (items, more) = self.fetch_page::<Value>(path, page).await?;
            total += items.len() as u64;
            if !more {
                break;
            }
        }

        debug!("{} has {} entries", path, total);
        Ok(total)
    }

    /// Collect every entry of a paginated list endpoint
    async fn collect_paginated<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        let mut all = Vec::new();

        for page in 1..=MAX_PAGES {
            let (items, more) = self.fetch_page(path, page).await?;
            all.extend(items);
            if !more {
                break;
            }
        }

        Ok(all)
    }

    /// Follow or unfollow; GitHub answers 204 on success
    async fn set_following(&self, login: &str, follow: bool) -> ClientResult<()> {
        let login = checked_login(login)?;
        if !self.credentials.is_authenticated() {
            return Err(ClientError::api_error(
                StatusCode::UNAUTHORIZED.as_u16(),
                "Requires authentication",
            ));
        }

        let method = if follow { Method::PUT } else { Method::DELETE };
        let req = self
            .request(method, &format!("/user/following/{}", login))
            .header(reqwest::header::CONTENT_LENGTH, 0);
        self.execute_empty(req).await
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn get_user(&self, login: &str) -> ClientResult<Profile> {
        let login = checked_login(login)?;
        let req = self.request(Method::GET, &format!("/users/{}", login));
        self.execute(req).await
    }

    async fn count_watched_repositories(&self, login: &str) -> ClientResult<u64> {
        let login = checked_login(login)?;
        self.count_paginated(&format!("/users/{}/subscriptions", login))
            .await
    }

    async fn count_organization_members(&self, login: &str) -> ClientResult<u64> {
        let login = checked_login(login)?;
        self.count_paginated(&format!("/orgs/{}/public_members", login))
            .await
    }

    async fn list_user_organizations(
        &self,
        login: &str,
    ) -> ClientResult<Vec<OrganizationSummary>> {
        let login = checked_login(login)?;
        self.collect_paginated(&format!("/users/{}/orgs", login))
            .await
    }

    async fn follow_user(&self, login: &str) -> ClientResult<()> {
        self.set_following(login, true).await
    }

    async fn unfollow_user(&self, login: &str) -> ClientResult<()> {
        self.set_following(login, false).await
    }
}

/// GitHub logins are ASCII alphanumerics and hyphens; anything else would
/// need escaping in the URL path and can't name a real account.
#[track_caller]
pub(crate) fn checked_login(login: &str) -> ClientResult<&str> {
    let login = login.trim();
    if login.is_empty() {
        return Err(ClientError::invalid_input("login must not be empty"));
    }
    if !login
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ClientError::invalid_input(format!(
            "login contains invalid characters: {login}"
        )));
    }
    Ok(login)
}
