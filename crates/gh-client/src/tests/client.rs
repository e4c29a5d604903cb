use crate::GitHubApi;
use crate::client::client::checked_login;
use crate::GitHubClient;

use gh_config::GitHubConfig;

fn config(api_url: &str) -> GitHubConfig {
    GitHubConfig {
        api_url: api_url.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = GitHubClient::new(&config("https://api.github.com/")).unwrap();
    assert_eq!(client.base_url, "https://api.github.com");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = GitHubClient::new(&config("https://api.github.com")).unwrap();
    assert_eq!(client.base_url, "https://api.github.com");
}

#[test]
fn test_credentials_bound_from_config() {
    let client = GitHubClient::new(&GitHubConfig {
        login: Some("octocat".to_string()),
        token: Some("ghp_token".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert!(client.credentials().is_authenticated());
    assert!(client.credentials().is_self("octocat"));
}

#[test]
fn test_anonymous_client() {
    let client = GitHubClient::new(&GitHubConfig::default()).unwrap();
    assert!(!client.credentials().is_authenticated());
}

#[test]
fn test_invalid_user_agent_rejected() {
    let result = GitHubClient::new(&GitHubConfig {
        user_agent: "bad\nagent".to_string(),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_checked_login() {
    assert_eq!(checked_login(" octocat ").unwrap(), "octocat");
    assert_eq!(checked_login("my-org").unwrap(), "my-org");
    assert!(checked_login("").is_err());
    assert!(checked_login("../admin").is_err());
    assert!(checked_login("octo cat").is_err());
    assert!(checked_login("..").is_err());
    assert!(checked_login(".").is_err());
    assert!(checked_login("octo.cat").is_err());
    assert!(checked_login("octo_cat").is_err());
}
