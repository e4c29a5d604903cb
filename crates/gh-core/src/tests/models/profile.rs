use crate::{Profile, ProfileKind, non_blank};

use serde_json::json;

#[test]
fn test_profile_deserializes_github_user_payload() {
    let profile: Profile = serde_json::from_value(json!({
        "login": "octocat",
        "id": 583231,
        "name": "The Octocat",
        "type": "User",
        "email": null,
        "blog": "https://github.blog",
        "location": "San Francisco",
        "company": "@github",
        "created_at": "2011-01-25T18:44:36Z",
        "public_repos": 8,
        "followers": 9000,
        "following": 9
    }))
    .unwrap();

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(profile.kind, ProfileKind::Person);
    assert_eq!(profile.email, None);
    assert_eq!(profile.website.as_deref(), Some("https://github.blog"));
    assert_eq!(profile.private_repos, 0);
    assert_eq!(profile.followers, 9000);
    assert_eq!(
        profile.created_at.unwrap().format("%Y-%m-%d").to_string(),
        "2011-01-25"
    );
}

#[test]
fn test_profile_deserializes_organization_payload() {
    let profile: Profile = serde_json::from_value(json!({
        "login": "github",
        "type": "Organization",
        "public_repos": 400,
        "total_private_repos": 12
    }))
    .unwrap();

    assert!(profile.is_organization());
    assert_eq!(profile.total_repos(), 412);
    assert_eq!(profile.following, 0);
}

#[test]
fn test_profile_new_defaults() {
    let profile = Profile::new("octocat", ProfileKind::Person);
    assert_eq!(profile.login, "octocat");
    assert!(!profile.is_organization());
    assert_eq!(profile.total_repos(), 0);
    assert!(profile.created_at.is_none());
}

#[test]
fn test_non_blank() {
    assert_eq!(non_blank(&None), None);
    assert_eq!(non_blank(&Some(String::new())), None);
    assert_eq!(non_blank(&Some("   ".to_string())), None);
    assert_eq!(
        non_blank(&Some("octocat@github.com".to_string())),
        Some("octocat@github.com")
    );
}
