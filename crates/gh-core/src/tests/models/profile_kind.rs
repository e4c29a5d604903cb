use crate::ProfileKind;

use std::str::FromStr;

#[test]
fn test_profile_kind_as_str() {
    assert_eq!(ProfileKind::Person.as_str(), "User");
    assert_eq!(ProfileKind::Organization.as_str(), "Organization");
}

#[test]
fn test_profile_kind_from_str() {
    assert_eq!(ProfileKind::from_str("User").unwrap(), ProfileKind::Person);
    assert_eq!(ProfileKind::from_str("Bot").unwrap(), ProfileKind::Person);
    assert_eq!(
        ProfileKind::from_str("Organization").unwrap(),
        ProfileKind::Organization
    );
    assert!(ProfileKind::from_str("organization").is_err());
    assert!(ProfileKind::from_str("").is_err());
}

#[test]
fn test_profile_kind_default() {
    assert_eq!(ProfileKind::default(), ProfileKind::Person);
}

#[test]
fn test_profile_kind_serde_uses_github_vocabulary() {
    let json = serde_json::to_string(&ProfileKind::Organization).unwrap();
    assert_eq!(json, "\"Organization\"");

    let kind: ProfileKind = serde_json::from_str("\"User\"").unwrap();
    assert_eq!(kind, ProfileKind::Person);

    assert!(serde_json::from_str::<ProfileKind>("\"Enterprise\"").is_err());
}
