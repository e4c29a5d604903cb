pub mod credentials;
pub mod organization_summary;
pub mod profile;
pub mod profile_kind;
pub mod screen_identity;
