pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::credentials::Credentials;
pub use models::organization_summary::OrganizationSummary;
pub use models::profile::{Profile, non_blank};
pub use models::profile_kind::ProfileKind;
pub use models::screen_identity::ScreenIdentity;
