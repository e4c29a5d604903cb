pub(crate) mod client;
pub(crate) mod error;

pub use client::GitHubClient;
pub use error::{ClientError, Result as ClientResult};
