//! gh-client
//!
//! The GitHub REST operations a profile screen needs, behind the
//! [`GitHubApi`] trait so screens can be driven by any implementation.

pub(crate) mod api;
pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use api::GitHubApi;
pub use client::{ClientError, ClientResult, GitHubClient};
