//! gh-profile - GitHub profile screen, headless
//!
//! # Examples
//!
//! ```bash
//! # Show a profile
//! gh-profile octocat --pretty
//!
//! # Open the organization picker and pick one
//! gh-profile octocat --action organizations --select github
//!
//! # Follow someone (needs GH_PROFILE_LOGIN and GH_PROFILE_TOKEN)
//! gh-profile octocat --follow
//! ```

use gh_profile::{Cli, ProfileError, ProfileResult, Report, SessionRequest, logger};

use gh_client::{GitHubApi, GitHubClient};
use gh_core::ScreenIdentity;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let report = match run(&cli).await {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            if report.view.error.is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> ProfileResult<Report> {
    // Load and validate configuration
    let config = gh_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir).map_err(|source| ProfileError::LogDir {
            path: dir.display().to_string(),
            source,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path.as_deref())?;

    info!("Starting gh-profile v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let api: Arc<dyn GitHubApi> = Arc::new(GitHubClient::new(&config.github)?);
    let identity = ScreenIdentity::new(cli.login.as_str(), cli.name.clone())?;

    gh_profile::run(api, identity, SessionRequest::from(cli)).await
}
