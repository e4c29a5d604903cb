//! One headless pass over a profile screen: load it, optionally act on it,
//! and report what the screen ended up showing.

use crate::cli::Cli;
use crate::error::{ProfileError, Result as ProfileErrorResult};

use gh_client::GitHubApi;
use gh_core::ScreenIdentity;
use gh_screen::{
    ActionOutcome, FollowAction, NavigationTarget, ProfileView, ScreenAction, UiExecutor,
    UserScreen, UserScreenHandle,
};

use std::sync::Arc;

use log::info;
use serde::Serialize;

/// What the screen showed when the session finished
#[derive(Debug, Serialize)]
pub struct Report {
    pub login: String,
    pub view: ProfileView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationTarget>,
}

/// Requests applied to the screen after the initial load
#[derive(Debug, Clone, Default)]
pub struct SessionRequest {
    pub follow: Option<FollowAction>,
    pub action: Option<ScreenAction>,
    pub select: Option<String>,
}

impl From<&Cli> for SessionRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            follow: cli.follow_action(),
            action: cli.action.map(ScreenAction::from),
            select: cli.select.clone(),
        }
    }
}

pub async fn run(
    api: Arc<dyn GitHubApi>,
    identity: ScreenIdentity,
    request: SessionRequest,
) -> ProfileErrorResult<Report> {
    let mut executor = UiExecutor::new();
    let screen = UserScreen::open(api, executor.handle(), identity);
    settle(&mut executor, &screen).await;

    if let Some(follow) = request.follow {
        let started = screen.lock().follow(follow);
        if started.is_none() {
            return Err(unavailable(format!(
                "{:?} requires a configured login and token for another account",
                follow
            )));
        }
        settle(&mut executor, &screen).await;
    }

    let mut navigation = None;
    if let Some(action) = request.action {
        let outcome = screen.lock().dispatch(action);
        match outcome {
            ActionOutcome::Navigate(target) => navigation = Some(target),
            ActionOutcome::Started(_) => settle(&mut executor, &screen).await,
            ActionOutcome::Unavailable => {
                return Err(unavailable(format!("{:?} is not available here", action)));
            }
        }
    }

    if let Some(ref organization) = request.select {
        navigation = screen.lock().select_organization(organization);
        if navigation.is_none() {
            return Err(unavailable(format!(
                "{} is not one of the listed organizations",
                organization
            )));
        }
    }

    let report = {
        let screen = screen.lock();
        Report {
            login: screen.identity().login().to_string(),
            view: screen.view().clone(),
            navigation,
        }
    };
    screen.close();

    Ok(report)
}

async fn settle(executor: &mut UiExecutor, screen: &UserScreenHandle) {
    executor.run_until_idle(screen.scope()).await;
    info!("Screen settled");
}

fn unavailable(message: String) -> ProfileError {
    ProfileError::Unavailable { message }
}
