use crate::fetch_task::lock;
use crate::navigation::resolve;
use crate::{
    ActionOutcome, FetchTask, FollowAction, LOAD_ERROR_MESSAGE, NO_ORGANIZATIONS_MESSAGE,
    NavigationTarget, OrganizationPicker, ProfileView, ScreenAction, ScreenScope, TaskOutcome,
    UiHandle,
};

use gh_client::GitHubApi;
use gh_core::{Profile, ScreenIdentity};

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use log::{debug, info, warn};
use tokio::task::JoinHandle;

const GET_USER: &str = "get_user";
const COUNT_WATCHED: &str = "count_watched_repositories";
const COUNT_MEMBERS: &str = "count_organization_members";
const LIST_ORGANIZATIONS: &str = "list_user_organizations";

/// Profile screen controller for one user or organization.
///
/// Lives behind `Arc<Mutex<_>>` owned by a [`UserScreenHandle`]; fetch tasks
/// only ever see a `Weak` to it. Every method runs on the interactive thread.
pub struct UserScreen {
    identity: ScreenIdentity,
    api: Arc<dyn GitHubApi>,
    ui: UiHandle,
    scope: ScreenScope,
    this: Weak<Mutex<UserScreen>>,
    profile: Option<Arc<Profile>>,
    view: ProfileView,
    /// Bumped on every (re)load so results of an older load are ignored
    generation: u64,
    /// Blocking fetches in flight; the loading indicator shows while nonzero
    blocking: usize,
}

impl UserScreen {
    /// Create the screen and launch its primary fetch.
    ///
    /// Must be called from within a tokio runtime, on the interactive thread.
    pub fn open(
        api: Arc<dyn GitHubApi>,
        ui: UiHandle,
        identity: ScreenIdentity,
    ) -> UserScreenHandle {
        let scope = ScreenScope::new();
        let view = ProfileView::loading(api.credentials(), identity.login());

        let screen = Arc::new_cyclic(|this| {
            Mutex::new(UserScreen {
                identity,
                api,
                ui,
                scope: scope.clone(),
                this: this.clone(),
                profile: None,
                view,
                generation: 0,
                blocking: 0,
            })
        });

        let primary = lock(&screen).load();
        info!("Opened profile screen for {}", lock(&screen).identity.login());

        UserScreenHandle {
            screen,
            scope,
            primary: Some(primary),
        }
    }

    pub fn identity(&self) -> &ScreenIdentity {
        &self.identity
    }

    pub fn view(&self) -> &ProfileView {
        &self.view
    }

    pub fn profile(&self) -> Option<Arc<Profile>> {
        self.profile.clone()
    }

    fn begin_blocking(&mut self) {
        self.blocking += 1;
        self.view.loading = true;
    }

    fn end_blocking(&mut self) {
        self.blocking = self.blocking.saturating_sub(1);
        self.view.loading = self.blocking > 0;
    }

    fn task(&self, operation: &'static str) -> FetchTask<UserScreen> {
        FetchTask::new(
            operation,
            self.this.clone(),
            self.ui.clone(),
            self.scope.clone(),
        )
    }

    /// Primary fetch. On success the whole profile is swapped in and the
    /// secondary counts start; on failure the screen shows its error state.
    fn load(&mut self) -> JoinHandle<TaskOutcome> {
        self.generation += 1;
        let generation = self.generation;
        let api = Arc::clone(&self.api);
        let login = self.identity.login().to_string();

        self.task(GET_USER).start(
            self,
            |screen| {
                screen.view =
                    ProfileView::loading(screen.api.credentials(), screen.identity.login());
                screen.begin_blocking();
            },
            async move { api.get_user(&login).await },
            move |screen, result| {
                screen.end_blocking();
                if screen.generation != generation {
                    return false;
                }

                match result {
                    Ok(profile) => {
                        let profile = Arc::new(profile);
                        screen.view = ProfileView::from_profile(&profile, screen.api.credentials());
                        screen.profile = Some(Arc::clone(&profile));
                        screen.start_secondary_fetches(&profile);
                    }
                    Err(_) => {
                        screen.profile = None;
                        screen.view =
                            ProfileView::failed(screen.api.credentials(), screen.identity.login());
                    }
                }
                screen.view.loading = screen.blocking > 0;
                true
            },
        )
    }

    fn start_secondary_fetches(&mut self, profile: &Profile) {
        self.load_watched_count();
        if profile.is_organization() {
            self.load_member_count();
        }
    }

    /// Failure is silent: the spinner goes away and no count is shown.
    fn load_watched_count(&mut self) -> JoinHandle<TaskOutcome> {
        let generation = self.generation;
        let api = Arc::clone(&self.api);
        let login = self.identity.login().to_string();

        self.task(COUNT_WATCHED).start(
            self,
            |screen| screen.view.watched_repos.loading = true,
            async move { api.count_watched_repositories(&login).await },
            move |screen, result| {
                if screen.generation != generation {
                    return false;
                }
                screen.view.watched_repos.loading = false;
                screen.view.watched_repos.count = result.ok();
                true
            },
        )
    }

    /// Organization member count fills the followers region. Failure is silent.
    fn load_member_count(&mut self) -> JoinHandle<TaskOutcome> {
        let generation = self.generation;
        let api = Arc::clone(&self.api);
        let login = self.identity.login().to_string();

        self.task(COUNT_MEMBERS).start(
            self,
            |screen| screen.view.followers.loading = true,
            async move { api.count_organization_members(&login).await },
            move |screen, result| {
                if screen.generation != generation {
                    return false;
                }
                screen.view.followers.loading = false;
                screen.view.followers.count = result.ok();
                true
            },
        )
    }

    /// Organization picker for a person's profile
    fn load_organizations(&mut self) -> JoinHandle<TaskOutcome> {
        let api = Arc::clone(&self.api);
        let login = self.identity.login().to_string();

        self.task(LIST_ORGANIZATIONS).start(
            self,
            |screen| {
                screen.begin_blocking();
                screen.view.organization_picker = None;
            },
            async move { api.list_user_organizations(&login).await },
            |screen, result| {
                screen.end_blocking();
                match result {
                    Ok(organizations) if organizations.is_empty() => {
                        screen.view.message = Some(NO_ORGANIZATIONS_MESSAGE.to_string());
                    }
                    Ok(organizations) => {
                        let logins = organizations.into_iter().map(|org| org.login).collect();
                        screen.view.organization_picker = Some(OrganizationPicker::new(logins));
                    }
                    Err(_) => {
                        screen.view.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    }
                }
                true
            },
        )
    }

    /// Handle a click on one of the screen's buttons
    pub fn dispatch(&mut self, action: ScreenAction) -> ActionOutcome {
        if action == ScreenAction::Organizations {
            return match self.profile.as_deref() {
                Some(profile) if !profile.is_organization() => {
                    ActionOutcome::Started(self.load_organizations())
                }
                _ => ActionOutcome::Unavailable,
            };
        }

        let credentials = self.api.credentials();
        match resolve(action, &self.identity, self.profile.as_deref(), credentials) {
            Some(target) => {
                debug!("{:?} -> {:?}", action, target);
                ActionOutcome::Navigate(target)
            }
            None => {
                debug!("{:?} unavailable for {}", action, self.identity.login());
                ActionOutcome::Unavailable
            }
        }
    }

    /// Pick an organization from the open picker
    pub fn select_organization(&mut self, login: &str) -> Option<NavigationTarget> {
        let picker = self.view.organization_picker.take()?;
        if !picker.organizations.iter().any(|org| org == login) {
            warn!("{} is not in the organization picker", login);
            self.view.organization_picker = Some(picker);
            return None;
        }

        Some(NavigationTarget::UserProfile {
            login: login.to_string(),
        })
    }

    /// Follow or unfollow the subject. None when the menu doesn't offer it.
    pub fn follow(&mut self, action: FollowAction) -> Option<JoinHandle<TaskOutcome>> {
        if !self
            .view
            .menu
            .iter()
            .any(|entry| FollowAction::from(*entry) == action)
        {
            warn!("{:?} not available for {}", action, self.identity.login());
            return None;
        }

        let api = Arc::clone(&self.api);
        let login = self.identity.login().to_string();

        let handle = self.task(action.operation()).start(
            self,
            |screen| {
                screen.begin_blocking();
                screen.view.message = None;
            },
            async move {
                match action {
                    FollowAction::Follow => api.follow_user(&login).await,
                    FollowAction::Unfollow => api.unfollow_user(&login).await,
                }
            },
            move |screen, result| {
                screen.end_blocking();
                let login = screen.identity.login();
                screen.view.message = Some(match result {
                    Ok(()) => action.success_message(login),
                    Err(_) => action.failure_message(login),
                });
                true
            },
        );

        Some(handle)
    }

    /// Load the profile again from scratch
    pub fn reload(&mut self) -> JoinHandle<TaskOutcome> {
        info!("Reloading profile of {}", self.identity.login());
        self.load()
    }

    /// Acknowledge the transient message
    pub fn dismiss_message(&mut self) {
        self.view.message = None;
    }

    /// Close the organization picker without choosing
    pub fn dismiss_picker(&mut self) {
        self.view.organization_picker = None;
    }
}

/// Owning handle of a [`UserScreen`].
///
/// Dropping it tears the screen down: the lifecycle scope closes, in-flight
/// fetches stop waiting on the network, and late results find no screen.
pub struct UserScreenHandle {
    screen: Arc<Mutex<UserScreen>>,
    scope: ScreenScope,
    primary: Option<JoinHandle<TaskOutcome>>,
}

impl UserScreenHandle {
    /// Lock the screen. Only call from the interactive thread, and never
    /// hold the guard across the executor running jobs.
    pub fn lock(&self) -> MutexGuard<'_, UserScreen> {
        lock(&self.screen)
    }

    /// Snapshot of the current view
    pub fn view(&self) -> ProfileView {
        self.lock().view.clone()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// Join handle of the primary fetch started by `open`
    pub fn take_primary(&mut self) -> Option<JoinHandle<TaskOutcome>> {
        self.primary.take()
    }

    /// Non-owning reference, as handed to fetch tasks
    pub fn downgrade(&self) -> Weak<Mutex<UserScreen>> {
        Arc::downgrade(&self.screen)
    }

    /// Tear the screen down now
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for UserScreenHandle {
    fn drop(&mut self) {
        debug!("Tearing down profile screen");
        self.scope.close();
    }
}
