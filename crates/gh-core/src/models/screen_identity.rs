use crate::{CoreError, Result as CoreErrorResult, non_blank};

use serde::Serialize;

/// Subject of a profile screen, fixed when the screen is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenIdentity {
    login: String,
    name: Option<String>,
}

impl ScreenIdentity {
    /// Create an identity for `login`. The login must not be blank.
    #[track_caller]
    pub fn new(login: impl Into<String>, name: Option<String>) -> CoreErrorResult<Self> {
        let login = login.into().trim().to_string();
        if login.is_empty() {
            return Err(CoreError::validation("login must not be blank"));
        }
        Ok(Self { login, name })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `login - name`, or just the login when no display name is known
    pub fn title(&self) -> String {
        match non_blank(&self.name) {
            Some(name) => format!("{} - {}", self.login, name),
            None => self.login.clone(),
        }
    }
}
