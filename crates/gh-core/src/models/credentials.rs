/// Signed-in identity the API client authenticates with.
///
/// The token never appears in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: Option<String>,
    pub token: Option<String>,
}

impl Credentials {
    pub fn new(login: Option<String>, token: Option<String>) -> Self {
        Self { login, token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Authenticated means we know who is signed in and can act on their behalf
    pub fn is_authenticated(&self) -> bool {
        self.login.is_some() && self.token.is_some()
    }

    /// Whether `subject` is the signed-in account (GitHub logins ignore case)
    pub fn is_self(&self, subject: &str) -> bool {
        self.login
            .as_deref()
            .is_some_and(|login| login.eq_ignore_ascii_case(subject))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
