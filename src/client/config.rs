//! Client configuration: credentials and gateway base URL.

use std::env;
use std::fmt;

use once_cell::sync::OnceCell;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

/// Gateway host used when no valid override is configured.
pub const DEFAULT_BASE_URL: &str = "http://sms.mysmsmasking.com";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "MYSMSMASKING_BASEURL";

static PROCESS_BASE_URL: BaseUrlResolver = BaseUrlResolver::new(BASE_URL_ENV);

/// Base URL for this process, read from [`BASE_URL_ENV`] on first use.
///
/// The environment is consulted once; later changes to the variable are not
/// observed.
pub fn base_url() -> &'static str {
    PROCESS_BASE_URL.resolve()
}

/// Resolves a gateway base URL from an environment variable at most once.
///
/// Concurrent first calls block on a single initialization and all observe the
/// same value.
#[derive(Debug)]
pub struct BaseUrlResolver {
    var: &'static str,
    resolved: OnceCell<String>,
}

impl BaseUrlResolver {
    /// Create a resolver for the environment variable `var`. Nothing is read yet.
    pub const fn new(var: &'static str) -> Self {
        Self {
            var,
            resolved: OnceCell::new(),
        }
    }

    /// Name of the environment variable this resolver reads.
    pub fn var(&self) -> &'static str {
        self.var
    }

    /// Resolved base URL, reading the environment on the first call only.
    pub fn resolve(&self) -> &str {
        self.resolve_with(|| env::var(self.var).ok())
    }

    /// Like [`BaseUrlResolver::resolve`], reading the override from `lookup`.
    /// `lookup` is only called if nothing has been resolved yet.
    pub fn resolve_with<F>(&self, lookup: F) -> &str
    where
        F: FnOnce() -> Option<String>,
    {
        self.resolved.get_or_init(|| {
            lookup()
                .as_deref()
                .and_then(normalize_base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
        })
    }
}

/// Normalize a base URL override.
///
/// Returns `None` unless `raw` is an absolute URL that can carry a path. Query
/// and fragment are dropped, then trailing `/` and spaces are trimmed.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let mut url = Url::parse(raw).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    url.set_query(None);
    url.set_fragment(None);

    let trimmed = url.as_str().trim_end_matches(['/', ' ']);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

#[derive(Clone)]
/// Gateway account credentials, sent with every request.
///
/// The password is held as a [`SecretString`] and only exposed when request
/// parameters are built.
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Form field name used by the gateway (`username`).
    pub const USERNAME_FIELD: &'static str = "username";
    /// Form field name used by the gateway (`password`).
    pub const PASSWORD_FIELD: &'static str = "password";

    /// Wrap a username and password. Neither is validated.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Account username, sent in the clear.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password. Call [`ExposeSecret::expose_secret`] to read it.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub(crate) fn push_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Self::USERNAME_FIELD.to_owned(), self.username.clone()));
        params.push((
            Self::PASSWORD_FIELD.to_owned(),
            self.password.expose_secret().to_owned(),
        ));
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
/// Everything a [`MaskingClient`](crate::MaskingClient) needs to reach the gateway.
///
/// Fixed once the client is built.
pub struct Config {
    base_url: String,
    credentials: Credentials,
}

impl Config {
    /// Use an explicit base URL. Trailing `/` and spaces are trimmed.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches(['/', ' ']).to_owned(),
            credentials: Credentials::new(username, password),
        }
    }

    /// Use the process-wide base URL from [`base_url`].
    pub fn from_env(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: base_url().to_owned(),
            credentials: Credentials::new(username, password),
        }
    }

    /// Gateway base URL without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to every request.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
