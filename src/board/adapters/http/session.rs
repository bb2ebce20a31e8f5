//! Explicit API session context for the HTTP gateway.

use std::env;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Environment variable naming the API base URL.
pub const BASE_URL_ENV: &str = "EVENTIFY_API_BASE_URL";

/// Environment variable naming the bearer token.
pub const TOKEN_ENV: &str = "EVENTIFY_API_TOKEN";

/// Connection context for the remote API: base URL plus an optional bearer
/// token.
///
/// The session is constructed explicitly and handed to the gateway, so the
/// credentials in use are always visible at the call site; [`Self::sign_out`]
/// is the teardown half of the lifecycle and drops back to anonymous calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSession {
    base_url: String,
    token: Option<String>,
}

impl ApiSession {
    /// Creates an anonymous session against the given base URL.
    ///
    /// A trailing slash on the base URL is dropped so endpoint paths join
    /// cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut trimmed = base_url.into();
        while trimmed.ends_with('/') {
            trimmed.pop();
        }
        Self {
            base_url: trimmed,
            token: None,
        }
    }

    /// Attaches a bearer token; every request carries it from then on.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds a session from `EVENTIFY_API_BASE_URL` and
    /// `EVENTIFY_API_TOKEN`, falling back to [`DEFAULT_BASE_URL`] when the
    /// base URL is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let session = env::var(BASE_URL_ENV).map_or_else(|_| Self::new(DEFAULT_BASE_URL), Self::new);
        match env::var(TOKEN_ENV) {
            Ok(token) => session.with_token(token),
            Err(_) => session,
        }
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a relative path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Returns `true` while a bearer token is attached.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Applies the bearer token to a request, when one is attached.
    #[must_use]
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Tears the session down to anonymous: clears the bearer token.
    pub fn sign_out(&mut self) {
        self.token = None;
    }
}
