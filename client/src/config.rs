// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Credentials attached to a single request.
///
/// The context is handed to each operation explicitly instead of being read
/// from ambient storage, so callers decide which requests carry a token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    /// A context without credentials.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// A context carrying a bearer token.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::from_token(Some(token.into()))
    }

    /// Creates a context from an optional token. Blank tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token.as_ref().map(|_| "<redacted>");
        f.debug_struct("AuthContext").field("token", &token).finish()
    }
}

/// Backend server configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Endpoint that creates an event. Absolute URLs are used verbatim.
    #[serde(default = "default_create_path")]
    pub create_path: String,
    /// Endpoint that lists events. Absolute URLs are used verbatim.
    #[serde(default = "default_list_path")]
    pub list_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Resolves an endpoint path against the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_create_path() -> String {
    "/events_create".to_string()
}

fn default_list_path() -> String {
    "/events".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("evently-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            create_path: default_create_path(),
            list_path: default_list_path(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
