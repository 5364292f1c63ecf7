// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use evently_client::{AuthContext, ClientConfig};

/// The name of the Evently application.
pub const APP_NAME: &str = "evently";

/// Configuration for the Evently application.
#[derive(Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Backend server settings.
    #[serde(default)]
    pub server: ClientConfig,

    /// Bearer token sent with create-requests.
    #[serde(default)]
    pub token: Option<String>,

    /// Organizer recorded on newly created events.
    #[serde(default)]
    pub organizer_id: Option<i64>,
}

impl Config {
    /// Builds the authentication context from the configured token.
    pub fn auth(&self) -> AuthContext {
        AuthContext::from_token(self.token.clone())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server", &self.server)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("organizer_id", &self.organizer_id)
            .finish()
    }
}
