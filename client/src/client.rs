// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the event backend's REST endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::config::{AuthContext, ClientConfig};
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::types::{Event, NewEvent};

/// Client for creating and listing events on the backend.
///
/// Cloning is cheap, clones share the underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use evently_client::{ClientConfig, EventClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EventClient::new(ClientConfig::default())?;
/// for event in client.list_events().await? {
///     println!("{}", event.title());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventClient {
    http: Arc<HttpClient>,
    config: ClientConfig,
}

impl EventClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a create-request for a new event.
    ///
    /// The backend gives no guarantee about the response body. When it decodes
    /// as an event it is returned, otherwise `None`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn create_event(
        &self,
        auth: &AuthContext,
        event: &NewEvent,
    ) -> Result<Option<Event>, ClientError> {
        let url = self.config.endpoint(&self.config.create_path);
        tracing::debug!(%url, title = %event.title, "sending create-request");

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url, auth).json(event))
            .await?;

        let body = resp.text().await?;
        match serde_json::from_str::<Event>(&body) {
            Ok(created) => {
                tracing::debug!(id = %created.id(), "backend returned the created event");
                Ok(Some(created))
            }
            Err(e) => {
                tracing::debug!(error = %e, "create response is not an event, ignoring body");
                Ok(None)
            }
        }
    }

    /// Issues a read-request for the event collection.
    ///
    /// Events are returned in the order the backend sent them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or when the
    /// body is not a JSON array of events.
    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        let url = self.config.endpoint(&self.config.list_path);
        tracing::debug!(%url, "sending read-request");

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::GET, &url, &AuthContext::anonymous()),
            )
            .await?;

        let body = resp.text().await?;
        let events: Vec<Event> = serde_json::from_str(&body)?;
        tracing::debug!(count = events.len(), "received events");
        Ok(events)
    }
}
