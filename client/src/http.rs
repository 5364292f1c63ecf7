// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::{AuthContext, ClientConfig};
use crate::error::ClientError;

/// HTTP client for backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a request, attaching the bearer token when the context has one.
    pub fn build_request(&self, method: Method, url: &str, auth: &AuthContext) -> RequestBuilder {
        let req = self.client.request(method, url);
        match auth.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// Any 2xx status is a success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
