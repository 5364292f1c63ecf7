// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use evently_client::{AuthContext, ClientError, Event, EventClient, NewEvent};

/// Backend operations the components rely on.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Issues a create-request.
    async fn create_event(
        &self,
        auth: &AuthContext,
        event: &NewEvent,
    ) -> Result<Option<Event>, ClientError>;

    /// Issues a read-request for the whole collection.
    async fn list_events(&self) -> Result<Vec<Event>, ClientError>;
}

#[async_trait]
impl EventService for EventClient {
    async fn create_event(
        &self,
        auth: &AuthContext,
        event: &NewEvent,
    ) -> Result<Option<Event>, ClientError> {
        EventClient::create_event(self, auth, event).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        EventClient::list_events(self).await
    }
}

#[async_trait]
impl<S: EventService + ?Sized> EventService for Arc<S> {
    async fn create_event(
        &self,
        auth: &AuthContext,
        event: &NewEvent,
    ) -> Result<Option<Event>, ClientError> {
        (**self).create_event(auth, event).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        (**self).list_events().await
    }
}

#[async_trait]
impl<S: EventService + ?Sized> EventService for &S {
    async fn create_event(
        &self,
        auth: &AuthContext,
        event: &NewEvent,
    ) -> Result<Option<Event>, ClientError> {
        (**self).create_event(auth, event).await
    }

    async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        (**self).list_events().await
    }
}
