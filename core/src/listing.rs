// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use evently_client::Event;

use crate::service::EventService;

/// What the event list currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    /// Nothing fetched yet.
    Idle,
    /// Events in the order the backend returned them.
    Loaded(Vec<Event>),
    /// The read-request failed.
    Failed(String),
}

impl ListingState {
    /// The loaded events, empty unless the state is [`ListingState::Loaded`].
    pub fn events(&self) -> &[Event] {
        match self {
            ListingState::Loaded(events) => events,
            _ => &[],
        }
    }
}

/// The event list.
///
/// Fetches the collection once, on mount, and keeps the result until an
/// explicit [`EventListing::refresh`].
pub struct EventListing<S> {
    service: S,
    state: ListingState,
    mounted: bool,
}

impl<S: EventService> EventListing<S> {
    /// Creates an unmounted listing.
    pub const fn new(service: S) -> Self {
        Self {
            service,
            state: ListingState::Idle,
            mounted: false,
        }
    }

    /// The current state.
    pub const fn state(&self) -> &ListingState {
        &self.state
    }

    /// Mounts the listing. Only the first call issues a read-request.
    pub async fn mount(&mut self) -> &ListingState {
        // Marked only once the fetch settles, so a cancelled mount retries.
        if !self.mounted {
            self.fetch().await;
            self.mounted = true;
        }
        &self.state
    }

    /// Fetches the collection again, e.g. after an event was created.
    pub async fn refresh(&mut self) -> &ListingState {
        self.fetch().await;
        self.mounted = true;
        &self.state
    }

    async fn fetch(&mut self) {
        self.state = match self.service.list_events().await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "events loaded");
                ListingState::Loaded(events)
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching events");
                ListingState::Failed(e.to_string())
            }
        };
    }
}

impl<S> fmt::Debug for EventListing<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListing")
            .field("state", &self.state)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
