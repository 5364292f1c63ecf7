// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Evently: the event submission form and the event listing, kept
//! independent of any particular user interface.

mod config;
mod draft;
mod listing;
mod notify;
mod service;
mod submission;

pub use crate::config::{APP_NAME, Config};
pub use crate::draft::{EventDraft, Field, ValidationError, parse_local_datetime};
pub use crate::listing::{EventListing, ListingState};
pub use crate::notify::{Notice, Notifier};
pub use crate::service::EventService;
pub use crate::submission::{EventSubmission, SubmitOutcome};
pub use evently_client::{
    AuthContext, ClientConfig, ClientError, Event, EventClient, EventDate, EventId, NewEvent,
};
