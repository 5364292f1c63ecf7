// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the event-management backend.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::EventClient;
pub use crate::config::{AuthContext, ClientConfig};
pub use crate::error::ClientError;
pub use crate::types::{Event, EventDate, EventId, NewEvent};
