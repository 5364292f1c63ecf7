// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of Evently.

mod arg;
mod cli;
mod cmd_event;
mod config;
mod event_formatter;
mod notifier;
mod prompt;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, Context, run};
