// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use evently_core::EventDate;
use jiff::tz::TimeZone;

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

/// Formats an event date for humans, in the given time zone.
///
/// Unparsed dates are shown exactly as the backend sent them.
pub fn format_date(date: &EventDate, tz: &TimeZone) -> String {
    match date.to_zoned(tz) {
        Some(zoned) => zoned.strftime("%Y-%m-%d %H:%M").to_string(),
        None => date.to_string(),
    }
}

/// Collapses line breaks so a value fits in a single table cell.
pub fn single_line(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
