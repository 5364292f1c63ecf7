// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use evently_client::NewEvent;
use jiff::{Timestamp, civil};

/// A required field of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The event title.
    Title,
    /// The event description.
    Description,
    /// The event date.
    Date,
}

impl Field {
    /// All form fields, in display order.
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Date];

    /// Lowercase name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Date => "date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    Missing(Field),

    /// The date is not a local date-time.
    #[error("invalid date '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidDate(String),
}

/// Form state of an event that has not been submitted yet.
///
/// All three fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Short title.
    pub title: String,
    /// Multi-line description.
    pub description: String,
    /// Local date-time as typed, e.g. `2024-01-01T10:00`.
    pub date: String,
}

impl EventDraft {
    /// Returns the value of the given field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Date => &self.date,
        }
    }

    /// Returns the first required field that is still empty.
    pub fn missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    /// Validates the draft and converts it into a create-request payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is empty or the date cannot be parsed.
    pub fn to_new_event(&self, organizer_id: Option<i64>) -> Result<NewEvent, ValidationError> {
        if let Some(field) = self.missing() {
            return Err(ValidationError::Missing(field));
        }

        Ok(NewEvent {
            title: self.title.clone(),
            description: self.description.clone(),
            date: parse_local_datetime(&self.date)?,
            organizer_id,
        })
    }
}

/// Parses a local date-time such as `2024-01-01T10:00` or `2024-01-01 10:00:30`.
///
/// # Errors
///
/// Returns an error if the input is not a civil date-time. Inputs carrying a
/// UTC offset are rejected.
pub fn parse_local_datetime(s: &str) -> Result<civil::DateTime, ValidationError> {
    let input = s.trim();
    // An offset would be dropped by the civil parser, shifting the instant.
    if input.parse::<Timestamp>().is_ok() {
        return Err(ValidationError::InvalidDate(s.to_string()));
    }
    input
        .parse::<civil::DateTime>()
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}
