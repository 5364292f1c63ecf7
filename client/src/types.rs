// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned, civil};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier assigned to an event by the backend.
///
/// The reference backend emits integers, but string identifiers are accepted
/// as well so the client does not break when the storage layer changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Numeric identifier.
    Int(i64),
    /// Opaque textual identifier.
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => id.fmt(f),
            Self::Text(id) => id.fmt(f),
        }
    }
}

/// The date of an event as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDate {
    /// An absolute instant, the string carried a UTC offset.
    Instant(Timestamp),
    /// A wall-clock date-time without an offset.
    Floating(civil::DateTime),
    /// A value that could not be parsed, kept verbatim.
    Unparsed(String),
}

impl EventDate {
    /// Parses a backend date string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Ok(ts) = trimmed.parse::<Timestamp>() {
            Self::Instant(ts)
        } else if let Ok(dt) = trimmed.parse::<civil::DateTime>() {
            Self::Floating(dt)
        } else {
            tracing::warn!(date = s, "unparseable event date, keeping it verbatim");
            Self::Unparsed(s.to_string())
        }
    }

    /// Resolves the date in the given time zone.
    ///
    /// Floating values are read as wall-clock time in `tz`. Returns `None` for
    /// unparsed values or instants that cannot be represented.
    #[must_use]
    pub fn to_zoned(&self, tz: &TimeZone) -> Option<Zoned> {
        match self {
            Self::Instant(ts) => Some(ts.to_zoned(tz.clone())),
            Self::Floating(dt) => dt.to_zoned(tz.clone()).ok(),
            Self::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant(ts) => ts.fmt(f),
            Self::Floating(dt) => dt.fmt(f),
            Self::Unparsed(raw) => raw.fmt(f),
        }
    }
}

impl Serialize for EventDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// An event as stored by the backend.
///
/// Values of this type only come out of a backend response; fields are
/// read-only so an event's identity is never altered on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    date: EventDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    organizer_id: Option<i64>,
}

impl Event {
    /// The backend-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    /// The title of the event.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The description of the event.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date of the event.
    #[must_use]
    pub const fn date(&self) -> &EventDate {
        &self.date
    }

    /// The organizer, if the backend reported one.
    #[must_use]
    pub const fn organizer_id(&self) -> Option<i64> {
        self.organizer_id
    }
}

/// Payload of a create-request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    /// Title, non-empty.
    pub title: String,
    /// Description, non-empty.
    pub description: String,
    /// Local date-time, serialized as `YYYY-MM-DDTHH:MM:SS`.
    pub date: civil::DateTime,
    /// Organizer id, omitted from the payload when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<i64>,
}
