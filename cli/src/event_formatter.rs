// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use evently_core::{Event, EventDate, ListingState};
use jiff::tz::TimeZone;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_date, single_line};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }

    /// Formats whatever the listing currently shows, including failures.
    pub fn format_state<'a>(&'a self, state: &'a ListingState) -> StateDisplay<'a> {
        StateDisplay {
            state,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug)]
pub struct StateDisplay<'a> {
    state: &'a ListingState,
    formatter: &'a EventFormatter,
}

impl fmt::Display for StateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            ListingState::Idle => Ok(()),
            ListingState::Loaded(events)
                if events.is_empty() && self.formatter.format == OutputFormat::Table =>
            {
                writeln!(f, "{}", "No events found".italic())
            }
            ListingState::Loaded(events) => write!(f, "{}", self.formatter.format(events)),
            ListingState::Failed(reason) if self.formatter.format == OutputFormat::Json => {
                let error = serde_json::json!({ "error": reason });
                let json = serde_json::to_string_pretty(&error).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ListingState::Failed(reason) => {
                writeln!(f, "{} {}", "Failed to load events:".red(), reason)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventColumn {
    Id,
    Title,
    Date(TimeZone),
    Description,
    Organizer,
}

impl EventColumn {
    pub fn id() -> Self {
        Self::Id
    }

    pub fn title() -> Self {
        Self::Title
    }

    /// Date column rendered in the given time zone.
    pub fn date(tz: TimeZone) -> Self {
        Self::Date(tz)
    }

    pub fn description() -> Self {
        Self::Description
    }

    pub fn organizer() -> Self {
        Self::Organizer
    }
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Date(_) => "Date",
            Self::Description => "Description",
            Self::Organizer => "Organizer",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            Self::Id => event.id().to_string().into(),
            Self::Title => single_line(event.title()).into(),
            Self::Date(tz) => format_date(event.date(), tz).into(),
            Self::Description => single_line(event.description()).into(),
            Self::Organizer => event
                .organizer_id()
                .map_or_else(String::new, |id| id.to_string())
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Id | Self::Organizer => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, event: &Event) -> Option<Color> {
        match (self, event.date()) {
            (Self::Date(_), EventDate::Unparsed(_)) => Some(Color::Yellow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(json: &str) -> Vec<Event> {
        serde_json::from_str(json).unwrap()
    }

    fn formatter() -> EventFormatter {
        EventFormatter::new(vec![
            EventColumn::id(),
            EventColumn::title(),
            EventColumn::date(TimeZone::UTC),
            EventColumn::description(),
        ])
    }

    #[test]
    fn test_renders_single_event() {
        colored::control::set_override(false);
        let events = events(
            r#"[{"id":1,"title":"A","description":"d","date":"2024-01-01T10:00:00Z"}]"#,
        );
        let out = formatter().format(&events).to_string();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ID  Title  Date              Description");
        assert_eq!(lines[1], " 1  A      2024-01-01 10:00  d");
    }

    #[test]
    fn test_renders_one_row_per_event_in_order() {
        colored::control::set_override(false);
        let events = events(
            r#"[
                {"id":3,"title":"Third","description":"c","date":"2024-03-01T09:00:00"},
                {"id":1,"title":"First","description":"a\nmore","date":"2024-01-01T09:00:00"},
                {"id":2,"title":"Second","description":"b","date":"2024-02-01T09:00:00"}
            ]"#,
        );
        let out = formatter().format(&events).to_string();

        let lines: Vec<_> = out.lines().skip(1).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Third"));
        assert!(lines[1].contains("First") && lines[1].contains("a more"));
        assert!(lines[2].contains("Second"));
    }

    #[test]
    fn test_empty_state_in_table_mode() {
        colored::control::set_override(false);
        let state = ListingState::Loaded(Vec::new());
        let out = formatter().format_state(&state).to_string();
        assert_eq!(out, "No events found\n");
    }

    #[test]
    fn test_empty_state_in_json_mode() {
        let state = ListingState::Loaded(Vec::new());
        let out = formatter()
            .with_output_format(OutputFormat::Json)
            .format_state(&state)
            .to_string();
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn test_json_keeps_backend_fields() {
        let events = events(
            r#"[{"id":1,"title":"A","description":"d","date":"2024-01-01T10:00:00Z","organizer_id":5}]"#,
        );
        let out = formatter()
            .with_output_format(OutputFormat::Json)
            .format(&events)
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["title"], "A");
        assert_eq!(value[0]["date"], "2024-01-01T10:00:00Z");
        assert_eq!(value[0]["organizer_id"], 5);
    }

    #[test]
    fn test_failed_state_shows_reason() {
        colored::control::set_override(false);
        let state = ListingState::Failed("server responded with 500: boom".to_string());
        let out = formatter().format_state(&state).to_string();
        assert_eq!(
            out,
            "Failed to load events: server responded with 500: boom\n"
        );
    }

    #[test]
    fn test_failed_state_is_json_in_json_mode() {
        let state = ListingState::Failed("server responded with 503: down".to_string());
        let out = formatter()
            .with_output_format(OutputFormat::Json)
            .format_state(&state)
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "server responded with 503: down");
    }

    #[test]
    fn test_idle_state_renders_nothing() {
        assert_eq!(formatter().format_state(&ListingState::Idle).to_string(), "");
    }
}
