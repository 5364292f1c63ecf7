// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the event").required(false)
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Local date and time of the event, e.g. 2024-01-01T10:00")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn token() -> Arg {
        arg!(--token <TOKEN> "Bearer token sent with the create-request")
            .long_help(
                "\
Bearer token sent with the create-request. Overrides the EVENTLY_TOKEN environment variable \
and the `token` entry of the configuration file.",
            )
    }

    pub fn get_token(matches: &ArgMatches) -> Option<String> {
        matches.get_one("token").cloned()
    }

    pub fn list() -> Arg {
        arg!(--list "List events after the event is created")
    }

    pub fn get_list(matches: &ArgMatches) -> bool {
        matches.get_flag("list")
    }
}
