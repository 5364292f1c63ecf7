// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::IsTerminal;

use clap::{ArgMatches, Command};
use evently_core::{
    AuthContext, EventClient, EventListing, EventSubmission, ListingState, SubmitOutcome,
};
use jiff::tz::TimeZone;

use crate::arg::{CommonArgs, EventArgs};
use crate::cli::Context;
use crate::event_formatter::{EventColumn, EventFormatter};
use crate::notifier::TerminalNotifier;
use crate::prompt::prompt_missing;
use crate::util::OutputFormat;

#[derive(Clone)]
pub struct CmdEventNew {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub token: Option<String>,

    pub list: bool,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new event")
            .arg(EventArgs::title())
            .arg(EventArgs::description())
            .arg(EventArgs::date())
            .arg(EventArgs::token())
            .arg(EventArgs::list())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: EventArgs::get_title(matches),
            description: EventArgs::get_description(matches),
            date: EventArgs::get_date(matches),
            token: EventArgs::get_token(matches),

            list: EventArgs::get_list(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    /// Whether some field has to be asked for interactively.
    pub fn is_incomplete(&self) -> bool {
        self.title.is_none() || self.description.is_none() || self.date.is_none()
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating new event...");
        let mut form = EventSubmission::new(&ctx.client, TerminalNotifier)
            .with_organizer(ctx.config.organizer_id);
        form.set_title(self.title.clone().unwrap_or_default());
        form.set_description(self.description.clone().unwrap_or_default());
        form.set_date(self.date.clone().unwrap_or_default());

        if self.is_incomplete() && std::io::stdin().is_terminal() {
            let draft = prompt_missing(form.draft())?;
            form.set_title(draft.title);
            form.set_description(draft.description);
            form.set_date(draft.date);
        }

        let auth = match self.token {
            Some(token) => AuthContext::bearer(token),
            None => ctx.config.auth(),
        };

        match form.submit(&auth).await {
            SubmitOutcome::Created(created) => {
                if self.verbose {
                    if let Some(event) = created {
                        let formatter = formatter(self.output_format, true);
                        print!("{}", formatter.format(&[event]));
                    }
                }

                if self.list {
                    let mut listing = EventListing::new(&ctx.client);
                    print_state(listing.refresh().await, self.output_format, self.verbose);
                }
                Ok(())
            }
            SubmitOutcome::Invalid(e) => Err(e.into()),
            SubmitOutcome::Failed(_) | SubmitOutcome::Busy => Ok(()), // already reported
        }
    }
}

impl std::fmt::Debug for CmdEventNew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdEventNew")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("date", &self.date)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("list", &self.list)
            .field("output_format", &self.output_format)
            .field("verbose", &self.verbose)
            .finish()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        Self::list(&ctx.client, self.output_format, self.verbose).await;
        Ok(())
    }

    /// Mounts a listing and prints whatever it ends up showing.
    pub async fn list(client: &EventClient, output_format: OutputFormat, verbose: bool) {
        let mut listing = EventListing::new(client);
        print_state(listing.mount().await, output_format, verbose);
    }
}

fn print_state(state: &ListingState, output_format: OutputFormat, verbose: bool) {
    let formatter = formatter(output_format, verbose);
    print!("{}", formatter.format_state(state));
}

fn formatter(output_format: OutputFormat, verbose: bool) -> EventFormatter {
    let tz = TimeZone::system();
    let columns = if verbose {
        vec![
            EventColumn::id(),
            EventColumn::title(),
            EventColumn::date(tz),
            EventColumn::organizer(),
            EventColumn::description(),
        ]
    } else {
        vec![
            EventColumn::id(),
            EventColumn::title(),
            EventColumn::date(tz),
            EventColumn::description(),
        ]
    };
    EventFormatter::new(columns).with_output_format(output_format)
}
