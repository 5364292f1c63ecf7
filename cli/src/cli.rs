// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evently_core::{APP_NAME, Config, EventClient};
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventList, CmdEventNew};
use crate::config::parse_config;

/// Run the Evently command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Create and browse events on an event-management backend.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to listing events
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evently/config.toml on Linux and \
MacOS, %APPDATA%/evently/config.toml on Windows. Can also be set with EVENTLY_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventList::command()),
            )
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventList::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some(("event", matches)) => Self::from_event(matches)?,
            Some((CmdEventNew::NAME, matches)) => Commands::EventNew(CmdEventNew::from(matches)),
            Some((CmdEventList::NAME, matches)) => {
                Commands::EventList(CmdEventList::from(matches))
            }
            None => Commands::EventList(CmdEventList::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    fn from_event(matches: &ArgMatches) -> Result<Commands, Box<dyn Error>> {
        match matches.subcommand() {
            Some((CmdEventNew::NAME, matches)) => Ok(Commands::EventNew(CmdEventNew::from(matches))),
            Some((CmdEventList::NAME, matches)) => {
                Ok(Commands::EventList(CmdEventList::from(matches)))
            }
            _ => Err("Missing event subcommand".into()),
        }
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Create a new event
    EventNew(CmdEventNew),

    /// List events
    EventList(CmdEventList),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::EventNew(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Commands::EventList(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Context) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let client = EventClient::new(config.server.clone())?;
        let ctx = Context { config, client };

        f(&ctx).await
    }
}

/// Everything a command needs to talk to the backend.
#[derive(Debug, Clone)]
pub struct Context {
    /// The loaded configuration.
    pub config: Config,
    /// Client built from the server section of the configuration.
    pub client: EventClient,
}
