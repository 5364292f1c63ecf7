// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use evently_core::{Notice, Notifier};

/// Shows notices as one colored line, successes on stdout and failures on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(msg) => println!("{} {}", "✔".green(), msg),
            Notice::Failure(msg) => eprintln!("{} {}", "✘".red(), msg),
        }
    }
}
