// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cliclack::{input, intro, outro};
use evently_core::{EventDraft, parse_local_datetime};

/// Asks for every field of the draft that is still empty.
pub fn prompt_missing(draft: &EventDraft) -> Result<EventDraft, Box<dyn Error>> {
    intro("Create Event")?;

    let title = if draft.title.is_empty() {
        input("Title:").placeholder("Team meeting").interact()?
    } else {
        draft.title.clone()
    };

    let description = if draft.description.is_empty() {
        input("Description:")
            .placeholder("What is it about?")
            .multiline()
            .interact()?
    } else {
        draft.description.clone()
    };

    let date = if draft.date.is_empty() {
        input("Date:")
            .placeholder("2024-01-01T10:00")
            .validate(|s: &String| parse_local_datetime(s).map(|_| ()))
            .interact()?
    } else {
        draft.date.clone()
    };

    outro("Submitting event...")?;
    Ok(EventDraft {
        title,
        description,
        date,
    })
}
