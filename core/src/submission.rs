// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use evently_client::{AuthContext, ClientError, Event};

use crate::draft::{EventDraft, ValidationError};
use crate::notify::{Notice, Notifier};
use crate::service::EventService;

const CREATED_MESSAGE: &str = "Event created successfully";
const FAILED_MESSAGE: &str = "Failed to create event";

/// Result of a single submit.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the event. Holds the created event when the
    /// response body described one.
    Created(Option<Event>),

    /// The draft was not submitted because it failed validation.
    Invalid(ValidationError),

    /// The create-request failed.
    Failed(ClientError),

    /// Another create-request from this form is still pending.
    Busy,
}

impl SubmitOutcome {
    /// Whether the backend accepted the event.
    pub const fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// The event creation form.
///
/// Holds three controlled fields and submits them as a new event. Fields keep
/// their values after a successful submit; drop the form and build a new one
/// to start over.
pub struct EventSubmission<S, N> {
    service: S,
    notifier: N,
    draft: EventDraft,
    organizer_id: Option<i64>,
    in_flight: AtomicBool,
}

impl<S: EventService, N: Notifier> EventSubmission<S, N> {
    /// Creates an empty form.
    pub fn new(service: S, notifier: N) -> Self {
        Self {
            service,
            notifier,
            draft: EventDraft::default(),
            organizer_id: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Records the given organizer on every submitted event.
    pub fn with_organizer(mut self, organizer_id: Option<i64>) -> Self {
        self.organizer_id = organizer_id;
        self
    }

    /// The current form state.
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Sets the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Sets the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Sets the date field, a local date-time such as `2024-01-01T10:00`.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    /// Whether a create-request is pending.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits the form.
    ///
    /// An invalid draft never reaches the network and shows no notice. Once
    /// the create-request settles exactly one notice is shown.
    pub async fn submit(&self, auth: &AuthContext) -> SubmitOutcome {
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            tracing::debug!("create-request already pending, ignoring submit");
            return SubmitOutcome::Busy;
        };

        let payload = match self.draft.to_new_event(self.organizer_id) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "draft rejected before submit");
                return SubmitOutcome::Invalid(e);
            }
        };

        tracing::debug!(?payload, ?auth, "submitting event");
        match self.service.create_event(auth, &payload).await {
            Ok(created) => {
                self.notifier
                    .notify(&Notice::Success(CREATED_MESSAGE.to_string()));
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "error creating event");
                self.notifier
                    .notify(&Notice::Failure(FAILED_MESSAGE.to_string()));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

impl<S, N> fmt::Debug for EventSubmission<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSubmission")
            .field("draft", &self.draft)
            .field("organizer_id", &self.organizer_id)
            .field("in_flight", &self.in_flight.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Holds the in-flight flag; releases it on drop, including when the submit
/// future is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
