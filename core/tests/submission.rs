// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the submission form against a mock backend.

mod common;

use std::time::Duration;

use evently_core::{
    AuthContext, ClientConfig, EventClient, EventSubmission, Field, Notice, SubmitOutcome,
    ValidationError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{LogCapture, RecordingNotifier, client_for};

fn fill(form: &mut EventSubmission<EventClient, &RecordingNotifier>) {
    form.set_title("Team meeting");
    form.set_description("Quarterly planning");
    form.set_date("2024-01-01T10:00");
}

#[tokio::test]
async fn submit_sends_one_request_with_draft_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events_create"))
        .and(header("Authorization", "Bearer tok"))
        .and(body_json(json!({
            "title": "Team meeting",
            "description": "Quarterly planning",
            "date": "2024-01-01T10:00:00",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Team meeting",
            "description": "Quarterly planning",
            "date": "2024-01-01T10:00:00",
            "organizer_id": 1,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(client_for(&mock_server), &notifier);
    fill(&mut form);

    let outcome = form.submit(&AuthContext::bearer("tok")).await;

    match outcome {
        SubmitOutcome::Created(Some(event)) => assert_eq!(event.title(), "Team meeting"),
        other => panic!("Expected created event, got {other:?}"),
    }
    assert_eq!(
        notifier.notices(),
        vec![Notice::Success("Event created successfully".to_string())]
    );
    assert_eq!(form.draft().title, "Team meeting");
}

#[tokio::test]
async fn server_error_notifies_failure_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events_create"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(client_for(&mock_server), &notifier);
    fill(&mut form);

    let logs = LogCapture::default();
    let outcome = logs.capture(form.submit(&AuthContext::anonymous())).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(
        notifier.notices(),
        vec![Notice::Failure("Failed to create event".to_string())]
    );
    let errors = logs.core_errors();
    assert_eq!(errors.len(), 1, "logged: {errors:?}");
    assert!(errors[0].contains("error creating event"));
}

#[tokio::test]
async fn network_error_notifies_failure_once() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(EventClient::new(config).unwrap(), &notifier);
    fill(&mut form);

    let logs = LogCapture::default();
    let outcome = logs.capture(form.submit(&AuthContext::anonymous())).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(notifier.notices().len(), 1);
    assert!(!notifier.notices()[0].is_success());
    assert_eq!(logs.core_errors().len(), 1);
}

#[tokio::test]
async fn empty_fields_never_reach_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(client_for(&mock_server), &notifier);

    for (field, expected) in [
        (Field::Title, "Team meeting"),
        (Field::Description, "Quarterly planning"),
        (Field::Date, "2024-01-01T10:00"),
    ] {
        let outcome = form.submit(&AuthContext::anonymous()).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Invalid(ValidationError::Missing(f)) if f == field
        ));

        match field {
            Field::Title => form.set_title(expected),
            Field::Description => form.set_description(expected),
            Field::Date => {}
        }
    }

    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn success_logs_no_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events_create"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(client_for(&mock_server), &notifier);
    fill(&mut form);

    let logs = LogCapture::default();
    let outcome = logs.capture(form.submit(&AuthContext::anonymous())).await;

    assert!(matches!(outcome, SubmitOutcome::Created(None)));
    assert!(logs.core_errors().is_empty());
}

#[tokio::test]
async fn concurrent_submit_issues_single_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events_create"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let notifier = RecordingNotifier::default();
    let mut form = EventSubmission::new(client_for(&mock_server), &notifier);
    fill(&mut form);

    let auth = AuthContext::anonymous();
    let (first, second) = tokio::join!(form.submit(&auth), form.submit(&auth));

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|o| o.is_created()).count(), 1);
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| matches!(o, SubmitOutcome::Busy))
            .count(),
        1
    );
    assert_eq!(notifier.notices().len(), 1);
    assert!(!form.is_submitting());
}
