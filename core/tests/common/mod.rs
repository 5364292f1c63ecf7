// SPDX-FileCopyrightText: 2026 Evently Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for component tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use evently_core::{ClientConfig, EventClient, Notice, Notifier};
use tracing::Level;
use tracing::instrument::WithSubscriber;
use wiremock::MockServer;

/// Notifier that remembers every notice it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// Creates a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> EventClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    EventClient::new(config).expect("Failed to create client")
}

/// Collects formatted log output written while a future runs.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Runs `fut` with a subscriber that writes error-level events here.
    pub async fn capture<F: Future>(&self, fut: F) -> F::Output {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::ERROR)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        fut.with_subscriber(subscriber).await
    }

    /// Error lines logged by the core crate.
    pub fn core_errors(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter(|line| line.contains("ERROR") && line.contains("evently_core"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
