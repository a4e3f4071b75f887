// src/core/scan_client.rs

use crate::core::backend::Backend;
use crate::core::error::ScanError;
use crate::core::models::{ScanPhase, ScanState, VulnerabilityReport};
use tracing::{debug, error, info, warn};

/// Handle for one scan request. Only the most recent ticket may settle the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTicket {
    pub id: u64,
    pub target: String,
}

/// Owns the scan lifecycle state machine.
///
/// `begin` and `complete` are split so the network call can run on a background task
/// while the UI keeps drawing; `scan` chains both for sequential callers.
#[derive(Debug, Default)]
pub struct ScanClient {
    state: ScanState,
    latest: u64,
}

impl ScanClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn phase(&self) -> ScanPhase {
        self.state.phase
    }

    pub fn report(&self) -> Option<&VulnerabilityReport> {
        self.state.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.phase == ScanPhase::Loading
    }

    /// Validates the input and moves to `Loading`.
    ///
    /// An empty or all-whitespace URL settles the state to `Error` right away and no
    /// ticket is issued, so no request must be sent.
    pub fn begin(&mut self, url: &str) -> Result<ScanTicket, ScanError> {
        let target = url.trim();
        // A new request supersedes anything still in flight, even when it is rejected.
        self.latest += 1;

        if target.is_empty() {
            warn!("Scan requested with an empty URL.");
            let err = ScanError::EmptyInput;
            self.state = ScanState {
                url: String::new(),
                phase: ScanPhase::Error,
                report: None,
                error_message: Some(err.user_message().to_string()),
            };
            return Err(err);
        }

        info!(target, request = self.latest, "Scan started.");
        self.state = ScanState {
            url: target.to_string(),
            phase: ScanPhase::Loading,
            report: None,
            error_message: None,
        };
        Ok(ScanTicket {
            id: self.latest,
            target: target.to_string(),
        })
    }

    /// Applies the outcome of the request identified by `ticket_id`.
    ///
    /// Returns `false` (and leaves the state untouched) when a newer request has been
    /// started since.
    pub fn complete(
        &mut self,
        ticket_id: u64,
        outcome: Result<VulnerabilityReport, ScanError>,
    ) -> bool {
        if ticket_id != self.latest {
            debug!(
                request = ticket_id,
                latest = self.latest,
                "Discarding stale scan response."
            );
            return false;
        }

        match outcome {
            Ok(report) => {
                let findings = report.finding_count();
                info!(target = %self.state.url, findings, "Scan finished.");
                self.state.phase = ScanPhase::Success;
                self.state.report = Some(report);
                self.state.error_message = None;
            }
            Err(err) => {
                error!(target = %self.state.url, error = %err, "Scan failed.");
                self.state.phase = ScanPhase::Error;
                self.state.report = None;
                self.state.error_message = Some(err.user_message().to_string());
            }
        }
        true
    }

    /// Runs one scan to completion against `backend`.
    pub async fn scan(&mut self, backend: &Backend, url: &str) -> &ScanState {
        if let Ok(ticket) = self.begin(url) {
            let outcome = backend.fetch_report(&ticket.target).await;
            self.complete(ticket.id, outcome);
        }
        &self.state
    }

    /// Back to `Idle`. Any request still in flight becomes stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = ScanState::default();
    }
}
