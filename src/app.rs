// src/app.rs

use crate::core::error::ScanError;
use crate::core::export::ExportStatus;
use crate::core::models::{ScanPhase, VulnerabilityReport};
use crate::core::scan_client::{ScanClient, ScanTicket};
use crate::core::summary::ReportSummary;
use ratatui::widgets::ScrollbarState;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Everything the UI needs to draw a frame.
pub struct App {
    pub should_quit: bool,
    pub input: String,
    pub scan: ScanClient,
    pub summary: Option<ReportSummary>,
    pub scroll_offset: usize,
    pub report_scroll_state: ScrollbarState,
    pub export_status: ExportStatus,
    pub spinner_frame: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            scan: ScanClient::new(),
            summary: None,
            scroll_offset: 0,
            report_scroll_state: ScrollbarState::default(),
            export_status: ExportStatus::Idle,
            spinner_frame: 0,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.scan.phase()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.report_scroll_state = self.report_scroll_state.position(self.scroll_offset);
    }

    /// Starts a scan of the current input. Returns the ticket to run in the background,
    /// or `None` when the input was rejected.
    pub fn submit(&mut self) -> Option<ScanTicket> {
        self.summary = None;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
        self.scan.begin(&self.input).ok()
    }

    pub fn on_scan_finished(
        &mut self,
        ticket_id: u64,
        outcome: Result<VulnerabilityReport, ScanError>,
    ) {
        if self.scan.complete(ticket_id, outcome) {
            self.summary = self.scan.report().map(ReportSummary::from_report);
        }
    }

    /// The report and URL to export, if exporting is possible right now.
    pub fn request_export(&mut self) -> Option<(VulnerabilityReport, String)> {
        if self.scan.is_loading() || self.export_status == ExportStatus::InProgress {
            return None;
        }
        let report = self.scan.report()?.clone();
        self.export_status = ExportStatus::InProgress;
        Some((report, self.scan.state().url.clone()))
    }

    pub fn on_export_finished(&mut self, status: ExportStatus) {
        self.export_status = status;
    }

    pub fn on_tick(&mut self) {
        if self.scan.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.input = String::new();
        self.scan.reset();
        self.summary = None;
        self.scroll_offset = 0;
        self.report_scroll_state = ScrollbarState::default();
        self.export_status = ExportStatus::Idle;
        self.spinner_frame = 0;
    }
}
