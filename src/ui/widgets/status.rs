// src/ui/widgets/status.rs

use crate::app::{App, SPINNER_CHARS};
use crate::core::export::ExportStatus;
use crate::core::models::ScanPhase;
use ratatui::{prelude::*, widgets::Paragraph};

/// One-line banner: scan progress, scan error or the latest export result.
pub fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.phase() {
        ScanPhase::Loading => Line::from(vec![
            Span::styled(
                format!("{} ", SPINNER_CHARS[app.spinner_frame]),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("Scanning in progress..."),
        ]),
        ScanPhase::Error => {
            let message = app.scan.state().error_message.clone().unwrap_or_default();
            Line::from(Span::styled(message, Style::default().fg(Color::Red)))
        }
        ScanPhase::Success | ScanPhase::Idle => match &app.export_status {
            ExportStatus::Idle => Line::default(),
            ExportStatus::InProgress => Line::from("Generating PDF...".cyan()),
            ExportStatus::Success(path) => Line::from(Span::styled(
                format!("Report saved to {}", path.display()),
                Style::default().fg(Color::Green),
            )),
            ExportStatus::Error(message) => {
                Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Red)))
            }
        },
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
