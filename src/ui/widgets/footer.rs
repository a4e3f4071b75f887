// src/ui/widgets/footer.rs

use crate::app::App;
use crate::core::models::ScanPhase;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer with the keys available in the current phase.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match app.phase() {
        ScanPhase::Loading => Line::from(vec![
            Span::raw("Scanning... "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
        ScanPhase::Success => Line::from(vec![
            key("Enter"),
            Span::raw(" Scan, "),
            key("Ctrl+D"),
            Span::raw(" Download Report, "),
            key("Ctrl+N"),
            Span::raw(" New Scan, "),
            key("↑ ↓"),
            Span::raw(" Scroll, "),
            key("Esc"),
            Span::raw(" Quit"),
        ]),
        ScanPhase::Idle | ScanPhase::Error => Line::from(vec![
            Span::raw("Press "),
            key("Enter"),
            Span::raw(" to scan, "),
            key("Esc"),
            Span::raw(" to quit."),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
