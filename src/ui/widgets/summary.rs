// src/ui/widgets/summary.rs

use crate::app::App;
use crate::core::summary::{Section, is_section_empty, section_len};
use crate::ui::widgets::severity_style;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the per-section overview: entry count and headline severity.
///
/// Nothing is drawn inside the box until a report is available.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");

    let (Some(report), Some(summary)) = (app.scan.report(), app.summary.as_ref()) else {
        frame.render_widget(summary_container, area);
        return;
    };

    let mut lines = Vec::new();
    lines.push(Line::from(format!("Target: {}", app.scan.state().url)).bold());
    let (total_text, total_style) = if summary.total_findings == 0 {
        ("No findings".to_string(), Style::default().fg(Color::Green))
    } else {
        (
            format!("{} findings", summary.total_findings),
            Style::default().fg(Color::Red),
        )
    };
    lines.push(Line::from(Span::styled(total_text, total_style)));
    lines.push(Line::from(""));

    for section in Section::all() {
        let count = section_len(report, section);
        let mut spans = vec![Span::raw(format!("{} ({}) ", section.title(), count))];
        match summary.headline(section) {
            Some(severity) => {
                spans.push(Span::styled(severity.to_string(), severity_style(severity)))
            }
            None if is_section_empty(report, section) => {
                spans.push(Span::styled("✓", Style::default().fg(Color::Green)))
            }
            None => {}
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(summary_container), area);
}
