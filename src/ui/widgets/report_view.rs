// src/ui/widgets/report_view.rs

use crate::app::App;
use crate::core::models::{ScanPhase, VulnerabilityReport};
use crate::core::summary::{ReportSummary, Section, is_section_empty};
use crate::ui::widgets::severity_style;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

pub fn render_report_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Vulnerability Report (Navigate with ↑ ↓)");

    let (Some(report), Some(summary)) = (app.scan.report(), app.summary.as_ref()) else {
        let placeholder = match app.phase() {
            ScanPhase::Loading => "Scanning in progress...",
            _ => "Enter a website URL and press Enter to scan.",
        };
        frame.render_widget(
            Paragraph::new(placeholder)
                .alignment(Alignment::Center)
                .block(main_block),
            area,
        );
        return;
    };

    let lines = build_report_lines(report, summary);
    let line_count = lines.len();
    let max_offset = line_count.saturating_sub(1);
    if app.scroll_offset > max_offset {
        app.scroll_offset = max_offset;
    }
    app.report_scroll_state = app
        .report_scroll_state
        .content_length(line_count)
        .position(app.scroll_offset);

    let paragraph = Paragraph::new(lines)
        .block(main_block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_row(app.scroll_offset), 0));
    frame.render_widget(paragraph, area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
    frame.render_stateful_widget(scrollbar, area, &mut app.report_scroll_state);
}

/// Paragraph scroll takes a `u16` row; longer reports stay pinned to the last row.
fn scroll_row(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Lines for every section, headline severity in the header where the section has one.
pub fn build_report_lines(
    report: &VulnerabilityReport,
    summary: &ReportSummary,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in Section::all() {
        let mut header = vec![Span::styled(
            section.title(),
            Style::default().bold().underlined(),
        )];
        if let Some(severity) = summary.headline(section) {
            header.push(Span::raw(" | Severity: "));
            header.push(Span::styled(severity.to_string(), severity_style(severity)));
        }
        lines.push(Line::from(header));

        if is_section_empty(report, section) {
            lines.push(Line::from(Span::styled(
                format!("  {}", section.empty_message()),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.extend(section_entries(report, section));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn section_entries(report: &VulnerabilityReport, section: Section) -> Vec<Line<'static>> {
    match section {
        Section::Software => report
            .vulnerable_software
            .iter()
            .flat_map(|s| {
                let label = format!(
                    "  • Software: {} | Version: {} | Severity: ",
                    s.software, s.version
                );
                [
                    Line::from(vec![
                        Span::raw(label),
                        Span::styled(s.severity.to_string(), severity_style(&s.severity)),
                    ]),
                    Line::from(format!("    Vulnerability: {}", s.vulnerability)),
                ]
            })
            .collect(),
        Section::Directories => report
            .vulnerable_directories
            .iter()
            .map(|d| Line::from(format!("  • Directory: {}", d.directory)))
            .collect(),
        Section::Files => report
            .files()
            .map(|f| Line::from(format!("  • File: {}", f)))
            .collect(),
        Section::XssInUrl => report
            .has_xss_in_url_data
            .iter()
            .map(|x| Line::from(format!("  • Parameter: {}", x.parameter)))
            .collect(),
        Section::XssInForms => report
            .has_xss_in_forms_data
            .iter()
            .map(|x| Line::from(format!("  • Field: {}", x.field)))
            .collect(),
    }
}
