// src/ui/widgets/mod.rs

use crate::core::models::Severity;
use ratatui::style::{Color, Style, Stylize};

pub mod footer;
pub mod input;
pub mod report_view;
pub mod status;
pub mod summary;

/// Terminal style for a severity, keyed on its lowercase token like a CSS class.
pub fn severity_style(severity: &Severity) -> Style {
    let color = match severity.token().as_str() {
        "critical" => Color::Magenta,
        "high" => Color::Red,
        "medium" => Color::Yellow,
        "low" => Color::Green,
        _ => Color::Gray,
    };
    Style::default().fg(color).bold()
}
