// src/ui/widgets/input.rs
use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the URL input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default().borders(Borders::ALL).title("Website URL");
    let input_paragraph = if app.input.is_empty() {
        Paragraph::new("Enter website URL").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.input.as_str()).style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(input_paragraph.block(input_block), area);

    // No cursor while a scan is running: input is ignored then.
    if !app.scan.is_loading() {
        frame.set_cursor_position(cursor_position(area, &app.input));
    }
}

/// Cursor just past the typed text, kept inside the box borders.
fn cursor_position(area: Rect, input: &str) -> (u16, u16) {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let last_column = area.x.saturating_add(area.width.saturating_sub(2));
    let x = area.x.saturating_add(typed).saturating_add(1).min(last_column);
    (x, area.y.saturating_add(1))
}
