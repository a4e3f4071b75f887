// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, computed once per frame.
pub struct AppLayout {
    pub input: Rect,
    pub status: Rect,
    pub report: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame vertically into input, status line, content and footer; the
/// content row holds the report (70%) next to the summary (30%).
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[2]);

    AppLayout {
        input: main_chunks[0],
        status: main_chunks[1],
        report: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_cover_the_frame() {
        let layout = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.report.width + layout.summary.width, 100);
    }
}
