use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Bordered popup sized to its content and centered in the given area.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    min_width: u16,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            min_width: 40,
        }
    }

    pub fn render(self, frame: &mut Frame<'_>, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = content_width.saturating_add(4).max(self.min_width);
        let height = (self.lines.len() as u16).saturating_add(2);
        let popup_area = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled(self.title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(self.lines).block(block), popup_area);
    }
}
