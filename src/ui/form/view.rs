use crate::ui::form::state::{Field, FormState, Notice};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CATEGORY_PLACEHOLDER: &str = "< choose a category >";

pub fn render_form(frame: &mut Frame<'_>, area: Rect, state: &FormState, pane_focused: bool) {
    let mut lines = Vec::new();

    for field in Field::ALL {
        let is_focused = pane_focused && state.focused == field;
        let label_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = state.value(field);
        let mut value_line = match field {
            Field::Category if value.is_empty() => Line::from(Span::styled(
                CATEGORY_PLACEHOLDER,
                Style::default().fg(MUTED_TEXT),
            )),
            Field::Category => Line::from(vec![
                Span::styled("< ", Style::default().fg(MUTED_TEXT)),
                Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
                Span::styled(" >", Style::default().fg(MUTED_TEXT)),
            ]),
            _ => {
                let cursor = if is_focused { "_" } else { "" };
                Line::from(vec![
                    Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)),
                    Span::styled(cursor, Style::default().fg(ACCENT)),
                ])
            }
        };
        if is_focused {
            value_line = value_line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    match &state.notice {
        Some(Notice::Success { message, .. }) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ))),
        Some(Notice::Invalid { message }) => lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => {}
    }

    lines.push(Line::from(Span::styled(
        "Tab/Shift+Tab: Field  ←/→: Category  Enter: Add product",
        Style::default().fg(MUTED_TEXT),
    )));

    let border = if pane_focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Add Product ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
