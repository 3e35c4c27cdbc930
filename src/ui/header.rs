use crate::catalog::CatalogStats;
use crate::ui::app::Focus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Product Catalog";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, stats: CatalogStats, focus: Focus) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let focus_label = match focus {
            Focus::Form => "Form",
            Focus::List => "List",
        };
        let noun = if stats.total_products == 1 {
            "product"
        } else {
            "products"
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} {}", stats.total_products, noun), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Focus: {}", focus_label), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
