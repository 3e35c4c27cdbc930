use crate::catalog::{CatalogState, CatalogStats, ListView, Product};
use crate::config::Config;
use crate::format::{format_currency, format_date};
use crate::ui::list::state::{ListPaneState, PendingDelete};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, CATEGORY_TAG, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub const EMPTY_TITLE: &str = "No products yet";
pub const EMPTY_HINT: &str = "Add the first product with the form";
pub const LOADING_TEXT: &str = "Loading products...";

/// Everything the list pane reads.
pub struct ListPaneView<'a> {
    pub catalog: &'a CatalogState,
    pub stats: CatalogStats,
    pub pane: &'a ListPaneState,
    pub focused: bool,
    pub config: &'a Config,
}

pub fn render_list(frame: &mut Frame<'_>, area: Rect, view: &ListPaneView<'_>) {
    let border = if view.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(" Products ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [stats_area, content_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(inner);

    match ListView::from_state(view.catalog) {
        ListView::Loading => {
            frame.render_widget(
                Paragraph::new(LOADING_TEXT)
                    .style(Style::default().fg(MUTED_TEXT))
                    .alignment(Alignment::Center),
                inner,
            );
        }
        ListView::Error(message) => {
            let banner = Paragraph::new(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)),
                Span::styled(message, Style::default().fg(STATUS_ERROR)),
            ]))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            );
            frame.render_widget(banner, inner);
        }
        ListView::Empty => {
            render_stats(frame, stats_area, view);
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    EMPTY_TITLE,
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(EMPTY_HINT, Style::default().fg(MUTED_TEXT))),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                content_area,
            );
        }
        ListView::Products => {
            render_stats(frame, stats_area, view);
            render_cards(frame, content_area, view);
        }
    }
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, view: &ListPaneView<'_>) {
    let stats = view.stats;
    let cells = [
        ("Total Products", stats.total_products.to_string()),
        (
            "Total Stock Value",
            format_currency(stats.total_value, &view.config.currency),
        ),
        ("Categories", stats.category_count.to_string()),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    for ((title, value), cell) in cells.into_iter().zip(areas.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(widget, *cell);
    }
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, view: &ListPaneView<'_>) {
    let items: Vec<ListItem> = view
        .catalog
        .products
        .iter()
        .map(|product| ListItem::new(card_lines(product, view.config)))
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(view.pane.selected));

    let highlight = if view.focused {
        Style::default().bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default()
    };
    let list = List::new(items).highlight_style(highlight);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Lines of one product card.
pub fn card_lines(product: &Product, config: &Config) -> Vec<Line<'static>> {
    let stock_style = if product.in_stock() {
        Style::default().fg(STATUS_OK)
    } else {
        Style::default().fg(STATUS_ERROR)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                product.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format_currency(product.price, &config.currency),
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("[{}]", product.category),
                Style::default().fg(CATEGORY_TAG),
            ),
            Span::raw("  "),
            Span::styled(format!("Stock: {}", product.stock), stock_style),
        ]),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    if let Some(url) = &product.image_url {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", url),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("Created: {}", format_date(&product.created_at, &config.date)),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ),
        Span::raw("  "),
        Span::styled("[d] Delete", Style::default().fg(STATUS_ERROR)),
    ]));
    lines.push(Line::from(""));
    lines
}

pub fn render_delete_confirm(frame: &mut Frame<'_>, area: Rect, pending: &PendingDelete) {
    let lines = vec![
        Line::from(format!(
            "Are you sure you want to delete \"{}\"?",
            pending.name
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: Delete  n/Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    PopupDialog::new("Delete Product", lines).render(frame, area);
}
