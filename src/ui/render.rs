use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{body_panes, layout_regions};
use crate::ui::list::{render_delete_confirm, render_list, ListPaneView};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.stats(), app.focus()), header);
    frame.render_widget(Clear, body);

    let (form_area, list_area) = body_panes(body);
    render_form(frame, form_area, app.form(), app.focus() == Focus::Form);
    render_list(
        frame,
        list_area,
        &ListPaneView {
            catalog: app.store().snapshot(),
            stats: app.stats(),
            pane: app.list(),
            focused: app.focus() == Focus::List,
            config: app.config(),
        },
    );

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);

    if let Some(pending) = app.pending_delete() {
        render_delete_confirm(frame, body, pending);
    }
}
