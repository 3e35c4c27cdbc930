use crate::ui::app::{App, Focus};
use crate::ui::form::{Field, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C quits like Ctrl+Q.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The confirmation popup captures every other key.
    if app.pending_delete().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if matches!(key.code, KeyCode::F(2)) || is_ctrl_char(key, 'l') {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::FocusPrev),
        KeyCode::Esc => app.toggle_focus(),
        KeyCode::Enter => app.submit_form_from_keyboard(Instant::now()),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Left if app.form().focused == Field::Category => {
            app.dispatch_form(FormIntent::CycleCategory { forward: false })
        }
        KeyCode::Right if app.form().focused == Field::Category => {
            app.dispatch_form(FormIntent::CycleCategory { forward: true })
        }
        KeyCode::Char(' ') if app.form().focused == Field::Category => {
            app.dispatch_form(FormIntent::CycleCategory { forward: true })
        }
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_form(FormIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'x') {
        app.clear_catalog();
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Tab | KeyCode::Esc => app.toggle_focus(),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_char_ignores_plain_and_shifted_keys() {
        let plain = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let ctrl_shift = KeyEvent::new(
            KeyCode::Char('Q'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(!is_ctrl_char(plain, 'q'));
        assert!(is_ctrl_char(ctrl, 'q'));
        assert!(!is_ctrl_char(ctrl_shift, 'q'));
    }
}
