//! Key handling for the session screen and the branch picker

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key press.
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.cancel();
        return;
    }

    if app.is_picker_open() {
        handle_picker_key(app, code, modifiers);
        return;
    }

    match code {
        KeyCode::Char('b') => app.open_picker(),
        KeyCode::Enter => app.accept(),
        KeyCode::Char('q') | KeyCode::Esc => app.cancel(),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.with_picker(|picker, host| match code {
        KeyCode::Esc => picker.dismiss(host),
        KeyCode::Enter => {
            picker.confirm(host);
        }
        KeyCode::Up => picker.select_prev(),
        KeyCode::Down => picker.select_next(),
        KeyCode::Tab | KeyCode::BackTab => picker.toggle_focus(),
        KeyCode::Backspace => picker.backspace(),
        KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            picker.push_char(c);
        }
        _ => {}
    });
}
