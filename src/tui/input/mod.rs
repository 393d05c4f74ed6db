mod edit;
mod navigate;
mod search;
mod settings;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use edit::handle_edit;
use navigate::handle_navigate;
use search::handle_search;
use settings::handle_settings;

use crate::ops::session::Tab;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => {
            if handle_global(app, key) {
                return;
            }
            match app.session.tab {
                Tab::Inbox => handle_navigate(app, key),
                Tab::Settings => handle_settings(app, key),
                Tab::Analytics => {}
            }
        }
        Mode::Search => handle_search(app, key),
        Mode::EditDraft => handle_edit(app, key),
    }
}

/// Keys that mean the same thing on every tab. Returns true if consumed.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => app.switch_tab(Tab::Inbox),
        KeyCode::Char('2') => app.switch_tab(Tab::Analytics),
        KeyCode::Char('3') => app.switch_tab(Tab::Settings),
        KeyCode::Tab => app.switch_tab(app.session.tab.next()),
        _ => return false,
    }
    true
}
