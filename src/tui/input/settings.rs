use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, SettingsRow};

/// Settings tab: pick a row and cycle its value
pub(super) fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.settings_cursor = (app.settings_cursor + 1).min(SettingsRow::ALL.len() - 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.cycle_setting(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::tests::{press, sample_app};
    use crate::model::config::{EmailProvider, ResponseTone};

    #[test]
    fn cycles_selected_row_without_desk() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.desk.config.settings.provider, EmailProvider::Outlook);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.settings_cursor, 2);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.desk.config.settings.tone, ResponseTone::Friendly);
        // Nothing on disk, nothing to report
        assert!(app.status_message.is_none());
    }

    #[test]
    fn inbox_keys_do_nothing_on_settings() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.is_none());
    }
}
