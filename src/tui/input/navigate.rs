use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::session::HookAction;
use crate::tui::app::{App, Mode};

/// Inbox keys in navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor_to(0),
        (_, KeyCode::Char('G') | KeyCode::End) => app.cursor_to(usize::MAX),
        (_, KeyCode::Enter) => app.cursor_to(app.cursor),

        // Detail panel scroll
        (KeyModifiers::CONTROL, KeyCode::Char('d')) | (_, KeyCode::PageDown) => {
            app.detail_scroll = app.detail_scroll.saturating_add(5);
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) | (_, KeyCode::PageUp) => {
            app.detail_scroll = app.detail_scroll.saturating_sub(5);
        }

        // Filters
        (_, KeyCode::Char('/')) => {
            app.search_before = Some(app.session.filter.search.clone());
            app.mode = Mode::Search;
        }
        (_, KeyCode::Char('s')) => {
            let mut criteria = app.session.filter.clone();
            criteria.cycle_sentiment();
            app.apply_filter(criteria);
        }
        (_, KeyCode::Char('p')) => {
            let mut criteria = app.session.filter.clone();
            criteria.cycle_priority();
            app.apply_filter(criteria);
        }
        (_, KeyCode::Char('c')) => app.apply_filter(Default::default()),

        // Draft
        (_, KeyCode::Char('e')) => {
            if app.session.selected.is_some() {
                app.mode = Mode::EditDraft;
            }
        }
        (_, KeyCode::Char('r')) => app.regenerate(),
        (_, KeyCode::Char('x')) => app.dispatch(HookAction::Send),
        (_, KeyCode::Char('w')) => app.dispatch(HookAction::SaveDraft),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::super::tests::{press, sample_app};
    use crate::model::email::{Priority, Sentiment};
    use crate::ops::templater::generate_response;
    use crate::tui::app::Mode;

    #[test]
    fn j_k_move_and_select() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.session.selected.as_deref(), Some("3"));
        assert!(app.session.draft.starts_with("Dear Emma Davis,"));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.session.selected.as_deref(), Some("2"));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.session.selected.as_deref(), Some("4"));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.session.selected.as_deref(), Some("1"));
    }

    #[test]
    fn filter_keys_cycle() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.session.filter.sentiment, Some(Sentiment::Positive));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.session.filter.priority, Some(Priority::Urgent));
        // positive + urgent matches nothing, selection survives
        assert!(app.visible().is_empty());
        assert_eq!(app.session.selected.as_deref(), Some("1"));
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.session.filter.is_active());
        assert_eq!(app.visible().len(), 4);
    }

    #[test]
    fn movement_on_empty_list_is_noop() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.session.selected.as_deref(), Some("1"));
    }

    #[test]
    fn regenerate_restores_template() {
        let mut app = sample_app();
        app.session.edit_draft("scratch".into());
        press(&mut app, KeyCode::Char('r'));
        let sarah = app.desk.store.get("1").unwrap();
        assert_eq!(app.session.draft, generate_response(sarah));
        assert_eq!(app.status_message.as_deref(), Some("draft regenerated"));
    }

    #[test]
    fn e_enters_edit_only_with_selection() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::EditDraft);

        let mut app = sample_app();
        app.session.selected = None;
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn send_without_selection_reports_error() {
        let mut app = sample_app();
        app.session.selected = None;
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status_message.as_deref(), Some("no email selected"));
    }
}
