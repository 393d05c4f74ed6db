use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Live search: every keystroke replaces the filter's search text
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    let mut criteria = app.session.filter.clone();
    match key.code {
        // Cancel: put back the search text from before `/`
        KeyCode::Esc => {
            if let Some(before) = app.search_before.take() {
                criteria.search = before;
                app.apply_filter(criteria);
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.search_before = None;
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            pop_grapheme(&mut criteria.search);
            app.apply_filter(criteria);
        }
        KeyCode::Char(c) => {
            criteria.search.push(c);
            app.apply_filter(criteria);
        }
        _ => {}
    }
}
