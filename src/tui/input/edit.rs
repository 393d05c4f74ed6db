use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Typing into the response draft. The cursor is always at the end.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let mut draft = app.session.draft.clone();
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Enter => draft.push('\n'),
        KeyCode::Backspace => pop_grapheme(&mut draft),
        KeyCode::Char(c) => draft.push(c),
        _ => return,
    }
    app.session.edit_draft(draft);
}
