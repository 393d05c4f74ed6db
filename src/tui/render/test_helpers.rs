use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::desk_io::load_with_source;
use crate::io::source::{BuiltinSource, EmailSource};
use crate::model::config::DeskConfig;
use crate::model::desk::Desk;
use crate::ops::triage::TriageStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over the builtin four-message inbox, with no desk on disk.
pub fn sample_app() -> App {
    let mut app = App::new(load_with_source(None, DeskConfig::default(), &BuiltinSource).unwrap());
    app.desk.config.ui.show_key_hints = true;
    app
}

/// An App with no records at all.
pub fn empty_app() -> App {
    let desk = Desk {
        desk_dir: None,
        config: DeskConfig::default(),
        store: TriageStore::default(),
        rejected: Vec::new(),
        source_name: BuiltinSource.name(),
    };
    App::new(desk)
}

/// Render the whole screen for `app`.
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}
