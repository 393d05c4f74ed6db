use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::desk_io::{discover_desk, load_desk, save_setting};
use crate::model::desk::Desk;
use crate::model::email::EmailRecord;
use crate::model::filter::FilterCriteria;
use crate::ops::session::{HookAction, LogHooks, ResponseHooks, Session, Tab};
use crate::util::logging;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the search box; the filter updates on every keystroke
    Search,
    /// Typing into the response draft
    EditDraft,
}

/// Rows on the Settings tab, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Provider,
    Model,
    Tone,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [SettingsRow::Provider, SettingsRow::Model, SettingsRow::Tone];

    pub fn label(self) -> &'static str {
        match self {
            SettingsRow::Provider => "Email Provider",
            SettingsRow::Model => "AI Model",
            SettingsRow::Tone => "Response Tone",
        }
    }

    /// Key under `[settings]` in desk.toml
    pub fn key(self) -> &'static str {
        match self {
            SettingsRow::Provider => "provider",
            SettingsRow::Model => "model",
            SettingsRow::Tone => "tone",
        }
    }
}

/// Main application state
pub struct App {
    pub desk: Desk,
    pub session: Session,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible list row
    pub list_scroll: usize,
    /// Vertical scroll of the detail panel
    pub detail_scroll: u16,
    pub settings_cursor: usize,
    pub show_help: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Search text to restore if the search is cancelled
    pub search_before: Option<String>,
    pub hooks: Box<dyn ResponseHooks>,
}

impl App {
    pub fn new(desk: Desk) -> Self {
        let session = Session::new(&desk.store);
        let theme = Theme::from_config(&desk.config.ui);
        let status_message = match desk.rejected.len() {
            0 => None,
            1 => Some("1 record rejected (run `desk check`)".to_string()),
            n => Some(format!("{} records rejected (run `desk check`)", n)),
        };
        App {
            desk,
            session,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            list_scroll: 0,
            detail_scroll: 0,
            settings_cursor: 0,
            show_help: false,
            status_message,
            search_before: None,
            hooks: Box::new(LogHooks),
        }
    }

    pub fn visible(&self) -> Vec<&EmailRecord> {
        self.session.visible(&self.desk.store)
    }

    pub fn selected_record(&self) -> Option<&EmailRecord> {
        self.session.selected_record(&self.desk.store)
    }

    /// Move the cursor by `delta` rows and select the record under it
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let target = self.cursor.saturating_add_signed(delta).min(len - 1);
        self.cursor_to(target);
    }

    /// Put the cursor on `index` (clamped) and select that record
    pub fn cursor_to(&mut self, index: usize) {
        let visible = self.session.visible(&self.desk.store);
        let Some(last) = visible.len().checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        let record = visible[index];
        self.cursor = index;
        if self.session.selected.as_deref() != Some(record.id.as_str()) {
            self.session.select(record);
            self.detail_scroll = 0;
        }
    }

    /// Apply a new filter and keep the cursor on the selection when it is
    /// still visible
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.session.change_filter(criteria);
        self.sync_cursor();
    }

    pub fn sync_cursor(&mut self) {
        let visible = self.visible();
        let pos = self
            .session
            .selected
            .as_deref()
            .and_then(|id| visible.iter().position(|r| r.id == id));
        let len = visible.len();
        self.cursor = match pos {
            Some(p) => p,
            None => self.cursor.min(len.saturating_sub(1)),
        };
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.session.switch_tab(tab);
    }

    pub fn regenerate(&mut self) {
        match self.session.regenerate(&self.desk.store) {
            Ok(()) => self.status_message = Some("draft regenerated".to_string()),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Hand the draft to the response hooks
    pub fn dispatch(&mut self, action: HookAction) {
        let result = self
            .session
            .dispatch(action, &self.desk.store, self.hooks.as_mut());
        self.status_message = Some(match result {
            Ok(()) => {
                let sender = self
                    .selected_record()
                    .map(|r| r.sender.clone())
                    .unwrap_or_default();
                format!("{}: draft for {} handed off", action.label(), sender)
            }
            Err(e) => e.to_string(),
        });
    }

    /// Advance the setting under the settings cursor and save it when a desk
    /// exists on disk
    pub fn cycle_setting(&mut self) {
        let row = SettingsRow::ALL[self.settings_cursor.min(SettingsRow::ALL.len() - 1)];
        let settings = &mut self.desk.config.settings;
        let value = match row {
            SettingsRow::Provider => {
                settings.provider = settings.provider.next();
                settings.provider.key()
            }
            SettingsRow::Model => {
                settings.model = settings.model.next();
                settings.model.key()
            }
            SettingsRow::Tone => {
                settings.tone = settings.tone.next();
                settings.tone.key()
            }
        };
        if let Some(dir) = &self.desk.desk_dir
            && let Err(e) = save_setting(dir, row.key(), value)
        {
            tracing::warn!(error = %e, "could not save setting");
            self.status_message = Some(format!("could not save: {}", e));
        }
    }
}

/// Run the TUI application
pub fn run(start: &Path, data: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // Logging has to be routed to the desk log before anything is loaded
    logging::init_tui(discover_desk(start).ok().as_deref());
    let desk = load_desk(start, data)?;
    let mut app = App::new(desk);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
