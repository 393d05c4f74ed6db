use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::session::Tab;
use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let spans = match &app.status_message {
                Some(msg) => vec![Span::styled(
                    format!(" {}", msg),
                    Style::default().fg(app.theme.yellow).bg(bg),
                )],
                None => Vec::new(),
            };
            let hint = if app.desk.config.ui.show_key_hints {
                navigate_hint(app.session.tab)
            } else {
                ""
            };
            (spans, hint)
        }
        Mode::Search => (
            vec![
                Span::styled(
                    format!("/{}", app.session.filter.search),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ],
            "Enter keep  Esc cancel",
        ),
        Mode::EditDraft => (
            vec![Span::styled(
                " -- EDIT DRAFT --",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )],
            "Enter newline  Esc done",
        ),
    };

    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if !hint.is_empty() && content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn navigate_hint(tab: Tab) -> &'static str {
    match tab {
        Tab::Inbox => "/ search  s/p filter  e edit  ? help",
        Tab::Analytics => "1-3 tabs  ? help  q quit",
        Tab::Settings => "j/k move  Enter cycle  ? help",
    }
}
