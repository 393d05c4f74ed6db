use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, SettingsRow};

/// Render the Settings tab. Values here are display-only.
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let settings = &app.desk.config.settings;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(format!(" {}", app.desk.config.desk.name), header)),
        Line::from(""),
    ];

    for (i, row) in SettingsRow::ALL.into_iter().enumerate() {
        let is_cursor = i == app.settings_cursor;
        let row_bg = if is_cursor { theme.selection_bg } else { bg };
        let marker = if is_cursor { " \u{25B8} " } else { "   " };
        let value = match row {
            SettingsRow::Provider => settings.provider.label(),
            SettingsRow::Model => settings.model.label(),
            SettingsRow::Tone => settings.tone.label(),
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.highlight).bg(row_bg)),
            Span::styled(
                format!("{:<16}", row.label()),
                Style::default().fg(theme.text).bg(row_bg),
            ),
            Span::styled(
                value,
                Style::default()
                    .fg(theme.highlight)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("   {:<16}", "Data source"), text),
        Span::styled(app.desk.source_name.clone(), dim),
    ]));
    let desk_path = app
        .desk
        .desk_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    lines.push(Line::from(vec![
        Span::styled(format!("   {:<16}", "Desk"), text),
        Span::styled(desk_path, dim),
    ]));
    lines.push(Line::from(""));
    let note = if app.desk.desk_dir.is_some() {
        "   Enter cycles the value. Changes are saved to desk.toml."
    } else {
        "   Enter cycles the value. No desk on disk, changes are not saved."
    };
    lines.push(Line::from(Span::styled(note, dim)));

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
