use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::session::Tab;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    match app.session.tab {
        Tab::Inbox => {
            lines.push(Line::from(Span::styled(" Inbox", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move and select", key_style, desc_style);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
            add_binding(&mut lines, " PgUp/PgDn", "Scroll details", key_style, desc_style);
            add_binding(&mut lines, " /", "Search sender and subject", key_style, desc_style);
            add_binding(&mut lines, " s", "Cycle sentiment filter", key_style, desc_style);
            add_binding(&mut lines, " p", "Cycle priority filter", key_style, desc_style);
            add_binding(&mut lines, " c", "Clear filters", key_style, desc_style);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(" Response", header_style)));
            add_binding(&mut lines, " e", "Edit draft (Esc to finish)", key_style, desc_style);
            add_binding(&mut lines, " r", "Regenerate from template", key_style, desc_style);
            add_binding(&mut lines, " x", "Send", key_style, desc_style);
            add_binding(&mut lines, " w", "Save draft", key_style, desc_style);
        }
        Tab::Settings => {
            lines.push(Line::from(Span::styled(" Settings", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Choose setting", key_style, desc_style);
            add_binding(&mut lines, " Enter/Space", "Cycle value", key_style, desc_style);
        }
        Tab::Analytics => {}
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " 1/2/3", "Inbox / Analytics / Settings", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Next tab", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
