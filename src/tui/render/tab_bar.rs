use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::session::Tab;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Render the tab bar: tabs on the left, quick stats on the right, with a
/// separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled("\u{2709}", Style::default().fg(app.theme.purple).bg(bg)));
    spans.push(Span::styled(" ", bg_style));

    for tab in Tab::ALL {
        let is_current = app.session.tab == tab;
        let label = match tab {
            Tab::Inbox => format!(" {} {} ", tab.label(), app.desk.store.len()),
            _ => format!(" {} ", tab.label()),
        };
        spans.push(Span::styled(label, tab_style(app, is_current)));
        sep_cols.push(spans.iter().map(|s| display_width(&s.content)).sum());
        spans.push(sep.clone());
    }

    // Quick stats, right-aligned
    let stats = app.desk.store.quick_stats();
    let right = vec![
        Span::styled(
            format!("{} ", stats.pending),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        Span::styled("pending  ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            format!("{} ", stats.urgent),
            Style::default().fg(app.theme.red).bg(bg),
        ),
        Span::styled("urgent ", Style::default().fg(app.theme.dim).bg(bg)),
    ];
    let left_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let right_width: usize = right.iter().map(|s| display_width(&s.content)).sum();
    let width = area.width as usize;
    if left_width + right_width < width {
        spans.push(Span::styled(" ".repeat(width - left_width - right_width), bg_style));
        spans.extend(right);
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;
    let filter = &app.session.filter;

    let mut indicator: Vec<Span> = Vec::new();
    if app.session.tab == Tab::Inbox && filter.is_active() {
        indicator.push(Span::styled("filter: ", Style::default().fg(app.theme.purple).bg(bg)));
        let mut parts: Vec<Span> = Vec::new();
        if !filter.search.is_empty() {
            parts.push(Span::styled(
                format!("/{}", filter.search),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
        }
        if let Some(s) = filter.sentiment {
            parts.push(Span::styled(
                s.as_str(),
                Style::default().fg(app.theme.sentiment_color(s)).bg(bg),
            ));
        }
        if let Some(p) = filter.priority {
            parts.push(Span::styled(
                p.as_str(),
                Style::default().fg(app.theme.priority_color(p)).bg(bg),
            ));
        }
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                indicator.push(Span::styled(" ", Style::default().bg(bg)));
            }
            indicator.push(part);
        }
    }

    let indicator_width: usize = indicator.iter().map(|s| display_width(&s.content)).sum();
    // One space before the indicator, one after
    let separator_end = if indicator.is_empty() {
        width
    } else {
        width.saturating_sub(indicator_width + 2)
    };

    let mut sep_text = String::with_capacity(separator_end * 3);
    for col in 0..separator_end {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }

    let mut spans = vec![Span::styled(sep_text, Style::default().fg(dim).bg(bg))];
    if !indicator.is_empty() {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(indicator);
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
