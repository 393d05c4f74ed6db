use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::email::EmailRecord;
use crate::tui::app::App;
use crate::util::unicode::{display_width, padding_for, truncate_to_width};

use super::{badge, detail_view, push_highlighted_spans, search_regex};

/// Rows per list entry: sender, subject, badges, spacer
const ITEM_HEIGHT: usize = 4;

/// Render the inbox: email list on the left, detail panel on the right
pub fn render_inbox_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_email_list(frame, app, chunks[0]);
    detail_view::render_detail_view(frame, app, chunks[1]);
}

fn render_email_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;
    let visible_count = app.visible().len();

    if visible_count == 0 {
        let msg = if app.desk.store.is_empty() {
            " No emails loaded"
        } else {
            " No emails match the current filter"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor's entry on screen
    let per_page = (height / ITEM_HEIGHT).max(1);
    if app.cursor < app.list_scroll {
        app.list_scroll = app.cursor;
    } else if app.cursor >= app.list_scroll + per_page {
        app.list_scroll = app.cursor + 1 - per_page;
    }
    app.list_scroll = app.list_scroll.min(visible_count.saturating_sub(per_page));

    let search_re = search_regex(&app.session.filter.search);
    let app = &*app;
    let mut lines: Vec<Line> = Vec::new();
    for (i, record) in app
        .visible()
        .into_iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(per_page)
    {
        let is_cursor = i == app.cursor;
        let is_selected = app.session.selected.as_deref() == Some(record.id.as_str());
        item_lines(app, record, is_cursor, is_selected, width, search_re.as_ref(), &mut lines);
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

fn item_lines<'a>(
    app: &App,
    record: &EmailRecord,
    is_cursor: bool,
    is_selected: bool,
    width: usize,
    search_re: Option<&regex::Regex>,
    lines: &mut Vec<Line<'a>>,
) {
    let theme = &app.theme;
    let bg = if is_selected { theme.selection_bg } else { theme.background };
    let bar = if is_cursor {
        Span::styled("\u{258C}", Style::default().fg(theme.highlight).bg(bg))
    } else {
        Span::styled(" ", Style::default().bg(bg))
    };
    let fill = |spans: &mut Vec<Span<'a>>| {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
    };
    let hl = Style::default().fg(theme.search_match_fg).bg(theme.search_match_bg);

    // Sender and time
    let time = record.timestamp.format("%b %d %H:%M").to_string();
    let name_budget = width.saturating_sub(display_width(&time) + 3);
    let name = truncate_to_width(&record.sender, name_budget);
    let name_style = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![bar.clone()];
    push_highlighted_spans(&mut spans, &name, name_style, hl, search_re);
    spans.push(Span::styled(
        padding_for(&name, name_budget + 1),
        Style::default().bg(bg),
    ));
    spans.push(Span::styled(time, Style::default().fg(theme.dim).bg(bg)));
    fill(&mut spans);
    lines.push(Line::from(spans));

    // Subject
    let subject = truncate_to_width(&record.subject, width.saturating_sub(2));
    let mut spans = vec![bar.clone()];
    push_highlighted_spans(
        &mut spans,
        &subject,
        Style::default().fg(theme.text).bg(bg),
        hl,
        search_re,
    );
    fill(&mut spans);
    lines.push(Line::from(spans));

    // Badges
    let mut spans = vec![
        bar,
        badge(
            record.sentiment.as_str(),
            theme.sentiment_color(record.sentiment),
            bg,
        ),
        Span::styled(" ", Style::default().bg(bg)),
        badge(
            record.priority.as_str(),
            theme.priority_color(record.priority),
            bg,
        ),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            record.status.as_str(),
            Style::default().fg(theme.status_color(record.status)).bg(bg),
        ),
    ];
    fill(&mut spans);
    lines.push(Line::from(spans));

    lines.push(Line::from(Span::styled(
        " ".repeat(width),
        Style::default().bg(theme.background),
    )));
}
