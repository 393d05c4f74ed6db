use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ops::templater::{generate_response, select_template};
use crate::tui::app::{App, Mode};

use super::badge;

/// Render the detail panel for the selected email, or a placeholder
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(record) = app.selected_record() else {
        let mut lines: Vec<Line> = vec![Line::from(""); (inner.height / 2) as usize];
        lines.push(Line::from(Span::styled(
            "Select an email to view details",
            Style::default().fg(theme.dim).bg(bg),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(bg)),
            inner,
        );
        return;
    };

    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let space = || Span::styled(" ", Style::default().bg(bg));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(format!(" {}", record.subject), header)));
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", record.sender), text),
        Span::styled(format!("<{}>", record.sender_email), dim),
    ]));
    lines.push(Line::from(vec![
        space(),
        badge(
            record.sentiment.as_str(),
            theme.sentiment_color(record.sentiment),
            bg,
        ),
        space(),
        badge(
            record.priority.as_str(),
            theme.priority_color(record.priority),
            bg,
        ),
        space(),
        badge(
            record.status.as_str(),
            theme.status_color(record.status),
            bg,
        ),
    ]));
    if app.session.selection_hidden(&app.desk.store) {
        lines.push(Line::from(Span::styled(" (hidden by current filter)", dim)));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Contact", header)));
    lines.push(Line::from(Span::styled(
        format!("  \u{2709} {}", record.sender_email),
        text,
    )));
    if let Some(phone) = &record.phone {
        lines.push(Line::from(Span::styled(format!("  \u{260E} {}", phone), text)));
    }
    lines.push(Line::from(Span::styled(
        format!("  \u{25F7} {}", record.timestamp.format("%Y-%m-%d %H:%M UTC")),
        text,
    )));
    if !record.requirements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Requirements", header)));
        for req in &record.requirements {
            lines.push(Line::from(Span::styled(
                format!("  \u{2022} {}", req),
                Style::default().fg(theme.purple).bg(bg),
            )));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Email Content", header)));
    for body_line in record.body.lines() {
        lines.push(Line::from(Span::styled(format!(" {}", body_line), text)));
    }
    lines.push(Line::from(""));

    let edited = app.session.draft != generate_response(record);
    let mut response_header = vec![
        Span::styled(" AI Response ", header),
        Span::styled(format!("({})", select_template(record).label()), dim),
    ];
    if edited {
        response_header.push(Span::styled(" edited", Style::default().fg(theme.yellow).bg(bg)));
    }
    lines.push(Line::from(response_header));

    let editing = app.mode == Mode::EditDraft;
    let draft_style = if editing {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        text
    };
    let mut draft_lines: Vec<Line> = app
        .session
        .draft
        .split('\n')
        .map(|l| Line::from(Span::styled(format!(" {}", l), draft_style)))
        .collect();
    if editing && let Some(last) = draft_lines.last_mut() {
        last.spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
    }
    lines.extend(draft_lines);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " e edit  r regenerate  x send  w save draft",
        dim,
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0)),
        inner,
    );
}
