use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::analytics::{
    PRIORITY_BREAKDOWN, RESPONSE_METRICS, SENTIMENT_DISTRIBUTION, percent_bar,
};
use crate::tui::app::App;

const BAR_WIDTH: usize = 24;

/// Render the Analytics tab
pub fn render_analytics_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let header = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(theme.text).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);

    let stats = app.desk.store.quick_stats();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Quick Stats", header)),
        Line::from(vec![
            Span::styled("  Today's Emails ", dim),
            Span::styled(format!("{:<4}", stats.total), header),
            Span::styled("Pending ", dim),
            Span::styled(
                format!("{:<4}", stats.pending),
                Style::default().fg(theme.yellow).bg(bg),
            ),
            Span::styled("Urgent ", dim),
            Span::styled(
                stats.urgent.to_string(),
                Style::default().fg(theme.red).bg(bg),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Sentiment Distribution", header)),
    ];

    for (sentiment, percent) in SENTIMENT_DISTRIBUTION {
        lines.push(bar_line(
            app,
            sentiment.as_str(),
            percent,
            theme.sentiment_color(sentiment),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Priority Breakdown", header)));
    for (priority, percent) in PRIORITY_BREAKDOWN {
        lines.push(bar_line(
            app,
            priority.as_str(),
            percent,
            theme.priority_color(priority),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Response Time Metrics", header)));
    for (value, caption) in RESPONSE_METRICS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", value), Style::default().fg(theme.highlight).bg(bg)),
            Span::styled(caption, text),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn bar_line<'a>(app: &App, label: &str, percent: u8, color: Color) -> Line<'a> {
    let bg = app.theme.background;
    let (filled, empty) = percent_bar(percent, BAR_WIDTH);
    Line::from(vec![
        Span::styled(format!("  {:<10}", label), Style::default().fg(app.theme.text).bg(bg)),
        Span::styled("\u{2588}".repeat(filled), Style::default().fg(color).bg(bg)),
        Span::styled(
            "\u{2591}".repeat(empty),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(
            format!(" {:>3}%", percent),
            Style::default().fg(app.theme.text).bg(bg),
        ),
    ])
}
