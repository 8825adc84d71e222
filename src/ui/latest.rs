//! Latest submitted feedback panel

use crate::app::App;
use crate::state::FeedbackRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the latest-feedback card. Nothing is rendered before the first
/// submission.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(record) = &app.state.latest_feedback else {
        return;
    };

    let paragraph = Paragraph::new(record_lines(record))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Latest Feedback ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}

/// Build the display lines for a record. The message keeps its embedded
/// line breaks, one rendered line per segment.
fn record_lines(record: &FeedbackRecord) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
            Span::raw(record.name.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Email: ", Style::default().fg(Color::DarkGray)),
            Span::raw(record.email.as_str()),
        ]),
        Line::from(Span::styled(
            "Message:",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for segment in record.message.split('\n') {
        lines.push(Line::from(Span::raw(segment)));
    }

    lines
}
