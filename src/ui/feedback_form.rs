//! Feedback form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Total card height: borders plus two single-line fields, the message
/// area, and the submit button row
pub const FORM_HEIGHT: u16 = 2 + 3 + 3 + 6 + BUTTON_HEIGHT;

/// Draw the feedback entry card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Feedback Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Min(4),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    draw_field(frame, chunks[0], &form.name, form.active_field_index == 0);
    draw_field(frame, chunks[1], &form.email, form.active_field_index == 1);
    draw_field(frame, chunks[2], &form.message, form.active_field_index == 2);

    draw_submit_button(frame, chunks[3], app);
}

/// The submit button renders disabled until every required field has text,
/// the visible face of the required-field gate
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    render_button(
        frame,
        area,
        "Submit Feedback",
        form.is_button_row_active(),
        form.is_complete(),
    );
}
