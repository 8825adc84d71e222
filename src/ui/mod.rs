//! UI module for rendering the TUI

mod components;
mod feedback_form;
mod field_renderer;
mod latest;
mod layout;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);
    let column = layout::centered_column(content_area, app.config.form_width());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(feedback_form::FORM_HEIGHT), // Entry card
            Constraint::Min(0),                             // Latest feedback
        ])
        .split(column);

    feedback_form::draw(frame, chunks[0], app);
    latest::draw(frame, chunks[1], app);

    layout::draw_status_bar(frame, app);
}
