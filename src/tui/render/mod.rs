pub mod detail_view;
pub mod home_view;
pub mod page_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;
use super::transition::ViewStage;

/// Main render function — dispatches on the controller's view stage
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content area | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    match app.controller.view_stage() {
        ViewStage::Home | ViewStage::Launching => {
            home_view::render_home_view(frame, app, chunks[0]);
        }
        ViewStage::PageStable | ViewStage::PageFading => {
            page_view::render_page_view(frame, app, chunks[0]);
        }
    }

    status_row::render_status_row(frame, app, chunks[1]);
}
