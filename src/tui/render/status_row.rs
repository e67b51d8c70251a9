use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::transition::ViewStage;

/// Render the status row (bottom of screen): key hints for the
/// interactive stages, blank while an animation runs.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.controller.view_stage() {
        ViewStage::Home => " j/k move  Enter open  q quit",
        ViewStage::PageStable => " j/k move  Enter select  Esc back  q quit",
        ViewStage::Launching | ViewStage::PageFading => "",
    };

    let mut text = hint.to_string();
    if text.chars().count() < width {
        text.push_str(&" ".repeat(width - text.chars().count()));
    }
    let line = Line::from(Span::styled(text, Style::default().fg(app.theme.dim).bg(bg)));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
