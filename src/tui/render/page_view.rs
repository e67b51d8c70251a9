use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::transition::ViewStage;

use super::detail_view;

/// Render the detail page: header row, separator, then the page body.
/// While the fade runs the whole page drops to dim styling.
pub fn render_page_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(folder) = app.controller.active_page() else {
        return;
    };
    let faded = app.controller.view_stage() == ViewStage::PageFading;

    let bg = app.theme.background;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // separator
            Constraint::Min(1),    // body
        ])
        .split(area);

    // Header: page label left, back affordance right
    let label_style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    let back_hint = "\u{2303} back ";
    let label = format!(" {}", folder.label());
    let width = chunks[0].width as usize;
    let pad = width
        .saturating_sub(label.chars().count())
        .saturating_sub(back_hint.chars().count());
    let header = Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(back_hint, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(header).style(Style::default().bg(bg)), chunks[0]);

    let sep_style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.accent).bg(bg)
    };
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(chunks[1].width as usize),
        sep_style,
    ));
    frame.render_widget(Paragraph::new(separator).style(Style::default().bg(bg)), chunks[1]);

    match folder.category() {
        Some(_) => detail_view::render_detail_view(frame, app, chunks[2], faded),
        None => {
            // Bio and Notes have no item collection yet
            let body_style = if faded {
                Style::default().fg(app.theme.dim).bg(bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            let placeholder = Paragraph::new(Line::from(Span::styled(
                format!(" {} content goes here.", folder.label()),
                body_style,
            )))
            .style(Style::default().bg(bg));
            frame.render_widget(placeholder, chunks[2]);
        }
    }
}
