use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::wrap::wrap_text;

/// Columns reserved for the list pane
const LIST_WIDTH: u16 = 32;

/// Render the two-pane list/detail layout for a category page
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect, faded: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LIST_WIDTH), // item list
            Constraint::Length(3),          // divider
            Constraint::Min(1),             // detail pane
        ])
        .split(area);

    render_item_list(frame, app, chunks[0], faded);
    render_divider(frame, app, chunks[1], faded);
    render_detail_pane(frame, app, chunks[2], faded);
}

fn render_item_list(frame: &mut Frame, app: &App, area: Rect, faded: bool) {
    let bg = app.theme.background;
    let items = app.page_items();
    let selected_id = app.selected_id.as_deref();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (index, item) in items.iter().enumerate() {
        let is_selected = selected_id == Some(item.id.as_str());
        let under_cursor = index == app.list_cursor;

        let (marker, marker_style) = if is_selected {
            (
                "\u{258C}",
                Style::default().fg(app.theme.selection_border).bg(bg),
            )
        } else {
            (" ", Style::default().bg(bg))
        };

        let row_bg = if under_cursor && !faded {
            app.theme.selection_bg
        } else {
            bg
        };
        let logo_style = if faded {
            Style::default().fg(app.theme.dim).bg(row_bg)
        } else {
            Style::default()
                .fg(app.theme.accent)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        };
        let title_style = if faded {
            Style::default().fg(app.theme.dim).bg(row_bg)
        } else if is_selected || under_cursor {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let year_style = Style::default().fg(app.theme.dim).bg(row_bg);

        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(format!("{:<3}", item.logo_text), logo_style),
            Span::styled(format!("{:<21}", item.title), title_style),
            Span::styled(format!("{}", item.year), year_style),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_divider(frame: &mut Frame, app: &App, area: Rect, faded: bool) {
    let bg = app.theme.background;
    let style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.accent).bg(bg)
    };
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(" \u{2502} ", style)))
        .collect();
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_detail_pane(frame: &mut Frame, app: &App, area: Rect, faded: bool) {
    let bg = app.theme.background;
    let width = area.width.saturating_sub(1) as usize;

    let Some(item) = app.selected_item() else {
        // Nothing selected, or a selection that is not in this
        // collection: the placeholder state, never an error
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "[SELECT]",
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        ])
        .style(Style::default().bg(bg));
        frame.render_widget(placeholder, area);
        return;
    };

    let title_style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    let text_style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let caption_style = if faded {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.accent).bg(bg)
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(item.title.clone(), title_style)));
    lines.push(Line::from(""));
    for wrapped in wrap_text(&item.summary, width.max(1)) {
        lines.push(Line::from(Span::styled(wrapped, text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("\u{25A7} {}", item.image_label),
        caption_style,
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Folder;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, app_on_page, render_to_string};

    #[test]
    fn test_placeholder_when_nothing_selected() {
        let app = app_on_page(Folder::Projects);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area, false);
        });
        assert!(out.contains("[SELECT]"));
        // The list pane is populated regardless
        assert!(out.contains("Veil Echo"));
        assert!(out.contains("2024"));
    }

    #[test]
    fn test_placeholder_for_unknown_selection() {
        let mut app = app_on_page(Folder::Projects);
        app.selected_id = Some("ghost-item".into());
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area, false);
        });
        assert!(out.contains("[SELECT]"));
    }

    #[test]
    fn test_selected_item_fills_detail_pane() {
        let mut app = app_on_page(Folder::Projects);
        app.selected_id = Some("gloss-lattice".into());
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area, false);
        });
        assert!(!out.contains("[SELECT]"));
        assert!(out.contains("Gloss Lattice"));
        assert!(out.contains("Material-driven UI system"));
        assert!(out.contains("Material layout mockups."));
    }

    #[test]
    fn test_list_shows_logo_title_year_for_every_item() {
        let app = app_on_page(Folder::Research);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area, false);
        });
        for (logo, title, year) in [
            ("SD", "Signal Drift", "2024"),
            ("SE", "Soft Edges", "2023"),
            ("QG", "Quiet Grid", "2021"),
        ] {
            assert!(out.contains(logo));
            assert!(out.contains(title));
            assert!(out.contains(year));
        }
    }
}
