use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Folder;
use crate::tui::app::App;

/// Width of a folder button's label cell
const LABEL_WIDTH: usize = 12;

/// Render the folder stack. Each folder sits one step further down and
/// right, echoing the stacked-cards layout of the page this replaces.
pub fn render_home_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let launching = app.controller.launching();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  \u{25B6} desk",
        Style::default().fg(app.theme.accent).bg(bg),
    )));
    lines.push(Line::from(""));

    for (index, folder) in Folder::ALL.iter().enumerate() {
        let is_launching = launching == Some(*folder);
        let is_dimmed = launching.is_some() && !is_launching;
        let under_cursor = app.folder_cursor == index && launching.is_none();

        let label = format!(" {:<width$}", folder.label(), width = LABEL_WIDTH);

        let body_style = if is_launching {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else if is_dimmed {
            Style::default().fg(app.theme.dim).bg(bg)
        } else if under_cursor {
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let edge_style = if is_launching || under_cursor {
            Style::default().fg(app.theme.selection_border).bg(bg)
        } else if is_dimmed {
            Style::default().fg(app.theme.dim).bg(bg)
        } else {
            Style::default().fg(app.theme.accent).bg(bg)
        };

        // Stack offset grows with the folder's index
        let indent = " ".repeat(3 + index * 2);
        let tab = " ".repeat(2 + index * 2);

        // Folder tab, then the labeled body
        lines.push(Line::from(vec![
            Span::styled(indent, Style::default().bg(bg)),
            Span::styled("\u{250C}\u{2500}\u{2500}\u{2510}", edge_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled(tab, Style::default().bg(bg)),
            Span::styled("\u{2502} ", edge_style),
            Span::styled(label, body_style),
            Span::styled(" \u{2502}", edge_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, app_at_home, render_to_string};
    use std::time::Instant;

    #[test]
    fn test_home_shows_every_folder() {
        let app = app_at_home();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        for folder in Folder::ALL {
            assert!(out.contains(folder.label()), "missing {}", folder.label());
        }
    }

    #[test]
    fn test_stack_offsets_increase() {
        let app = app_at_home();
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        let indent_of = |label: &str| {
            out.lines()
                .find(|l| l.contains(label))
                .map(|l| l.len() - l.trim_start().len())
                .unwrap()
        };
        assert!(indent_of("Bio") < indent_of("Projects"));
        assert!(indent_of("Projects") < indent_of("Notes"));
    }

    #[test]
    fn test_renders_during_launch() {
        let mut app = app_at_home();
        app.open_folder(Folder::Blog, Instant::now());
        assert_eq!(app.controller.launching(), Some(Folder::Blog));
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        // The stack is still on screen mid-launch
        assert!(out.contains("Blog"));
        assert!(out.contains("Bio"));
    }
}
