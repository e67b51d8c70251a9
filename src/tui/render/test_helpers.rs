use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::content::Library;
use crate::model::{DeskConfig, Folder};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app at the initial home state.
pub fn app_at_home() -> App {
    App::new(Library::builtin(), &DeskConfig::default())
}

/// An app with a folder's page open and the launch animation settled.
pub fn app_on_page(folder: Folder) -> App {
    let mut app = app_at_home();
    let now = Instant::now();
    app.open_folder(folder, now);
    app.on_tick(now + Duration::from_millis(560));
    app
}

/// An app mid-fade after backing out of a folder's page.
pub fn app_fading_from(folder: Folder) -> App {
    let mut app = app_on_page(folder);
    app.close_page(Instant::now());
    app
}
