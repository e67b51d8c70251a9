use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Folder;
use crate::tui::app::App;

/// Keys on the home view: move the cursor over the folder stack,
/// activate the folder under it.
pub(super) fn handle_home_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.folder_cursor + 1 < Folder::ALL.len() {
                app.folder_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.folder_cursor = app.folder_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.folder_cursor = 0;
        }
        KeyCode::Char('G') => {
            app.folder_cursor = Folder::ALL.len() - 1;
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
            app.open_folder(Folder::ALL[app.folder_cursor], now);
        }
        _ => {}
    }
}
