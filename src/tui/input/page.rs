use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Keys on the detail page: move the list cursor, select the item
/// under it, or navigate back.
pub(super) fn handle_page_key(app: &mut App, key: KeyEvent, now: Instant) {
    let item_count = app.page_items().len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if item_count > 0 && app.list_cursor + 1 < item_count {
                app.list_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Selecting the already-selected item is idempotent
            let id = app
                .page_items()
                .get(app.list_cursor)
                .map(|item| item.id.clone());
            if let Some(id) = id {
                app.selected_id = Some(id);
            }
        }
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.close_page(now);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;
    use crate::model::{DeskConfig, Folder};
    use crossterm::event::KeyModifiers;

    fn page_app(folder: Folder) -> App {
        let mut app = App::new(Library::builtin(), &DeskConfig::default());
        app.open_folder(folder, Instant::now());
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_page_key(
            app,
            KeyEvent::new(code, KeyModifiers::NONE),
            Instant::now(),
        );
    }

    #[test]
    fn test_list_cursor_clamps() {
        let mut app = page_app(Folder::Projects);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.list_cursor, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.list_cursor, 1);
    }

    #[test]
    fn test_enter_selects_item_under_cursor() {
        let mut app = page_app(Folder::Projects);
        press(&mut app, KeyCode::Enter);
        // Sorted by year desc, 2024 first
        assert_eq!(app.selected_id.as_deref(), Some("veil-echo"));

        // Idempotent: selecting again keeps it selected
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_id.as_deref(), Some("veil-echo"));
    }

    #[test]
    fn test_selection_noop_on_plain_page() {
        let mut app = page_app(Folder::Bio);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_id, None);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn test_backspace_navigates_back() {
        let mut app = page_app(Folder::Blog);
        press(&mut app, KeyCode::Backspace);
        assert!(!app.controller.page_visible());
        assert_eq!(app.controller.active_page(), Some(Folder::Blog));
    }
}
