mod home;
mod page;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

/// Handle a key event against the current navigation state
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Quit works from every state
    if key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.should_quit = true;
        return;
    }

    let now = Instant::now();

    // Escape backs out of the page, and only while it is visible
    if key.code == KeyCode::Esc {
        if app.controller.page_visible() {
            app.close_page(now);
        }
        return;
    }

    if app.controller.page_visible() {
        page::handle_page_key(app, key, now);
    } else if app.controller.in_flight() {
        // Fading back home: input is inert until the fade completes
    } else {
        home::handle_home_key(app, key, now);
    }
}
