use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::content::Library;
use crate::model::{Category, DeskConfig, DetailItem, Folder};

use super::input;
use super::render;
use super::theme::Theme;
use super::transition::{TransitionController, TransitionEvent};

/// How long the event loop sleeps when no animation deadline is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    pub library: Library,
    pub theme: Theme,
    pub controller: TransitionController,
    pub should_quit: bool,
    /// Cursor into `Folder::ALL` on the home view
    pub folder_cursor: usize,
    /// Selected item id on the detail page, if any
    pub selected_id: Option<String>,
    /// Cursor into the sorted item list on the detail page
    pub list_cursor: usize,
}

impl App {
    pub fn new(library: Library, config: &DeskConfig) -> Self {
        App {
            library,
            theme: Theme::from_config(&config.ui),
            controller: TransitionController::new(&config.motion),
            should_quit: false,
            folder_cursor: 0,
            selected_id: None,
            list_cursor: 0,
        }
    }

    /// The category behind the active page, if it has one
    pub fn active_category(&self) -> Option<Category> {
        self.controller.active_page().and_then(Folder::category)
    }

    /// The active page's items in rendered order (year descending)
    pub fn page_items(&self) -> Vec<&DetailItem> {
        match self.active_category() {
            Some(category) => self.library.sorted_by_year(category),
            None => Vec::new(),
        }
    }

    /// Resolve the current selection against the active category.
    /// An id that is not in the collection resolves to None, which
    /// renders as the placeholder state.
    pub fn selected_item(&self) -> Option<&DetailItem> {
        let category = self.active_category()?;
        let id = self.selected_id.as_deref()?;
        self.library.find(category, id)
    }

    /// Activate the folder under the cursor
    pub fn open_folder(&mut self, folder: Folder, now: Instant) {
        if self.controller.open_page(folder, now) {
            // The active page changed: drop any selection from the
            // previous page so it cannot leak across categories
            self.reset_selection();
        }
    }

    pub fn close_page(&mut self, now: Instant) {
        self.controller.close_page(now);
    }

    /// Fire due animation timers and react to the resulting state changes
    pub fn on_tick(&mut self, now: Instant) {
        for event in self.controller.on_tick(now) {
            match event {
                TransitionEvent::LaunchSettled => {}
                TransitionEvent::PageDismissed => self.reset_selection(),
            }
        }
    }

    fn reset_selection(&mut self) {
        self.selected_id = None;
        self.list_cursor = 0;
    }
}

/// Run the TUI application
pub fn run(config: &DeskConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Library::builtin(), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    app.controller.cancel_timers();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Wake up for the next animation deadline, or idle-poll
        let timeout = match app.controller.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(IDLE_POLL),
            None => IDLE_POLL,
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Timers fire strictly after the handler that scheduled them
        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
