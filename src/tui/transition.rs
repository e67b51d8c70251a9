use std::time::{Duration, Instant};

use crate::model::{Folder, MotionConfig};

/// What a pending timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    /// End of the launch animation: clear `launching`, hide the home view
    FinishLaunch,
    /// End of the back-navigation fade: return to the home state
    FinishFade,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    fires_at: Instant,
    action: TimerAction,
}

/// A state change produced by a fired timer, for the app to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    /// The launch animation settled; the page is now stable
    LaunchSettled,
    /// The fade completed; the active page was cleared
    PageDismissed,
}

/// The deterministic mapping from navigation state to what the screen
/// shows. Render and input layers branch on this, never on raw flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStage {
    /// Folder stack, interactive
    Home,
    /// Folder stack with launch styling; the page takes over when the
    /// launch timer settles
    Launching,
    /// Detail page, interactive
    PageStable,
    /// Detail page fading out; inert until the fade timer fires
    PageFading,
}

/// Owns the home ↔ page navigation state machine and the pending
/// timers that drive its delayed phases.
///
/// States: Home → (open_page) → Launching → (launch timer) →
/// page stable → (close_page) → Fading → (fade timer) → Home.
/// A request made mid-transition is rejected, never queued.
///
/// Time is always passed in, never read from a clock, so tests can
/// drive the machine with synthetic instants.
#[derive(Debug)]
pub struct TransitionController {
    active_page: Option<Folder>,
    launching: Option<Folder>,
    page_visible: bool,
    home_hidden: bool,
    launch_duration: Duration,
    fade_duration: Duration,
    timers: Vec<PendingTimer>,
}

impl TransitionController {
    pub fn new(motion: &MotionConfig) -> Self {
        TransitionController {
            active_page: None,
            launching: None,
            page_visible: false,
            home_hidden: false,
            launch_duration: motion.launch_duration(),
            fade_duration: motion.fade_duration(),
            timers: Vec::new(),
        }
    }

    /// The page currently targeted, set from folder activation until
    /// the back-navigation fade completes
    pub fn active_page(&self) -> Option<Folder> {
        self.active_page
    }

    /// The folder whose launch animation is in flight
    pub fn launching(&self) -> Option<Folder> {
        self.launching
    }

    /// True once the detail page should be shown and interactive
    pub fn page_visible(&self) -> bool {
        self.page_visible
    }

    /// True from launch settling until the fade completes; the home
    /// view is not drawn while set
    pub fn home_hidden(&self) -> bool {
        self.home_hidden
    }

    /// True while any transition phase is live (launching, page shown,
    /// or fading back out)
    pub fn in_flight(&self) -> bool {
        self.active_page.is_some()
    }

    /// Begin the launch transition into a folder's page.
    ///
    /// Rejected as a no-op unless the machine is fully at Home; rapid
    /// double-activations must not stack transitions. Returns whether
    /// the transition started.
    pub fn open_page(&mut self, folder: Folder, now: Instant) -> bool {
        if self.in_flight() {
            return false;
        }
        self.cancel_timers();
        self.active_page = Some(folder);
        self.page_visible = true;
        self.launching = Some(folder);
        self.timers.push(PendingTimer {
            fires_at: now + self.launch_duration,
            action: TimerAction::FinishLaunch,
        });
        true
    }

    /// Begin the fade back to the home view.
    ///
    /// No-op unless the page is visible. The page hides immediately;
    /// `active_page` clears one fade duration later.
    pub fn close_page(&mut self, now: Instant) -> bool {
        if !self.page_visible {
            return false;
        }
        self.cancel_timers();
        self.page_visible = false;
        self.timers.push(PendingTimer {
            fires_at: now + self.fade_duration,
            action: TimerAction::FinishFade,
        });
        true
    }

    /// Drop every pending timer without firing it. Idempotent; called
    /// at the start of every transition and on teardown.
    pub fn cancel_timers(&mut self) {
        self.timers.clear();
    }

    /// Fire every timer whose deadline has passed, oldest first,
    /// returning the state changes that occurred.
    pub fn on_tick(&mut self, now: Instant) -> Vec<TransitionEvent> {
        let mut events = Vec::new();
        while let Some(idx) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.fires_at <= now)
            .min_by_key(|(_, t)| t.fires_at)
            .map(|(i, _)| i)
        {
            let timer = self.timers.remove(idx);
            match timer.action {
                TimerAction::FinishLaunch => {
                    self.launching = None;
                    self.home_hidden = true;
                    events.push(TransitionEvent::LaunchSettled);
                }
                TimerAction::FinishFade => {
                    self.active_page = None;
                    self.launching = None;
                    self.home_hidden = false;
                    events.push(TransitionEvent::PageDismissed);
                }
            }
        }
        events
    }

    /// Earliest pending deadline, used to bound the event-loop poll
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|t| t.fires_at).min()
    }

    /// What the screen shows for the current state
    pub fn view_stage(&self) -> ViewStage {
        if self.launching.is_some() {
            ViewStage::Launching
        } else if self.page_visible {
            ViewStage::PageStable
        } else if self.active_page.is_some() {
            ViewStage::PageFading
        } else {
            ViewStage::Home
        }
    }
}
