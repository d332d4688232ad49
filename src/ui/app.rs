use std::time::{Duration, Instant};

use crate::carousel::{CarouselItem, CarouselItemProvider};
use crate::cli::AppConfig;
use crate::error::ConfigError;
use crate::ui::mvi::Reducer;
use crate::ui::progress::{
    events_between, ProgressBarState, ProgressEvent, ProgressIntent, ProgressReducer,
};
use crate::ui::story::{StoryIntent, StoryReducer, StoryState};

/// Which screen the app is showing.
///
/// Main embeds Intermediate, Intermediate presents the carousel as an
/// overlay; finishing or dismissing the carousel lands back on
/// Intermediate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Main,
    Intermediate,
    Carousel,
}

/// One live carousel run: the deck plus the two state machines driving
/// it. Dropping the session is the whole teardown; ticks are only
/// dispatched through a live session, so none can fire afterwards.
pub struct CarouselSession {
    items: Vec<Box<dyn CarouselItem>>,
    story: StoryState,
    progress: ProgressBarState,
}

impl CarouselSession {
    pub fn new(
        items: Vec<Box<dyn CarouselItem>>,
        segment_duration: Duration,
    ) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        // Both machines are sized from the one deck; slide count and
        // segment count cannot drift apart.
        let story = StoryState::new(items.len())?;
        let progress = ProgressBarState::new(items.len(), segment_duration)?;
        Ok(Self {
            items,
            story,
            progress,
        })
    }

    pub fn story(&self) -> &StoryState {
        &self.story
    }

    pub fn progress(&self) -> &ProgressBarState {
        &self.progress
    }

    /// The item whose slide is on display.
    pub fn current_item(&self) -> &dyn CarouselItem {
        self.items[self.story.current()].as_ref()
    }
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    segment_duration: Duration,
    session: Option<CarouselSession>,
    last_tick: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self {
            should_quit: false,
            screen: Screen::Main,
            segment_duration: config.segment_duration,
            session: None,
            last_tick: Instant::now(),
        };
        if config.open_carousel {
            app.enter_intermediate();
            app.open_carousel();
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&CarouselSession> {
        self.session.as_ref()
    }

    // -- Screen flow ---------------------------------------------------

    pub fn enter_intermediate(&mut self) {
        if self.screen == Screen::Main {
            self.screen = Screen::Intermediate;
        }
    }

    pub fn back_to_main(&mut self) {
        if self.screen == Screen::Intermediate {
            self.screen = Screen::Main;
        }
    }

    /// Build a carousel session and present it, starting the progress
    /// bar at segment 0 with slide 0 on display.
    pub fn open_carousel(&mut self) {
        if self.screen != Screen::Intermediate {
            return;
        }
        match CarouselSession::new(CarouselItemProvider::items(), self.segment_duration) {
            Ok(session) => {
                self.session = Some(session);
                self.screen = Screen::Carousel;
                self.dispatch_progress(ProgressIntent::Start);
                tracing::info!(duration = ?self.segment_duration, "carousel opened");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to build carousel session");
            }
        }
    }

    /// External dismissal: drop the session and return to the
    /// Intermediate screen. Dropping the session stops the timer;
    /// ticks no longer reach a progress bar.
    pub fn dismiss_carousel(&mut self) {
        if self.session.take().is_some() {
            self.screen = Screen::Intermediate;
            tracing::info!("carousel dismissed");
        }
    }

    fn detach_carousel(&mut self) {
        if self.session.take().is_some() {
            self.screen = Screen::Intermediate;
            tracing::info!("carousel finished, view detached");
        }
    }

    // -- Timing --------------------------------------------------------

    /// Real-time tick from the event loop.
    pub fn on_tick(&mut self) {
        let delta = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        self.advance(delta);
    }

    /// Advance the carousel clock by `delta`. Separate from `on_tick`
    /// so tests can drive simulated time.
    pub fn advance(&mut self, delta: Duration) {
        if self.screen == Screen::Carousel {
            self.dispatch_progress(ProgressIntent::Tick(delta));
        }
    }

    pub fn toggle_pause(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let intent = if session.progress.is_paused() {
            ProgressIntent::Resume
        } else {
            ProgressIntent::Pause
        };
        self.dispatch_progress(intent);
    }

    pub fn skip_to_next(&mut self) {
        self.dispatch_progress(ProgressIntent::SkipToNext);
    }

    pub fn rewind_to_previous(&mut self) {
        self.dispatch_progress(ProgressIntent::RewindToPrevious);
    }

    // -- Manual navigation (leaves the auto-advance timer alone) -------

    pub fn jump_to_slide(&mut self, index: usize) {
        self.dispatch_story(StoryIntent::JumpTo(index));
    }

    pub fn next_slide(&mut self) {
        self.dispatch_story(StoryIntent::NextSlide);
    }

    pub fn previous_slide(&mut self) {
        self.dispatch_story(StoryIntent::PreviousSlide);
    }

    // -- Dispatch ------------------------------------------------------

    /// Single dispatch site for progress transitions. Events are
    /// derived from the state diff and applied after the reduction
    /// completes, so a transition can never re-enter a half-applied
    /// one.
    fn dispatch_progress(&mut self, intent: ProgressIntent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let before = session.progress.clone();
        session.progress = ProgressReducer::reduce(before.clone(), intent);
        let events = events_between(&before, &session.progress);

        let mut finished = false;
        for event in events {
            match event {
                ProgressEvent::IndexChanged(index) => {
                    tracing::debug!(index, "segment changed, swapping slide");
                    session.story =
                        StoryReducer::reduce(session.story.clone(), StoryIntent::ShowSlide(index));
                }
                ProgressEvent::Finished => finished = true,
            }
        }
        if finished {
            self.detach_carousel();
        }
    }

    fn dispatch_story(&mut self, intent: StoryIntent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.story = StoryReducer::reduce(session.story.clone(), intent);
    }
}
