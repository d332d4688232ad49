use crate::error::ConfigError;
use crate::ui::mvi::UiState;

/// Direction of a slide transition, for the page animation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Forward,
    Reverse,
}

/// Which slide of the deck is on display.
///
/// The current index is always a valid index into the deck. Manual
/// navigation treats the deck as cyclic (first and last are
/// neighbors); timer-driven advancement never wraps, it ends the
/// session after the last segment instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryState {
    current: usize,
    count: usize,
    direction: NavDirection,
}

impl UiState for StoryState {}

impl StoryState {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyItems);
        }
        Ok(Self {
            current: 0,
            count,
            direction: NavDirection::Forward,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    /// Cyclic neighbor before the current slide.
    pub fn neighbor_before(&self) -> usize {
        if self.current == 0 {
            self.count - 1
        } else {
            self.current - 1
        }
    }

    /// Cyclic neighbor after the current slide.
    pub fn neighbor_after(&self) -> usize {
        if self.current + 1 == self.count {
            0
        } else {
            self.current + 1
        }
    }

    pub(super) fn with_slide(mut self, current: usize, direction: NavDirection) -> Self {
        self.current = current;
        self.direction = direction;
        self
    }
}
