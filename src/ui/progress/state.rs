use std::time::Duration;

use crate::error::ConfigError;
use crate::ui::mvi::UiState;

/// Fraction of a segment's duration under which a rewind steps back to
/// the previous segment instead of restarting the current one.
pub const REWIND_THRESHOLD: f64 = 0.1;

/// Lifecycle of the progress bar.
///
/// Exactly one segment animates at a time while `Running` or `Paused`;
/// segments before it are full, segments after it are empty. `Finished`
/// is terminal: no intent moves the bar out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Running { segment: usize },
    Paused { segment: usize },
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarState {
    segments: usize,
    segment_duration: Duration,
    phase: ProgressPhase,
    /// Time accumulated inside the active segment. Always less than
    /// `segment_duration` outside of the reducer.
    elapsed: Duration,
}

impl UiState for ProgressBarState {}

impl ProgressBarState {
    /// Build an idle bar with `segments` equal divisions, each filling
    /// over `segment_duration`.
    pub fn new(segments: usize, segment_duration: Duration) -> Result<Self, ConfigError> {
        if segments == 0 {
            return Err(ConfigError::InvalidSegmentCount(segments));
        }
        if segment_duration.is_zero() {
            return Err(ConfigError::InvalidDuration(segment_duration));
        }
        Ok(Self {
            segments,
            segment_duration,
            phase: ProgressPhase::Idle,
            elapsed: Duration::ZERO,
        })
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn segment_duration(&self) -> Duration {
        self.segment_duration
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    /// Index of the segment currently animating, if any.
    pub fn active_segment(&self) -> Option<usize> {
        match self.phase {
            ProgressPhase::Running { segment } | ProgressPhase::Paused { segment } => {
                Some(segment)
            }
            ProgressPhase::Idle | ProgressPhase::Finished => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, ProgressPhase::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, ProgressPhase::Paused { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == ProgressPhase::Finished
    }

    /// Fill fraction of the active segment, in `0.0..1.0`.
    pub fn fill_fraction(&self) -> f64 {
        match self.phase {
            ProgressPhase::Running { .. } | ProgressPhase::Paused { .. } => {
                (self.elapsed.as_secs_f64() / self.segment_duration.as_secs_f64()).min(1.0)
            }
            ProgressPhase::Idle | ProgressPhase::Finished => 0.0,
        }
    }

    /// Fill fraction of an arbitrary segment, for rendering.
    pub fn segment_fill(&self, index: usize) -> f64 {
        match self.phase {
            ProgressPhase::Idle => 0.0,
            ProgressPhase::Finished => 1.0,
            ProgressPhase::Running { segment } | ProgressPhase::Paused { segment } => {
                if index < segment {
                    1.0
                } else if index == segment {
                    self.fill_fraction()
                } else {
                    0.0
                }
            }
        }
    }

    pub(super) fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub(super) fn with_phase(mut self, phase: ProgressPhase, elapsed: Duration) -> Self {
        self.phase = phase;
        self.elapsed = elapsed;
        self
    }
}
