//! Construction-time configuration errors.
//!
//! These are the only failable paths in the application: a progress bar
//! with a non-positive segment count or duration, or a carousel with no
//! items. Callers control these values, so hitting one of these at
//! runtime is a programming error, not a recoverable condition.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Segment count must be at least 1.
    #[error("progress bar needs at least one segment, got {0}")]
    InvalidSegmentCount(usize),

    /// Per-segment duration must be positive.
    #[error("segment duration must be positive, got {0:?}")]
    InvalidDuration(Duration),

    /// The carousel cannot present an empty deck.
    #[error("carousel requires at least one item")]
    EmptyItems,
}
