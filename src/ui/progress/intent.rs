use std::time::Duration;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressIntent {
    /// Begin filling segment 0. No effect unless the bar is idle.
    Start,
    /// Animation-frame tick: advance the active segment by `delta`.
    Tick(Duration),
    /// Suspend the active segment without losing its fill.
    Pause,
    /// Continue a paused segment from its accumulated fill.
    Resume,
    /// Complete the active segment immediately; the last segment
    /// finishes the bar instead.
    SkipToNext,
    /// Restart the active segment, or step back one segment when the
    /// active one has barely begun filling (clamped at segment 0).
    RewindToPrevious,
}

impl Intent for ProgressIntent {}
