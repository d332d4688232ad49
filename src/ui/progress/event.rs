//! Progress notifications, derived by diffing states.
//!
//! The bar reports two things to whoever drives it: "segment index
//! changed" and "all segments finished". The reducer stays pure; the
//! dispatch site compares the state before and after reduction to
//! recover those notifications. A single dispatch site also keeps
//! transition handling non-reentrant.

use crate::ui::progress::state::{ProgressBarState, ProgressPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Segment `index` became active.
    IndexChanged(usize),
    /// Every segment completed; the bar accepts no further transitions.
    Finished,
}

/// Notifications implied by a `before` → `after` reduction step.
///
/// A single large tick can cross several segment boundaries; each
/// intermediate segment gets its own `IndexChanged` so observers see
/// every slide, in order. Entering `Running(0)` from idle emits
/// nothing: segment 0 is already on display when the bar starts.
pub fn events_between(before: &ProgressBarState, after: &ProgressBarState) -> Vec<ProgressEvent> {
    let mut events = Vec::new();

    match (before.phase(), after.phase()) {
        (ProgressPhase::Finished, _) | (_, ProgressPhase::Idle) => {}
        (_, ProgressPhase::Finished) => {
            if let Some(from) = before.active_segment() {
                for index in from + 1..after.segments() {
                    events.push(ProgressEvent::IndexChanged(index));
                }
            }
            events.push(ProgressEvent::Finished);
        }
        (ProgressPhase::Idle, _) => {
            // Start: segment 0 activates without a notification.
            if let Some(to) = after.active_segment() {
                for index in 1..=to {
                    events.push(ProgressEvent::IndexChanged(index));
                }
            }
        }
        _ => {
            let (Some(from), Some(to)) = (before.active_segment(), after.active_segment())
            else {
                return events;
            };
            if to > from {
                for index in from + 1..=to {
                    events.push(ProgressEvent::IndexChanged(index));
                }
            } else if to < from {
                // Rewind lands on a single earlier segment.
                events.push(ProgressEvent::IndexChanged(to));
            }
        }
    }

    events
}
