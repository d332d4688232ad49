use std::time::Duration;

use crate::ui::mvi::Reducer;
use crate::ui::progress::intent::ProgressIntent;
use crate::ui::progress::state::{ProgressBarState, ProgressPhase, REWIND_THRESHOLD};

pub struct ProgressReducer;

impl Reducer for ProgressReducer {
    type State = ProgressBarState;
    type Intent = ProgressIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Finished is absorbing: every intent is a no-op.
        if state.phase() == ProgressPhase::Finished {
            return state;
        }

        match intent {
            ProgressIntent::Start => match state.phase() {
                ProgressPhase::Idle => {
                    state.with_phase(ProgressPhase::Running { segment: 0 }, Duration::ZERO)
                }
                // Already running (or paused): starting again has no
                // additional effect.
                _ => state,
            },
            ProgressIntent::Tick(delta) => match state.phase() {
                ProgressPhase::Running { segment } => advance(state, segment, delta),
                // Idle and Paused ignore the clock.
                _ => state,
            },
            ProgressIntent::Pause => match state.phase() {
                ProgressPhase::Running { segment } => {
                    let elapsed = state.elapsed();
                    state.with_phase(ProgressPhase::Paused { segment }, elapsed)
                }
                _ => state,
            },
            ProgressIntent::Resume => match state.phase() {
                ProgressPhase::Paused { segment } => {
                    let elapsed = state.elapsed();
                    state.with_phase(ProgressPhase::Running { segment }, elapsed)
                }
                _ => state,
            },
            ProgressIntent::SkipToNext => match state.phase() {
                ProgressPhase::Running { segment } if segment + 1 < state.segments() => {
                    state.with_phase(
                        ProgressPhase::Running { segment: segment + 1 },
                        Duration::ZERO,
                    )
                }
                ProgressPhase::Paused { segment } if segment + 1 < state.segments() => {
                    state.with_phase(
                        ProgressPhase::Paused { segment: segment + 1 },
                        Duration::ZERO,
                    )
                }
                ProgressPhase::Running { .. } | ProgressPhase::Paused { .. } => {
                    state.with_phase(ProgressPhase::Finished, Duration::ZERO)
                }
                _ => state,
            },
            ProgressIntent::RewindToPrevious => match state.phase() {
                ProgressPhase::Running { segment } => {
                    let target = rewind_target(&state, segment);
                    state.with_phase(ProgressPhase::Running { segment: target }, Duration::ZERO)
                }
                ProgressPhase::Paused { segment } => {
                    let target = rewind_target(&state, segment);
                    state.with_phase(ProgressPhase::Paused { segment: target }, Duration::ZERO)
                }
                _ => state,
            },
        }
    }
}

/// Accumulate `delta` into the active segment, spilling any overshoot
/// into the following segments. Crossing past the last segment finishes
/// the bar.
fn advance(state: ProgressBarState, segment: usize, delta: Duration) -> ProgressBarState {
    let mut elapsed = state.elapsed() + delta;
    let mut segment = segment;
    while elapsed >= state.segment_duration() {
        elapsed -= state.segment_duration();
        if segment + 1 < state.segments() {
            segment += 1;
        } else {
            return state.with_phase(ProgressPhase::Finished, Duration::ZERO);
        }
    }
    state.with_phase(ProgressPhase::Running { segment }, elapsed)
}

/// Segment a rewind lands on: the previous segment when the active one
/// has less than the threshold of fill, otherwise the active one again.
/// Clamped at segment 0.
fn rewind_target(state: &ProgressBarState, segment: usize) -> usize {
    if state.fill_fraction() < REWIND_THRESHOLD {
        segment.saturating_sub(1)
    } else {
        segment
    }
}
