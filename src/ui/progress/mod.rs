//! Segmented progress bar feature (MVI pattern).
//!
//! N equal segments fill left-to-right in sequence, each over a fixed
//! duration. The reducer is the timing state machine; `events_between`
//! turns a before/after state pair into the notifications the carousel
//! acts on (slide change, session end).

mod event;
mod intent;
mod reducer;
mod render;
mod state;

pub use event::{events_between, ProgressEvent};
pub use intent::ProgressIntent;
pub use reducer::ProgressReducer;
pub use render::SegmentedProgressBar;
pub use state::{ProgressBarState, ProgressPhase, REWIND_THRESHOLD};
