//! Story carousel feature (MVI pattern): which slide is on display and
//! how the user got there.

mod intent;
mod reducer;
mod render;
mod state;

pub use intent::StoryIntent;
pub use reducer::StoryReducer;
pub use render::{page_indicator, SlidePanel};
pub use state::{NavDirection, StoryState};
