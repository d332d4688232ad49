//! Carousel domain layer: slide items, their art assets, and the
//! provider that assembles the deck shown by the UI.

pub mod assets;
mod item;
mod provider;

pub use item::{ATrainItem, BlackNoirItem, CarouselItem, HomelanderItem, MaeveItem};
pub use provider::CarouselItemProvider;
