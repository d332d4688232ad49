use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryIntent {
    /// Page-control input: jump straight to slide `index`. Direction is
    /// forward when the target is past the current slide, reverse
    /// otherwise. Leaves the auto-advance timer untouched.
    JumpTo(usize),
    /// Swipe to the cyclic next slide.
    NextSlide,
    /// Swipe to the cyclic previous slide.
    PreviousSlide,
    /// Timer-driven advance from the progress bar: display slide
    /// `index`. The bar has already moved itself; this only updates
    /// what is shown.
    ShowSlide(usize),
}

impl Intent for StoryIntent {}
