//! Tests for carousel slide navigation.

use showcase::error::ConfigError;
use showcase::ui::mvi::Reducer;
use showcase::ui::story::{NavDirection, StoryIntent, StoryReducer, StoryState};

fn deck_of(count: usize) -> StoryState {
    StoryState::new(count).expect("valid deck size")
}

fn at_slide(state: StoryState, index: usize) -> StoryState {
    StoryReducer::reduce(state, StoryIntent::ShowSlide(index))
}

#[test]
fn empty_deck_is_invalid_configuration() {
    assert_eq!(StoryState::new(0).unwrap_err(), ConfigError::EmptyItems);
}

// -- Cyclic neighbors --------------------------------------------------------

#[test]
fn neighbors_wrap_at_the_edges() {
    // Deck [A, B, C, D]: before A is D, after D is A.
    let state = deck_of(4);
    assert_eq!(state.neighbor_before(), 3);

    let state = at_slide(state, 3);
    assert_eq!(state.neighbor_after(), 0);
}

#[test]
fn neighbors_in_the_middle_are_adjacent() {
    let state = at_slide(deck_of(4), 2);
    assert_eq!(state.neighbor_before(), 1);

    let state = at_slide(state, 1);
    assert_eq!(state.neighbor_after(), 2);
}

#[test]
fn single_slide_deck_is_its_own_neighbor() {
    let state = deck_of(1);
    assert_eq!(state.neighbor_before(), 0);
    assert_eq!(state.neighbor_after(), 0);
}

// -- Page-control jumps ------------------------------------------------------

#[test]
fn jump_forward_computes_forward_direction() {
    let state = at_slide(deck_of(4), 1);
    let state = StoryReducer::reduce(state, StoryIntent::JumpTo(3));
    assert_eq!(state.current(), 3);
    assert_eq!(state.direction(), NavDirection::Forward);
}

#[test]
fn jump_backward_computes_reverse_direction() {
    let state = at_slide(deck_of(4), 3);
    let state = StoryReducer::reduce(state, StoryIntent::JumpTo(1));
    assert_eq!(state.current(), 1);
    assert_eq!(state.direction(), NavDirection::Reverse);
}

#[test]
fn jump_out_of_range_is_ignored() {
    let state = at_slide(deck_of(4), 2);
    let state = StoryReducer::reduce(state, StoryIntent::JumpTo(7));
    assert_eq!(state.current(), 2);
}

// -- Swipes ------------------------------------------------------------------

#[test]
fn swiping_forward_past_the_last_slide_wraps_to_first() {
    let state = at_slide(deck_of(4), 3);
    let state = StoryReducer::reduce(state, StoryIntent::NextSlide);
    assert_eq!(state.current(), 0);
    assert_eq!(state.direction(), NavDirection::Forward);
}

#[test]
fn swiping_backward_from_the_first_slide_wraps_to_last() {
    let state = deck_of(4);
    let state = StoryReducer::reduce(state, StoryIntent::PreviousSlide);
    assert_eq!(state.current(), 3);
    assert_eq!(state.direction(), NavDirection::Reverse);
}

// -- Timer-driven display ----------------------------------------------------

#[test]
fn show_slide_displays_the_requested_page() {
    let state = StoryReducer::reduce(deck_of(4), StoryIntent::ShowSlide(2));
    assert_eq!(state.current(), 2);
}

#[test]
fn show_slide_out_of_range_is_ignored() {
    let state = at_slide(deck_of(4), 1);
    let state = StoryReducer::reduce(state, StoryIntent::ShowSlide(9));
    assert_eq!(state.current(), 1);
}
