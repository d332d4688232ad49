use crate::ui::mvi::Reducer;
use crate::ui::story::intent::StoryIntent;
use crate::ui::story::state::{NavDirection, StoryState};

pub struct StoryReducer;

impl Reducer for StoryReducer {
    type State = StoryState;
    type Intent = StoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoryIntent::JumpTo(index) => {
                if index >= state.count() || index == state.current() {
                    return state;
                }
                let direction = if index > state.current() {
                    NavDirection::Forward
                } else {
                    NavDirection::Reverse
                };
                state.with_slide(index, direction)
            }
            StoryIntent::NextSlide => {
                let next = state.neighbor_after();
                state.with_slide(next, NavDirection::Forward)
            }
            StoryIntent::PreviousSlide => {
                let previous = state.neighbor_before();
                state.with_slide(previous, NavDirection::Reverse)
            }
            StoryIntent::ShowSlide(index) => {
                if index >= state.count() {
                    return state;
                }
                state.with_slide(index, NavDirection::Forward)
            }
        }
    }
}
