//! Reducer for the search screen.

use crate::ui::mvi::Reducer;

use super::intent::{Action, SearchSignal};
use super::state::SearchState;

/// Reducer for search state transitions.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            Action::Search(SearchSignal::Start) => SearchState::loading(),

            Action::Search(SearchSignal::Success { names }) => SearchState::with_results(names),

            Action::Search(SearchSignal::Failure { message }) => SearchState::with_error(message),

            Action::Init => state,
        }
    }
}
