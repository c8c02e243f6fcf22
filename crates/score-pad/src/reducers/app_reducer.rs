//! Root reducer that delegates to the feature reducers.

use crate::actions::Action;
use crate::reducers::{plate_reducer, scoring_reducer, ui_reducer};
use crate::state::AppState;

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    state.ui = ui_reducer::reduce_ui(state.ui, action);

    if let Some(scoring) = state.scoring.take() {
        state.scoring = Some(scoring_reducer::reduce_scoring(scoring, action));
    }

    if let Some(plate) = state.plate.take() {
        state.plate = Some(plate_reducer::reduce_plate(plate, action));
    }

    state
}
