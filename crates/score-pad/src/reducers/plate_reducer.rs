//! Plate reducer
//!
//! Row/column navigation over the contact-sheet grid and the interesting
//! toggle on the active well.

use crate::actions::{Action, PlateAction};
use crate::activator;
use crate::state::PlateState;

pub fn reduce_plate(mut state: PlateState, action: &Action) -> PlateState {
    let Action::Plate(action) = action else {
        return state;
    };

    match action {
        PlateAction::RowNext => move_row(&mut state, 1),
        PlateAction::RowPrevious => move_row(&mut state, -1),
        PlateAction::ColumnNext => move_column(&mut state, 1),
        PlateAction::ColumnPrevious => move_column(&mut state, -1),
        PlateAction::ToggleInteresting => toggle_interesting(&mut state),
    }

    state
}

fn move_row(state: &mut PlateState, step: i64) {
    let next = state.row as i64 + step;
    if next < 0 || next >= state.plate.rows() as i64 {
        return;
    }
    state.row = next as usize;
    // Every successful row move restarts at the first column.
    state.col = 0;
    activator::activate_well(state);
}

fn move_column(state: &mut PlateState, step: i64) {
    // A move landing on the first or last column is reverted, so columns 0
    // and C-1 are unreachable by navigation. Column 0 is still observable
    // as the reset position after a row move.
    let next = state.col as i64 + step;
    if next <= 0 || next >= state.plate.cols() as i64 - 1 {
        return;
    }
    state.col = next as usize;
    activator::activate_well(state);
}

/// Pure flip of the active well's mark. No auto-advance.
fn toggle_interesting(state: &mut PlateState) {
    let Some(well) = state.plate.well_mut(state.row, state.col) else {
        return;
    };
    well.interesting = !well.interesting;
    log::info!(
        "Well {} marked {}",
        well.address,
        if well.interesting {
            "interesting"
        } else {
            "not interesting"
        }
    );
}
