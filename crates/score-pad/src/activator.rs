//! Activation side effects
//!
//! Syncs document marks and the viewport to the navigator cursor. Kept out
//! of the reducers so cursor arithmetic stays testable without the marking
//! and scrolling concerns. All lookups here are best-effort: a missing
//! target is a no-op, never an error.

use crate::state::{PlateState, ScoringState};

/// Lines above the plate rows taken by the column header.
const PLATE_HEADER_LINES: i32 = 1;
/// Fixed offset applied above an activated cell when scrolling.
const PLATE_SCROLL_OFFSET: i32 = -4;

/// Activate the experiment under the navigator cursor: rebuild the keyable
/// group list from its controls, reset the group cursor, move the active
/// marks, and scroll to the experiment's top.
pub fn activate_experiment(state: &mut ScoringState) {
    let index = state.nav.experiment;
    let Some(experiment) = state.sheet.experiments.get(index) else {
        return;
    };

    state.nav.groups = experiment.keyable_groups();
    state.nav.group = 0;

    state.sheet.mark_active_experiment(index);
    activate_group(state);

    if let Some(top) = state.layout.tops.get(index) {
        state.viewport.scroll_to(*top);
    }
}

/// Move the active-group mark to the group under the cursor.
pub fn activate_group(state: &mut ScoringState) {
    let group = state.nav.groups.get(state.nav.group).cloned();
    state.sheet.mark_active_group(group.as_deref());
}

/// Sentinel activation: scroll to the end of the sheet and focus submit.
pub fn focus_submit(state: &mut ScoringState) {
    state.viewport.scroll_to(state.layout.total_height);
    state.submit_focused = true;
}

/// Activate the cell under the grid cursor: move the row and column marks
/// and scroll to the fixed offset above the cell's row.
pub fn activate_well(state: &mut PlateState) {
    state.plate.mark_active(state.row, state.col);

    let top = PLATE_HEADER_LINES + state.row as i32 + PLATE_SCROLL_OFFSET;
    state.viewport.scroll_to(top.max(0) as u16);
}
