//! Reducers module
//!
//! Pure state transitions in the `reduce(state, action) -> state` shape.
//! Every out-of-range request is a silent no-op; there is no error path
//! through a reducer.

pub mod app_reducer;
pub mod plate_reducer;
pub mod scoring_reducer;
pub mod ui_reducer;
