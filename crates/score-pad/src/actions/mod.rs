//! Actions module
//!
//! Tagged action architecture: raw key events enter as `Key`/`KeyRelease`
//! and are translated by the keyboard middleware into the screen-specific
//! variants below. Reducers only ever see the translated forms.

pub mod global;
pub mod plate;
pub mod scoring;

pub use global::GlobalAction;
pub use plate::PlateAction;
pub use scoring::ScoringAction;

use crate::keys::KeyInput;

/// Root action enum, tagged by screen/domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A raw key press, consumed by the keyboard middleware.
    Key(KeyInput),
    /// A raw key release; only the help-overlay toggle listens here.
    KeyRelease(KeyInput),

    /// Experiment navigation and scoring actions.
    Scoring(ScoringAction),
    /// Contact-sheet grid actions.
    Plate(PlateAction),
    /// Application-wide actions.
    Global(GlobalAction),
}
