//! Application state module
//!
//! State types composed into `AppState`, organized by feature.

mod app;
mod plate;
mod scoring;
mod ui;
mod viewport;

pub use app::{AppState, Mode};
pub use plate::PlateState;
pub use scoring::{NavigatorState, ScoringState, SheetLayout};
pub use ui::UiState;
pub use viewport::Viewport;
