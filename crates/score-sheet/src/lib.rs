//! Score document model
//!
//! Data types for the keyboard-scoring UI: the experiment sheet (experiments
//! holding keyable groups of toggle controls) and the contact-sheet plate
//! (a fixed grid of wells named `A01`..`H12`). The UI treats everything here
//! as a structural snapshot discovered at startup; the only mutations are
//! control toggles and the single-active presentation marks.

mod document;
mod error;
mod plate;
mod sheet;

pub use document::Document;
pub use error::SheetError;
pub use plate::{Plate, PlateSpec, Well, WellAddress};
pub use sheet::{Control, Experiment, Sheet};
