//! Application state.

use score_sheet::{Document, SheetError};

use crate::activator;

use super::{PlateState, ScoringState, UiState};

/// Which screen key input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Scoring,
    Plate,
    Idle,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub scoring: Option<ScoringState>,
    pub plate: Option<PlateState>,
    pub ui: UiState,
}

impl AppState {
    /// Build the initial state from a loaded document.
    ///
    /// An empty experiment list disables the scoring feature entirely. The
    /// plate is activated at its first well so the single-active marking
    /// invariant holds from the start.
    pub fn from_document(document: Document) -> Result<Self, SheetError> {
        let scoring = if document.sheet.is_empty() {
            log::info!("Document has no experiments, scoring disabled");
            None
        } else {
            let mut scoring = ScoringState::new(document.sheet);
            activator::activate_experiment(&mut scoring);
            Some(scoring)
        };

        let plate = match document.plate {
            Some(spec) => {
                let mut plate = PlateState::new(spec.build()?);
                activator::activate_well(&mut plate);
                Some(plate)
            }
            None => None,
        };

        Ok(Self {
            scoring,
            plate,
            ui: UiState::default(),
        })
    }

    /// The scoring table wins when both parts of the document are present.
    pub fn mode(&self) -> Mode {
        if self.scoring.is_some() {
            Mode::Scoring
        } else if self.plate.is_some() {
            Mode::Plate
        } else {
            Mode::Idle
        }
    }
}
