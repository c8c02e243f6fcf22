//! Document loading
//!
//! A score document is the JSON snapshot of everything the UI navigates
//! over: the experiment sheet and, optionally, a contact-sheet plate.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::plate::PlateSpec;
use crate::sheet::Sheet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub sheet: Sheet,
    #[serde(default)]
    pub plate: Option<PlateSpec>,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let json = fs::read_to_string(path)?;
        let document = Self::from_json(&json)?;
        log::info!(
            "Loaded document from {}: {} experiments, plate: {}",
            path.display(),
            document.sheet.len(),
            document.plate.is_some()
        );
        Ok(document)
    }
}
