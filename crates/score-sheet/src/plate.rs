//! Contact-sheet plate model
//!
//! A fixed-size grid of toggle wells keyed by the deterministic
//! `<row-letter><2-digit-column>` naming scheme (`A01`..`H12` for the usual
//! 8x12 plate). Dimensions are fixed at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Largest row count the single-letter alphabet can address.
const MAX_ROWS: u8 = 26;

/// Grid address, zero-based internally. Display form is 1-based with the
/// row letter, e.g. row 0 / column 0 prints as `A01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WellAddress {
    pub row: u8,
    pub col: u8,
}

impl fmt::Display for WellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", (b'A' + self.row) as char, self.col as u16 + 1)
    }
}

impl FromStr for WellAddress {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SheetError::InvalidWellName(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }

        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let col: u8 = digits.parse().map_err(|_| invalid())?;
        if col == 0 {
            return Err(invalid());
        }

        Ok(WellAddress {
            row: letter as u8 - b'A',
            col: col - 1,
        })
    }
}

/// One toggle cell of the plate.
#[derive(Debug, Clone)]
pub struct Well {
    pub address: WellAddress,
    pub interesting: bool,
}

/// The plate grid with its presentation marks. Exactly one row is active and
/// exactly one column within it is scaled whenever the marks are set.
#[derive(Debug, Clone)]
pub struct Plate {
    rows: u8,
    cols: u8,
    /// Row-major well storage.
    wells: Vec<Well>,
    pub active_row: Option<usize>,
    pub scaled_col: Option<usize>,
}

impl Plate {
    pub fn new(rows: u8, cols: u8) -> Result<Self, SheetError> {
        if rows == 0 || rows > MAX_ROWS || cols == 0 || cols > 99 {
            return Err(SheetError::InvalidPlate { rows, cols });
        }

        let mut wells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                wells.push(Well {
                    address: WellAddress { row, col },
                    interesting: false,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            wells,
            active_row: None,
            scaled_col: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    pub fn well(&self, row: usize, col: usize) -> Option<&Well> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.wells.get(row * self.cols() + col)
    }

    pub fn well_mut(&mut self, row: usize, col: usize) -> Option<&mut Well> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        let cols = self.cols();
        self.wells.get_mut(row * cols + col)
    }

    /// Move both marks in one step, keeping the one-active-row /
    /// one-scaled-column invariant.
    pub fn mark_active(&mut self, row: usize, col: usize) {
        if row >= self.rows() || col >= self.cols() {
            return;
        }
        self.active_row = Some(row);
        self.scaled_col = Some(col);
    }
}

/// Serialized form of a plate: dimensions plus the wells already marked
/// interesting, by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateSpec {
    #[serde(default = "default_rows")]
    pub rows: u8,
    #[serde(default = "default_cols")]
    pub cols: u8,
    #[serde(default)]
    pub interesting: Vec<String>,
}

fn default_rows() -> u8 {
    8
}

fn default_cols() -> u8 {
    12
}

impl PlateSpec {
    pub fn build(&self) -> Result<Plate, SheetError> {
        let mut plate = Plate::new(self.rows, self.cols)?;
        for name in &self.interesting {
            let address: WellAddress = name.parse()?;
            match plate.well_mut(address.row as usize, address.col as usize) {
                Some(well) => well.interesting = true,
                None => return Err(SheetError::InvalidWellName(name.clone())),
            }
        }
        Ok(plate)
    }
}
