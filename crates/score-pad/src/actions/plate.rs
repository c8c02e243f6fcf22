//! Contact-sheet grid actions.

/// Actions for the plate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateAction {
    /// Move the row cursor down, resetting the column.
    RowNext,
    /// Move the row cursor up, resetting the column.
    RowPrevious,
    /// Move the column cursor right.
    ColumnNext,
    /// Move the column cursor left.
    ColumnPrevious,
    /// Flip the interesting mark on the active well.
    ToggleInteresting,
}
