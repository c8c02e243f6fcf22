use thiserror::Error;

/// Errors raised while loading or addressing a score document.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid well name '{0}'")]
    InvalidWellName(String),

    #[error("plate dimensions {rows}x{cols} are not addressable")]
    InvalidPlate { rows: u8, cols: u8 },

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
}
