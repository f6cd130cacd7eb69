use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests, normalizes, or exports location data.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the CSV writer implementation.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when JSON serialization of the map specification fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a workbook does not follow the expected conventions.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when an expected column header is absent from a sheet.
    #[error("missing column '{column}' in sheet '{sheet}'")]
    MissingColumn { sheet: String, column: String },

    /// Raised when a coordinate cell cannot be parsed as a number.
    #[error("invalid coordinate value '{value}' in column {column}")]
    InvalidCoordinate { column: String, value: String },

    /// Raised when a record that should appear on the map carries no
    /// geocoded coordinates.
    #[error("record '{school_id}' has no geocoded coordinates")]
    MissingGeocode { school_id: String },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
