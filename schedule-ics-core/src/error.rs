//! Error types for schedule loading and calendar export.

use thiserror::Error;

/// Errors that can occur while loading a schedule or exporting a calendar.
///
/// Every variant is terminal for the current operation. Malformed items
/// inside an otherwise valid schedule are not errors; they are skipped
/// during expansion.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid file type '{name}'. Please select a .{extension} schedule file")]
    InvalidExtension { name: String, extension: String },

    #[error("Could not parse schedule file: {0}")]
    MalformedDocument(String),

    #[error("Invalid schedule file: missing 'schedule' field")]
    MissingScheduleField,

    #[error("Please provide both a start and an end date (YYYY-MM-DD)")]
    MissingDateRange,

    #[error("Error generating calendar: {0}")]
    ExpansionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for schedule-ics operations.
pub type CoreResult<T> = Result<T, CoreError>;
