//! Error types for workbook loading and sheet extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for xlsx-object operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a workbook or accessing its sheets.
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied path does not exist or is not a regular file.
    #[error("Path does not exist or is not a file: {}", .0.display())]
    PathInvalid(PathBuf),

    /// The file could not be parsed as a workbook.
    #[error("Unable to parse workbook {}: {source}", path.display())]
    WorkbookParse {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A worksheet listed by the workbook could not be read.
    #[error("Unable to read worksheet '{name}': {source}")]
    WorksheetRead {
        name: String,
        #[source]
        source: calamine::Error,
    },

    /// Column data is ragged and cannot be transposed into rows.
    #[error("Column {column} has {found} values, expected {expected}")]
    MalformedSheetData {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// Positional sheet access outside the workbook.
    #[error("Sheet index {index} out of range for workbook with {len} sheets")]
    InvalidIndex { index: usize, len: usize },

    /// No sheet carries the requested name.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PathInvalid(PathBuf::from("missing.xlsx"));
        assert_eq!(
            err.to_string(),
            "Path does not exist or is not a file: missing.xlsx"
        );

        let err = Error::MalformedSheetData {
            column: 1,
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "Column 1 has 1 values, expected 2");

        let err = Error::InvalidIndex { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "Sheet index 3 out of range for workbook with 2 sheets"
        );
    }
}
