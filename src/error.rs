use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
//
// An empty filter result is deliberately NOT represented here: zero matches
// is a normal outcome the views report with a friendly message.
// ---------------------------------------------------------------------------

/// Failure to produce a dataset from an input file.
///
/// Fatal at startup (every view needs the dataset); recoverable from
/// File → Open…, where the previous dataset stays in place.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported file extension '.{0}' (expected .csv or .json)")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {field}: {reason}")]
    InvalidField {
        row: usize,
        field: &'static str,
        reason: String,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed per-interaction input. Caught at the view boundary and shown
/// inline; the user corrects the input and the next frame recomputes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: '{input}' is not a number")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    #[error("number of pubs must be between {min} and {max}, got {got}")]
    CountOutOfRange { min: usize, max: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_read_well_inline() {
        let err = ValidationError::NotANumber {
            field: "latitude",
            input: "fifty".to_string(),
        };
        assert_eq!(err.to_string(), "latitude: 'fifty' is not a number");

        let err = ValidationError::CountOutOfRange {
            min: 1,
            max: 10,
            got: 11,
        };
        assert_eq!(
            err.to_string(),
            "number of pubs must be between 1 and 10, got 11"
        );
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = DataLoadError::MissingColumn("latitude");
        assert_eq!(err.to_string(), "missing required column 'latitude'");
    }
}
