use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce the enriched table from its source.
///
/// Fatal to the current render cycle; the UI decides whether to offer a retry.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required columns: {}", .path.display(), .missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("malformed record at line {line} of {}: {source}", .path.display())]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// A year selection that is neither `"All"` nor an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} selection '{value}' is not a year")]
pub struct FilterInputError {
    pub field: &'static str,
    pub value: String,
}
