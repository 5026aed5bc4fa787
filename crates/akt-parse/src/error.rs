//! Error types for source decoding and record construction

use std::path::PathBuf;

use crate::fields::FieldKey;

/// Errors while building an activity record from a decoded row
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A required column is blank or absent
    #[error("row is missing required field '{field}'")]
    MissingField {
        /// The blank column
        field: FieldKey,
    },
}

/// Errors while decoding a delimited source file
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// The offending file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file could not be decoded as delimited text
    #[error("decode error in {path}: {source}")]
    Decode {
        /// The offending file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: csv::Error,
    },

    /// The file has no header row
    #[error("{path} has no header row")]
    MissingHeader {
        /// The offending file
        path: PathBuf,
    },

    /// No header could be resolved to a known column
    #[error("{path} has no recognizable columns")]
    NoKnownColumns {
        /// The offending file
        path: PathBuf,
    },
}

impl TableError {
    /// Create an IO error for a path
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
