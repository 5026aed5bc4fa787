//! Error types for partition storage

use std::path::PathBuf;

/// Errors during partition I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on a path
    #[error("io error on {path}: {source}")]
    Io {
        /// The offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A partition file holds invalid JSON
    #[error("invalid partition file {path}: {source}")]
    Decode {
        /// The offending file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be serialized
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// A backup was requested for a file that does not exist
    #[error("cannot back up missing file {0}")]
    BackupSourceMissing(PathBuf),
}

impl StoreError {
    /// Create an IO error for a path
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::BackupSourceMissing(PathBuf::from("2.grade.json"));
        assert_eq!(err.to_string(), "cannot back up missing file 2.grade.json");
    }
}
