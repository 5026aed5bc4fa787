//! Delimited source-file reading
//!
//! Editors export from several spreadsheet tools, so files arrive as comma,
//! semicolon, or tab separated text. [`TableReader`] sniffs the delimiter
//! from the header line (unless an explicit override is set) and decodes the
//! file into [`RawRecord`]s, trimming headers and values and tolerating
//! ragged rows.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::TableError;
use crate::fields::FieldKey;
use crate::record::RawRecord;

/// Delimiters tried by the sniffer, in tie-break priority order
const CANDIDATES: [u8; 3] = [b'\t', b';', b','];

/// Pick the most plausible delimiter from a header line
///
/// The candidate with the highest occurrence count wins; ties and headers
/// containing no candidate at all fall back to comma.
#[must_use]
pub fn sniff_delimiter(header_line: &str) -> u8 {
    let mut best = b',';
    let mut best_count = 0usize;
    for candidate in CANDIDATES {
        let count = header_line.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Quote-aware CSV/TSV reader producing [`RawRecord`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReader {
    delimiter: Option<u8>,
}

impl TableReader {
    /// Create a reader that sniffs the delimiter per file
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a fixed delimiter
    #[inline]
    #[must_use]
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
        }
    }

    /// Decode one source file into rows
    ///
    /// Column headers that resolve to no [`FieldKey`] are dropped; a file
    /// where *no* header resolves is rejected, since every row would decode
    /// to a blank record.
    ///
    /// # Errors
    /// Returns [`TableError`] when the file cannot be read or decoded. The
    /// caller treats this as fatal for this file only.
    pub fn read_path(&self, path: &Path) -> Result<Vec<RawRecord>, TableError> {
        let text = fs::read_to_string(path).map_err(|e| TableError::io(path, e))?;
        self.read_str(&text, path)
    }

    /// Decode source text; `path` is used for diagnostics only
    pub fn read_str(&self, text: &str, path: &Path) -> Result<Vec<RawRecord>, TableError> {
        let header_line = text.lines().next().ok_or_else(|| TableError::MissingHeader {
            path: path.to_path_buf(),
        })?;
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| sniff_delimiter(header_line));
        debug!(path = %path.display(), delimiter = %(delimiter as char), "decoding source file");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| TableError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?
            .clone();
        let columns: Vec<Option<FieldKey>> =
            headers.iter().map(FieldKey::from_header).collect();
        if columns.iter().all(Option::is_none) {
            return Err(TableError::NoKnownColumns {
                path: path.to_path_buf(),
            });
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| TableError::Decode {
                path: path.to_path_buf(),
                source: e,
            })?;
            let pairs = columns
                .iter()
                .zip(record.iter())
                .filter_map(|(key, value)| key.map(|k| (k, value)));
            rows.push(RawRecord::from_fields(pairs));
        }
        Ok(rows)
    }
}
