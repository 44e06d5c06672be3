//! Error types for collection edits, record parsing, and file storage.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected edit on a [`crate::collection::HexagonCollection`] or a single
/// [`crate::hexagon::Hexagon`]. State is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// The index does not address an item of the collection.
    #[error("index {index} is out of bounds for {len} hexagons")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of hexagons at the time of the call.
        len: usize,
    },

    /// Sizes are circumradii and must be strictly positive.
    #[error("size must be positive, got {0}")]
    NonPositiveSize(f64),
}

/// Why a single line of a hexagon file was skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The line did not split into exactly five comma-separated fields.
    #[error("wrong field count: expected 5, got {0}")]
    WrongFieldCount(usize),

    /// One of the numeric fields could not be parsed.
    #[error("invalid number in field `{field}`: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The text as it appeared in the line.
        value: String,
    },

    /// The size field parsed but was zero or negative.
    #[error("size must be positive, got {0}")]
    NonPositiveSize(f64),
}

/// Failure to read or write a hexagon file. Aborts the whole load or save.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file to load does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be created or written.
    #[error("could not write {}: {source}", path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
