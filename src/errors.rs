//! Errors raised while reading TextGrid files and selecting target intervals.

use std::{num::ParseFloatError, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextGridError>;

#[derive(Error, Debug)]
pub enum TextGridError {
    /// The file could not be opened or read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit set in `ParseOptions::max_bytes`.
    #[error("'{}' is {size} bytes, limit is {limit} bytes", path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// No `name = "..."` line matches the requested tier.
    #[error("Tier '{tier}' not found in '{}'", path.display())]
    TierNotFound {
        tier: String,
        path: PathBuf,
    },

    /// Tier header found, but `xmin`/`xmax` missing before the interval list.
    #[error("Could not find xmin/xmax for tier '{tier}' in '{}'", path.display())]
    MissingBounds {
        tier: String,
        path: PathBuf,
    },

    /// A time value that is not a valid float. Passed through as is.
    #[error(transparent)]
    ParseFloat(#[from] ParseFloatError),

    /// An `intervals [n]:` marker without the three lines that must follow it.
    /// `line` is 1-based.
    #[error("Incomplete interval starting at line {line} in '{}'", path.display())]
    TruncatedInterval {
        line: usize,
        path: PathBuf,
    },

    /// Zero or several intervals carry a target label.
    #[error("Expected exactly one target interval in '{}', found {count}", path.display())]
    AmbiguousOrMissingTarget {
        count: usize,
        path: PathBuf,
    },

    #[error("Failed to export to JSON: {0}")]
    Json(#[from] serde_json::Error),
}
