//! I/O error types for cadenza-io.

use std::path::PathBuf;

use cadenza_dtw::AlignError;

/// Errors from manifest parsing and catalog assembly.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the manifest file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when a manifest line does not hold exactly two tokens.
    /// Loading stops at the first offending line.
    #[error("bad manifest line {line} in {path}: expected 2 entries, got {got}")]
    ManifestFormat {
        /// Path to the manifest file.
        path: PathBuf,
        /// Zero-based line number of the offending line.
        line: usize,
        /// Number of whitespace-separated tokens found.
        got: usize,
    },

    /// Returned when a signal source cannot produce a signal for a
    /// referenced path.
    #[error("cannot load signal from {path}: {reason}")]
    SignalLoad {
        /// Path referenced by the manifest entry.
        path: PathBuf,
        /// Source-specific failure description.
        reason: String,
    },

    /// Returned when loaded sample data fails signal validation.
    #[error("invalid signal data in {path}")]
    InvalidSignal {
        /// Path referenced by the manifest entry.
        path: PathBuf,
        /// Underlying validation error.
        source: AlignError,
    },
}
