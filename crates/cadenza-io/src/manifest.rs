//! Flat-text reference-manifest parser.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::IoError;

/// A single manifest entry: the label and the path it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Annotation label. Not required to be unique across the manifest.
    pub label: String,
    /// Path to the referenced signal file.
    pub path: PathBuf,
}

/// Reads a flat-text reference manifest.
///
/// Expected format, one entry per line:
/// - `<label> <path>` separated by whitespace
/// - lines starting with `#` are comments and skipped
/// - blank and whitespace-only lines are skipped
/// - any other token count is a fatal error carrying the 0-based line number
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::ManifestFormat`] | Line with a token count other than 2 |
pub struct ManifestReader {
    path: PathBuf,
}

impl ManifestReader {
    /// Create a new reader for the given manifest path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and parse the manifest, preserving entry order.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<ManifestEntry>, IoError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| IoError::FileNotFound {
                path: self.path.clone(),
                source: e,
            })?;

        let mut entries = Vec::new();
        for (line_number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                return Err(IoError::ManifestFormat {
                    path: self.path.clone(),
                    line: line_number,
                    got: tokens.len(),
                });
            }

            entries.push(ManifestEntry {
                label: tokens[0].to_string(),
                path: PathBuf::from(tokens[1]),
            });
        }

        info!(n_entries = entries.len(), "manifest loaded");
        Ok(entries)
    }
}
