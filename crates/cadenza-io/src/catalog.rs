//! Catalog assembly: manifest entries resolved into a reference index.

use std::path::Path;

use cadenza_dtw::{BufferSignal, CatalogEntry, ReferenceIndex, Signal};
use tracing::{debug, instrument};

use crate::IoError;
use crate::manifest::ManifestReader;

/// Resolves a manifest path into an in-memory signal.
///
/// This is the collaborator seam for concrete file containers: the core
/// never decodes files itself. Sources must reject multi-channel input
/// before handing a signal over.
pub trait SignalSource {
    /// Load the signal referenced by `path`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::SignalLoad`] | The container cannot be read or decoded |
    /// | [`IoError::InvalidSignal`] | Decoded samples fail signal validation |
    fn load(&self, path: &Path) -> Result<BufferSignal, IoError>;
}

impl<F> SignalSource for F
where
    F: Fn(&Path) -> Result<BufferSignal, IoError>,
{
    fn load(&self, path: &Path) -> Result<BufferSignal, IoError> {
        self(path)
    }
}

/// Parse the manifest at `manifest` and resolve every entry through
/// `source`, assembling a [`ReferenceIndex`] in manifest order.
///
/// # Errors
///
/// Propagates [`ManifestReader::read`] failures and the first
/// [`SignalSource::load`] failure; there is no partial load.
#[instrument(skip(source), fields(manifest = %manifest.display()))]
pub fn load_index<S: SignalSource>(
    manifest: &Path,
    source: &S,
) -> Result<ReferenceIndex<BufferSignal>, IoError> {
    let entries = ManifestReader::new(manifest).read()?;

    let mut catalog = Vec::with_capacity(entries.len());
    for entry in entries {
        let signal = source.load(&entry.path)?;
        debug!(label = %entry.label, frames = signal.frames(), "catalog entry loaded");
        catalog.push(CatalogEntry::new(entry.label, signal));
    }

    Ok(ReferenceIndex::new(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixed_source(samples: Vec<f64>) -> impl SignalSource {
        move |path: &Path| {
            BufferSignal::new(samples.clone(), 8_000).map_err(|source| IoError::InvalidSignal {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    #[test]
    fn builds_index_in_manifest_order() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"zebra z.wav\nalpha a.wav\n").unwrap();
        f.flush().unwrap();

        let index = load_index(f.path(), &fixed_source(vec![0.0, 1.0])).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries()[0].label(), "zebra");
        assert_eq!(index.entries()[1].label(), "alpha");
    }

    #[test]
    fn source_failure_aborts_the_load() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"only missing.wav\n").unwrap();
        f.flush().unwrap();

        let failing = |path: &Path| -> Result<BufferSignal, IoError> {
            Err(IoError::SignalLoad {
                path: path.to_path_buf(),
                reason: "no such container".to_string(),
            })
        };
        let result = load_index(f.path(), &failing);
        assert!(matches!(result, Err(IoError::SignalLoad { .. })));
    }

    #[test]
    fn invalid_samples_surface_as_invalid_signal() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"bad b.wav\n").unwrap();
        f.flush().unwrap();

        let result = load_index(f.path(), &fixed_source(vec![f64::NAN]));
        assert!(matches!(result, Err(IoError::InvalidSignal { .. })));
    }
}
