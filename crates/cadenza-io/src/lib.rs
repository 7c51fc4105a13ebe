//! Reference-manifest loading and catalog assembly for cadenza.
//!
//! The alignment core consumes signals through the `Signal` capability; this
//! crate supplies the collaborators around it: a flat-text manifest parser
//! and a pluggable [`SignalSource`] seam for turning manifest paths into
//! in-memory signals. Decoding of concrete file containers stays outside the
//! workspace.

mod catalog;
mod error;
mod manifest;

pub use catalog::{SignalSource, load_index};
pub use error::IoError;
pub use manifest::{ManifestEntry, ManifestReader};
