//! Pairwise DTW signal alignment and nearest-neighbor lookup.
//!
//! Pure compute library — zero I/O. Provides dynamic time warping alignment
//! between two single-channel signals (accumulated-distance matrix, scalar
//! dissimilarity score, minimal-length monotone warp path), a pre-flight
//! memory-budget guard, and an exhaustive nearest-neighbor index over a
//! labeled signal catalog.

mod aligner;
mod distance;
mod error;
mod guard;
mod index;
mod matrix;
mod observer;
mod path;
mod result;
mod signal;

pub use aligner::Aligner;
pub use distance::Distance;
pub use error::AlignError;
pub use guard::MemoryBudget;
pub use index::{CatalogEntry, Comparator, DtwComparator, LookupMatch, ReferenceIndex};
pub use observer::{AlignObserver, Milestone, NoopObserver};
pub use path::{PathStep, WarpPath};
pub use result::MatchResult;
pub use signal::{BufferSignal, Signal};
