//! Nearest-neighbor lookup over a labeled reference catalog.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::aligner::Aligner;
use crate::error::AlignError;
use crate::result::MatchResult;
use crate::signal::Signal;

/// One labeled reference signal. Labels need not be unique; on a distance
/// tie the first-seen entry wins.
#[derive(Debug, Clone)]
pub struct CatalogEntry<S> {
    label: String,
    signal: S,
}

impl<S: Signal> CatalogEntry<S> {
    /// Create a new catalog entry.
    pub fn new(label: impl Into<String>, signal: S) -> Self {
        Self {
            label: label.into(),
            signal,
        }
    }

    /// Return the entry's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the entry's signal.
    #[must_use]
    pub fn signal(&self) -> &S {
        &self.signal
    }
}

/// Comparison strategy seam for the reference index.
///
/// The index is generic over how two signals are scored; [`DtwComparator`]
/// is the default. Implementations are shared across lookup workers.
pub trait Comparator: Sync {
    /// Score `x` against `y`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying comparison fails with.
    fn compare(&self, x: &dyn Signal, y: &dyn Signal) -> Result<MatchResult, AlignError>;
}

/// The default comparison strategy: full DTW alignment via an [`Aligner`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DtwComparator {
    aligner: Aligner,
}

impl DtwComparator {
    /// Create a comparator wrapping the given aligner.
    #[must_use]
    pub fn new(aligner: Aligner) -> Self {
        Self { aligner }
    }
}

impl Comparator for DtwComparator {
    fn compare(&self, x: &dyn Signal, y: &dyn Signal) -> Result<MatchResult, AlignError> {
        self.aligner.compute(x, y)
    }
}

/// The winning catalog entry for a lookup.
#[derive(Debug, Clone)]
pub struct LookupMatch {
    label: String,
    result: MatchResult,
}

impl LookupMatch {
    /// Return the winning entry's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the query-vs-winner alignment result.
    #[must_use]
    pub fn result(&self) -> &MatchResult {
        &self.result
    }

    /// Split into the label and the alignment result.
    #[must_use]
    pub fn into_parts(self) -> (String, MatchResult) {
        (self.label, self.result)
    }
}

/// An ordered, read-only collection of labeled reference signals with
/// exhaustive nearest-neighbor lookup.
///
/// Every candidate is fully scored — no pruning or early exit — so lookup
/// cost is O(N * frames_query * frames_entry). Entries are scored in
/// parallel; the reduction is by `(distance, entry index)` under a total
/// order, so the first-seen-wins tie-break is reproducible regardless of
/// worker scheduling.
#[derive(Debug)]
pub struct ReferenceIndex<S, C = DtwComparator> {
    entries: Vec<CatalogEntry<S>>,
    comparator: C,
}

impl<S: Signal> ReferenceIndex<S> {
    /// Create an index over `entries` with the default DTW comparator.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry<S>>) -> Self {
        Self::with_comparator(entries, DtwComparator::default())
    }
}

impl<S: Signal, C: Comparator> ReferenceIndex<S, C> {
    /// Create an index over `entries` with an explicit comparison strategy.
    #[must_use]
    pub fn with_comparator(entries: Vec<CatalogEntry<S>>, comparator: C) -> Self {
        Self { entries, comparator }
    }

    /// Return the catalog entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry<S>] {
        &self.entries
    }

    /// Return the number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score `query` against every catalog entry and return the entry with
    /// the smallest distance. An empty catalog yields `Ok(None)`, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Propagates the first comparison failure (e.g.
    /// [`AlignError::ResourceExceeded`]).
    #[instrument(skip_all, fields(n_entries = self.entries.len()))]
    pub fn lookup(&self, query: &dyn Signal) -> Result<Option<LookupMatch>, AlignError> {
        self.scan(query, None)
    }

    /// Like [`lookup`][Self::lookup], but abandons candidates not yet
    /// started once `deadline` has passed.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::DeadlineExceeded`] when the deadline fires
    /// before every entry has been scored.
    #[instrument(skip_all, fields(n_entries = self.entries.len()))]
    pub fn lookup_deadline(
        &self,
        query: &dyn Signal,
        deadline: Instant,
    ) -> Result<Option<LookupMatch>, AlignError> {
        self.scan(query, Some(deadline))
    }

    fn scan(
        &self,
        query: &dyn Signal,
        deadline: Option<Instant>,
    ) -> Result<Option<LookupMatch>, AlignError> {
        if self.entries.is_empty() {
            return Ok(None);
        }

        // Score every entry; the comparison dominates, so the reduction
        // below stays sequential.
        let scored: Vec<(usize, MatchResult)> = self
            .entries
            .par_iter()
            .enumerate()
            .map(|(index, entry)| {
                if deadline.is_some_and(|d| Instant::now() > d) {
                    return Err(AlignError::DeadlineExceeded);
                }
                let result = self.comparator.compare(query, &entry.signal)?;
                Ok((index, result))
            })
            .collect::<Result<_, AlignError>>()?;

        // (distance, index) under a total order: a later entry only wins
        // with a strictly smaller distance, so ties keep the first-seen one.
        let best = scored.into_iter().min_by(|(ia, ra), (ib, rb)| {
            ra.distance()
                .total_cmp(&rb.distance())
                .then(ia.cmp(ib))
        });

        Ok(best.map(|(index, result)| {
            let label = self.entries[index].label.clone();
            debug!(%label, distance = %result.distance(), "best match selected");
            LookupMatch { label, result }
        }))
    }
}
