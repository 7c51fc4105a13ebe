//! Milestone observer hook for alignment runs.
//!
//! The original matcher printed progress to the console during `compute`.
//! That side effect is replaced by an optional observer invoked at defined
//! algorithm milestones, defaulting to a no-op.

/// Milestones reported during one alignment run, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// The accumulated-distance matrix has been allocated and its boundary
    /// cells initialized.
    MatrixInitialized,
    /// The forward DP fill has completed.
    FillDone,
    /// The terminal-cell distance has been extracted.
    DistanceComputed,
    /// The warp path has been reconstructed and reversed into ascending order.
    PathComputed,
}

/// Receives milestone notifications from [`Aligner::compute_observed`][crate::Aligner::compute_observed].
pub trait AlignObserver {
    /// Called once per milestone, in declaration order.
    fn on_milestone(&mut self, milestone: Milestone);
}

/// Observer that ignores every milestone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AlignObserver for NoopObserver {
    fn on_milestone(&mut self, _milestone: Milestone) {}
}
