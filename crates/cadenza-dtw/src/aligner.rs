//! DTW alignment: guard check, DP fill, distance extraction, traceback.

use tracing::{debug, instrument};

use crate::distance::Distance;
use crate::error::AlignError;
use crate::guard::MemoryBudget;
use crate::matrix::AccMatrix;
use crate::observer::{AlignObserver, Milestone, NoopObserver};
use crate::path::{PathStep, WarpPath};
use crate::result::MatchResult;
use crate::signal::Signal;

/// Immutable DTW aligner configuration. Thread-safe and copyable.
///
/// Each `compute` call owns its accumulated-distance matrix exclusively and
/// releases it on return, so a single `Aligner` may serve concurrent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner {
    budget: MemoryBudget,
}

impl Aligner {
    /// Create an aligner with the default 4000 MB memory budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            budget: MemoryBudget::default(),
        }
    }

    /// Create an aligner with an explicit memory budget.
    #[must_use]
    pub fn with_budget(budget: MemoryBudget) -> Self {
        Self { budget }
    }

    /// Return the configured memory budget.
    #[must_use]
    pub fn budget(&self) -> MemoryBudget {
        self.budget
    }

    /// Align two signals, returning the dissimilarity score and the
    /// minimal-length monotone warp path.
    ///
    /// Runs in O(frames_x * frames_y) time and space.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySignal`] | Either signal has zero frames |
    /// | [`AlignError::ResourceExceeded`] | Projected matrix footprint over budget |
    pub fn compute<X, Y>(&self, x: &X, y: &Y) -> Result<MatchResult, AlignError>
    where
        X: Signal + ?Sized,
        Y: Signal + ?Sized,
    {
        self.compute_observed(x, y, &mut NoopObserver)
    }

    /// Align two signals, notifying `observer` at each algorithm milestone.
    ///
    /// Milestones fire in the order declared on [`Milestone`]. See
    /// [`compute`][Self::compute] for the error contract.
    #[instrument(skip_all, fields(frames_x = x.frames(), frames_y = y.frames()))]
    pub fn compute_observed<X, Y>(
        &self,
        x: &X,
        y: &Y,
        observer: &mut dyn AlignObserver,
    ) -> Result<MatchResult, AlignError>
    where
        X: Signal + ?Sized,
        Y: Signal + ?Sized,
    {
        let frames_x = x.frames();
        let frames_y = y.frames();
        if frames_x == 0 || frames_y == 0 {
            return Err(AlignError::EmptySignal);
        }
        self.budget.check(frames_x)?;

        let mut acc = AccMatrix::new(frames_x, frames_y);
        observer.on_milestone(Milestone::MatrixInitialized);

        fill(&mut acc, x, y);
        observer.on_milestone(Milestone::FillDone);
        debug!("accumulated-distance matrix filled");

        let distance = acc.get(frames_x, frames_y);
        observer.on_milestone(Milestone::DistanceComputed);
        debug!(distance, "terminal distance extracted");

        let path = traceback(&acc);
        observer.on_milestone(Milestone::PathComputed);
        debug!(path_len = path.len(), "warp path reconstructed");

        Ok(MatchResult::new(Distance::new(distance), path))
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward DP fill over the interior cells.
///
/// `acc(x, y) = min(diag, left, up) + |X[x-1] - Y[y-1]|` — best predecessor
/// plus the pointwise absolute amplitude difference.
fn fill<X, Y>(acc: &mut AccMatrix, x: &X, y: &Y)
where
    X: Signal + ?Sized,
    Y: Signal + ?Sized,
{
    for i in 1..=acc.frames_x() {
        let xi = x.frame(i - 1);
        for j in 1..=acc.frames_y() {
            let best = acc
                .get(i - 1, j - 1)
                .min(acc.get(i, j - 1))
                .min(acc.get(i - 1, j));
            acc.set(i, j, best + (xi - y.frame(j - 1)).abs());
        }
    }
}

/// Backward path reconstruction from the terminal cell.
///
/// Each iteration records the frame pair `(x-1, y-1)` and steps to a
/// predecessor: the diagonal whenever it is tied or better than both
/// alternatives (so the path takes the fewest steps among optimal paths),
/// otherwise up when the up predecessor is the minimum, otherwise left.
/// Boundary cells are `+INF` for non-empty signals, which steers both
/// counters to zero on the same final diagonal step even for non-square
/// matrices. The collected list is reversed once into ascending order.
fn traceback(acc: &AccMatrix) -> WarpPath {
    let mut x = acc.frames_x();
    let mut y = acc.frames_y();
    let mut steps = Vec::with_capacity(x.max(y));

    while x != 0 && y != 0 {
        steps.push(PathStep { x: x - 1, y: y - 1 });
        let diag = acc.get(x - 1, y - 1);
        let up = acc.get(x - 1, y);
        let left = acc.get(x, y - 1);
        if diag <= up && diag <= left {
            x -= 1;
            y -= 1;
        } else if up <= left {
            x -= 1;
        } else {
            y -= 1;
        }
    }

    steps.reverse();
    WarpPath::new(steps)
}
