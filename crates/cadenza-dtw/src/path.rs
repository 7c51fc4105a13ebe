//! Warp path types for DTW alignment.

/// A single step in a warp path, mapping frame `x` of the first signal to
/// frame `y` of the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// Frame index in the first signal.
    pub x: usize,
    /// Frame index in the second signal.
    pub y: usize,
}

/// An ascending monotone warp path from `(0, 0)` to
/// `(frames_x - 1, frames_y - 1)`.
///
/// Successive steps differ by exactly one of `(+1, 0)`, `(0, +1)`, or
/// `(+1, +1)`. Immutable once produced by an alignment run.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpPath(Vec<PathStep>);

impl WarpPath {
    pub(crate) fn new(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }

    /// Return the steps as a slice, in ascending order.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the first step of the path.
    #[must_use]
    pub fn first(&self) -> Option<PathStep> {
        self.0.first().copied()
    }

    /// Return the last step of the path.
    #[must_use]
    pub fn last(&self) -> Option<PathStep> {
        self.0.last().copied()
    }
}

impl<'a> IntoIterator for &'a WarpPath {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
