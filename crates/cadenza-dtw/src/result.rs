//! Immutable result of one alignment run.

use crate::distance::Distance;
use crate::path::WarpPath;
use crate::signal::{BufferSignal, Signal};

/// The outcome of aligning two signals: the dissimilarity score and the
/// ascending warp path between frame indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    distance: Distance,
    path: WarpPath,
}

impl MatchResult {
    pub(crate) fn new(distance: Distance, path: WarpPath) -> Self {
        Self { distance, path }
    }

    /// Return the dissimilarity score.
    #[must_use]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Return the warp path.
    #[must_use]
    pub fn path(&self) -> &WarpPath {
        &self.path
    }

    /// Materialize the warped pair of signals: each output has one frame per
    /// path step, sampling the respective input along the path, so the two
    /// outputs line up frame-for-frame. Sample rates are carried over from
    /// the inputs.
    ///
    /// `x` and `y` must be the signals this result was computed from.
    #[must_use]
    pub fn warp<X, Y>(&self, x: &X, y: &Y) -> (BufferSignal, BufferSignal)
    where
        X: Signal + ?Sized,
        Y: Signal + ?Sized,
    {
        debug_assert!(
            self.path
                .last()
                .is_some_and(|s| s.x == x.frames() - 1 && s.y == y.frames() - 1),
            "warp called with signals of different shape than the aligned pair"
        );

        let mut warped_x = Vec::with_capacity(self.path.len());
        let mut warped_y = Vec::with_capacity(self.path.len());
        for step in &self.path {
            warped_x.push(x.frame(step.x));
            warped_y.push(y.frame(step.y));
        }

        (
            BufferSignal::new_unchecked(warped_x, x.sample_rate()),
            BufferSignal::new_unchecked(warped_y, y.sample_rate()),
        )
    }
}
