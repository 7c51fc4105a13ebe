//! Error types for signal validation, alignment, and lookup.

/// Errors from signal validation, DTW alignment, and index lookup.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    /// Returned when a signal with zero frames is handed to the aligner.
    #[error("signal must have at least one frame")]
    EmptySignal,

    /// Returned when a buffer signal contains NaN, infinity, or negative infinity.
    #[error("signal contains non-finite sample at index {index}")]
    NonFiniteSample {
        /// Position of the first non-finite sample found.
        index: usize,
    },

    /// Returned when a buffer signal is constructed with a zero sample rate.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// Returned when the projected accumulated-distance matrix would exceed
    /// the memory budget. Fatal to the one `compute` call; callers may
    /// downsample the signal and retry.
    #[error(
        "projected cost matrix of {projected_mb} MB for {frames} frames exceeds the {ceiling_mb} MB budget"
    )]
    ResourceExceeded {
        /// Frame count of the first (query-side) signal.
        frames: usize,
        /// Projected matrix footprint in MB.
        projected_mb: u64,
        /// Configured budget ceiling in MB.
        ceiling_mb: u64,
    },

    /// Returned when a lookup deadline passes before every catalog entry
    /// has been scored.
    #[error("lookup deadline passed before all catalog entries were scored")]
    DeadlineExceeded,
}
