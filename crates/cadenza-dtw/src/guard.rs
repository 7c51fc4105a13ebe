//! Pre-flight memory-budget check for the accumulated-distance matrix.

use crate::error::AlignError;

/// Memory budget for a single alignment run, in whole MB.
///
/// The footprint model is `frames_x^2 * 8` bytes scaled to MB: only the
/// first signal's frame count enters the formula, an asymmetry retained
/// from the original matcher. The check runs before any allocation; a
/// rejection is fatal to that one `compute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBudget {
    ceiling_mb: u64,
}

impl MemoryBudget {
    /// Default ceiling of 4000 MB.
    pub const DEFAULT_CEILING_MB: u64 = 4000;

    /// Create a budget with an explicit ceiling in MB.
    #[must_use]
    pub fn new(ceiling_mb: u64) -> Self {
        Self { ceiling_mb }
    }

    /// Return the configured ceiling in MB.
    #[must_use]
    pub fn ceiling_mb(&self) -> u64 {
        self.ceiling_mb
    }

    /// Return the projected matrix footprint in MB for a signal of
    /// `frames` frames.
    #[must_use]
    pub fn projected_mb(frames: usize) -> u64 {
        let bytes = (frames as u128)
            .saturating_mul(frames as u128)
            .saturating_mul(8);
        u64::try_from(bytes / (1024 * 1024)).unwrap_or(u64::MAX)
    }

    /// Reject when the projected footprint exceeds the ceiling. A footprint
    /// exactly at the ceiling is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::ResourceExceeded`] when
    /// `projected_mb(frames) > ceiling_mb`.
    pub fn check(&self, frames: usize) -> Result<(), AlignError> {
        let projected_mb = Self::projected_mb(frames);
        if projected_mb > self.ceiling_mb {
            return Err(AlignError::ResourceExceeded {
                frames,
                projected_mb,
                ceiling_mb: self.ceiling_mb,
            });
        }
        Ok(())
    }
}

impl Default for MemoryBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CEILING_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_signal_accepted() {
        assert!(MemoryBudget::default().check(1_000).is_ok());
    }

    #[test]
    fn accepts_exactly_at_ceiling() {
        // 22900^2 * 8 = 4_195_280_000 bytes -> 4000 MB after integer division.
        assert_eq!(MemoryBudget::projected_mb(22_900), 4000);
        assert!(MemoryBudget::default().check(22_900).is_ok());
    }

    #[test]
    fn rejects_just_over_ceiling() {
        // 22901^2 * 8 = 4_195_646_408 bytes -> 4001 MB.
        assert_eq!(MemoryBudget::projected_mb(22_901), 4001);
        let err = MemoryBudget::default().check(22_901).unwrap_err();
        assert!(matches!(
            err,
            AlignError::ResourceExceeded {
                frames: 22_901,
                projected_mb: 4001,
                ceiling_mb: 4000,
            }
        ));
    }

    #[test]
    fn custom_ceiling() {
        let budget = MemoryBudget::new(1);
        // 363^2 * 8 = 1_054_152 bytes -> exactly 1 MB, accepted.
        assert!(budget.check(363).is_ok());
        // 512^2 * 8 = 2_097_152 bytes -> 2 MB, rejected.
        assert!(matches!(
            budget.check(512),
            Err(AlignError::ResourceExceeded { projected_mb: 2, .. })
        ));
    }

    #[test]
    fn huge_frame_count_does_not_overflow() {
        let budget = MemoryBudget::default();
        assert!(budget.check(usize::MAX).is_err());
    }
}
