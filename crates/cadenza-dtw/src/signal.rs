//! Signal capability and the buffer-backed implementation.

use crate::error::AlignError;

/// Read-only capability over a single-channel amplitude sequence.
///
/// The aligner accepts any `Signal` implementation, so file-backed and
/// in-memory sources are interchangeable. Frame indices range over
/// `0..frames()`. Implementations must be `Sync`: signals are read-only
/// during alignment and are shared across lookup workers.
pub trait Signal: Sync {
    /// Return the number of frames in the signal.
    fn frames(&self) -> usize;

    /// Return the sample rate in samples per second.
    fn sample_rate(&self) -> u32;

    /// Return the amplitude at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= frames()`.
    fn frame(&self, index: usize) -> f64;
}

impl<S: Signal + ?Sized> Signal for &S {
    fn frames(&self) -> usize {
        (**self).frames()
    }

    fn sample_rate(&self) -> u32 {
        (**self).sample_rate()
    }

    fn frame(&self, index: usize) -> f64 {
        (**self).frame(index)
    }
}

/// Owned, validated in-memory signal. Guaranteed non-empty with all finite
/// samples and a positive sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct BufferSignal {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl BufferSignal {
    /// Create a new buffer signal, validating the sample data.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySignal`] | `samples` is empty |
    /// | [`AlignError::NonFiniteSample`] | Any sample is NaN or infinite |
    /// | [`AlignError::ZeroSampleRate`] | `sample_rate` is zero |
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Result<Self, AlignError> {
        if samples.is_empty() {
            return Err(AlignError::EmptySignal);
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(AlignError::NonFiniteSample { index });
        }
        if sample_rate == 0 {
            return Err(AlignError::ZeroSampleRate);
        }
        Ok(Self { samples, sample_rate })
    }

    /// Create a signal without validation. For internal use where the samples
    /// were read out of already-validated signals.
    pub(crate) fn new_unchecked(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self { samples, sample_rate }
    }

    /// Overwrite the amplitude at `index`. Used only to materialize warped
    /// output signals.
    ///
    /// # Panics
    ///
    /// Panics if `index >= frames()`.
    pub fn set_frame(&mut self, index: usize, value: f64) {
        self.samples[index] = value;
    }

    /// Truncate the signal to at most `len` frames. A no-op when the signal
    /// is already shorter.
    pub fn trim_to(&mut self, len: usize) {
        self.samples.truncate(len);
    }

    /// Return the samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }
}

impl Signal for BufferSignal {
    fn frames(&self) -> usize {
        self.samples.len()
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn frame(&self, index: usize) -> f64 {
        self.samples[index]
    }
}

impl AsRef<[f64]> for BufferSignal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_samples() {
        let result = BufferSignal::new(vec![], 8_000);
        assert!(matches!(result, Err(AlignError::EmptySignal)));
    }

    #[test]
    fn rejects_nan() {
        let result = BufferSignal::new(vec![0.5, f64::NAN], 8_000);
        assert!(matches!(result, Err(AlignError::NonFiniteSample { index: 1 })));
    }

    #[test]
    fn rejects_infinity() {
        let result = BufferSignal::new(vec![f64::INFINITY, 0.0], 8_000);
        assert!(matches!(result, Err(AlignError::NonFiniteSample { index: 0 })));
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let result = BufferSignal::new(vec![0.1, 0.2], 0);
        assert!(matches!(result, Err(AlignError::ZeroSampleRate)));
    }

    #[test]
    fn accepts_valid_signal() {
        let s = BufferSignal::new(vec![0.1, -0.2, 0.3], 44_100).unwrap();
        assert_eq!(s.frames(), 3);
        assert_eq!(s.sample_rate(), 44_100);
        assert_eq!(s.frame(1), -0.2);
    }

    #[test]
    fn set_frame_overwrites() {
        let mut s = BufferSignal::new(vec![0.0, 0.0], 8_000).unwrap();
        s.set_frame(1, 0.75);
        assert_eq!(s.as_slice(), &[0.0, 0.75]);
    }

    #[test]
    fn trim_to_truncates() {
        let mut s = BufferSignal::new(vec![1.0, 2.0, 3.0, 4.0], 8_000).unwrap();
        s.trim_to(2);
        assert_eq!(s.as_slice(), &[1.0, 2.0]);
        s.trim_to(10);
        assert_eq!(s.frames(), 2);
    }

    #[test]
    fn reference_implements_signal() {
        let s = BufferSignal::new(vec![1.0, 2.0], 8_000).unwrap();
        let r: &BufferSignal = &s;
        assert_eq!(Signal::frames(&r), 2);
        assert_eq!(Signal::frame(&r, 0), 1.0);
    }
}
