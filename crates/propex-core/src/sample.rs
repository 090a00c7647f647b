//! Sample type abstraction for f32/f64 audio processing.
//!
//! The smoothing engine keeps its coefficient in `f32` and applies it to
//! buffers of either precision through this trait. Everything inlines, so the
//! generic code monomorphizes to the same loop a hand-written version would.

use std::ops::Mul;

/// Trait for audio sample types (f32, f64).
///
/// # Example: Applying a Gain
///
/// ```
/// use propex_core::Sample;
///
/// fn apply_gain<S: Sample>(gain: f32, input: &[S], output: &mut [S]) {
///     let gain = S::from_f32(gain);
///     for (i, o) in input.iter().zip(output.iter_mut()) {
///         *o = *i * gain;
///     }
/// }
///
/// let mut out = [0.0f64; 2];
/// apply_gain(0.5, &[1.0f64, -2.0], &mut out);
/// assert_eq!(out, [0.5, -1.0]);
/// ```
pub trait Sample: Copy + Send + Sync + 'static + Mul<Output = Self> {
    /// Convert from f32.
    fn from_f32(value: f32) -> Self;
}

impl Sample for f32 {
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value
    }
}

impl Sample for f64 {
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_preserves_coefficient() {
        let gain = 0.020625f32;
        assert_eq!(f32::from_f32(gain), gain);
        assert_eq!(f64::from_f32(gain) as f32, gain);
    }
}
