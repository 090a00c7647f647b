//! Gain coefficient smoothing for click-free parameter changes.
//!
//! [`SmoothingState`] moves the applied gain coefficient toward the target
//! from the [`ParameterRegisters`] with a one-pole low-pass filter:
//!
//! ```text
//! current += time_constant * (target - current)
//! ```
//!
//! The filter is evaluated once per sub-block of [`SUB_BLOCK_SIZE`] samples,
//! and every sample of the sub-block is multiplied by the same coefficient.
//! Once the coefficient is within [`SETTLE_THRESHOLD`] of the target at the
//! start of a cycle it snaps to the target, and the cycle becomes a plain
//! scalar multiply. The snap keeps steady-state output bit-stable instead of
//! letting the filter creep toward the target forever.
//!
//! # Example
//!
//! ```
//! use propex_core::{ParameterRegisters, SmoothingState};
//!
//! let mut state = SmoothingState::new(48000.0, 990.0);
//! let registers = ParameterRegisters::new(); // unity target
//!
//! let input = [1.0f32; 32];
//! let mut output = [0.0f32; 32];
//! state.process(&registers, &input, &mut output);
//!
//! // Still fading in from silence
//! assert!(output[31] < 0.05);
//! ```
//!
//! # Thread Safety
//!
//! Processing takes `&mut self`. One instance belongs to one audio thread.

use crate::registers::ParameterRegisters;
use crate::sample::Sample;

/// Number of samples that share one filter update.
pub const SUB_BLOCK_SIZE: usize = 16;

/// Distance below which the coefficient counts as converged.
pub const SETTLE_THRESHOLD: f32 = 0.01;

/// Default smoother cutoff in Hz.
pub const DEFAULT_CUTOFF_HZ: f32 = 990.0;

/// The applied gain coefficient and its filter constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingState {
    current_coefficient: f32,
    /// `cutoff_hz / sample_rate`, fixed at construction.
    time_constant: f32,
}

impl SmoothingState {
    /// Create a smoother for the given sample rate.
    ///
    /// The coefficient starts at `0.0`, so the first cycles fade in.
    ///
    /// The filter constant is clamped to `(0, 1]`: at rates at or below
    /// `cutoff_hz` (including a rate of 0) the coefficient reaches the target
    /// in a single sub-block.
    pub fn new(sample_rate: f64, cutoff_hz: f32) -> Self {
        let k = (cutoff_hz as f64 / sample_rate) as f32;
        Self {
            current_coefficient: 0.0,
            time_constant: if k.is_nan() { 1.0 } else { k.clamp(f32::MIN_POSITIVE, 1.0) },
        }
    }

    /// Start from `coefficient` instead of silence.
    pub fn with_coefficient(mut self, coefficient: f32) -> Self {
        self.current_coefficient = coefficient;
        self
    }

    /// The coefficient applied to the most recent sub-block.
    #[inline]
    pub fn current_coefficient(&self) -> f32 {
        self.current_coefficient
    }

    /// The one-pole filter constant.
    #[inline]
    pub fn time_constant(&self) -> f32 {
        self.time_constant
    }

    /// Returns true if `target` is within the settling threshold.
    #[inline]
    pub fn is_settled(&self, target: f32) -> bool {
        (self.current_coefficient - target).abs() < SETTLE_THRESHOLD
    }

    /// Apply the smoothed gain from `input` into `output`.
    ///
    /// Both slices should have the same length; if they differ only the
    /// common prefix is processed.
    pub fn process<S: Sample>(&mut self, registers: &ParameterRegisters, input: &[S], output: &mut [S]) {
        debug_assert_eq!(input.len(), output.len());
        let len = input.len().min(output.len());
        let (input, output) = (&input[..len], &mut output[..len]);
        let target = registers.effective_target();

        if self.snap(target) {
            let gain = S::from_f32(target);
            for (i, o) in input.iter().zip(output.iter_mut()) {
                *o = *i * gain;
            }
            return;
        }

        for (input, output) in input
            .chunks(SUB_BLOCK_SIZE)
            .zip(output.chunks_mut(SUB_BLOCK_SIZE))
        {
            let gain = S::from_f32(self.step(target));
            for (i, o) in input.iter().zip(output.iter_mut()) {
                *o = *i * gain;
            }
        }
    }

    /// Apply the smoothed gain to `buffer` in place.
    pub fn process_in_place<S: Sample>(&mut self, registers: &ParameterRegisters, buffer: &mut [S]) {
        let target = registers.effective_target();

        if self.snap(target) {
            let gain = S::from_f32(target);
            buffer.iter_mut().for_each(|s| *s = *s * gain);
            return;
        }

        for block in buffer.chunks_mut(SUB_BLOCK_SIZE) {
            let gain = S::from_f32(self.step(target));
            block.iter_mut().for_each(|s| *s = *s * gain);
        }
    }

    /// Snap to `target` if settled. Returns true if the fast path applies.
    #[inline]
    fn snap(&mut self, target: f32) -> bool {
        if self.is_settled(target) {
            self.current_coefficient = target;
            true
        } else {
            false
        }
    }

    /// One filter update; returns the new coefficient.
    #[inline]
    fn step(&mut self, target: f32) -> f32 {
        self.current_coefficient += self.time_constant * (target - self.current_coefficient);
        self.current_coefficient
    }
}
