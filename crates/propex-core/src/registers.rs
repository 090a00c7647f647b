//! Target parameter registers.
//!
//! [`ParameterRegisters`] hold the most recently validated value of each
//! parameter. The event decoder is their only writer; the smoothing engine
//! only reads them.

use std::fmt;

use crate::atom::AtomKind;

/// Convert decibels to a linear amplitude coefficient: `10^(0.05 * db)`.
///
/// | dB    | Coefficient |
/// |-------|-------------|
/// | 0     | 1.0         |
/// | -6    | ~0.501      |
/// | +6    | ~1.995      |
/// | -20   | 0.1         |
#[inline]
pub fn db_to_coefficient(db: f32) -> f32 {
    10.0f32.powf(0.05 * db)
}

// =============================================================================
// Parameter
// =============================================================================

/// The parameters the plugin understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Output gain in decibels.
    Gain,
    /// Output polarity inversion.
    Polarity,
}

impl Parameter {
    /// Symbolic name, also the suffix of the parameter URI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Polarity => "polarity",
        }
    }

    /// Atom type the parameter's value must carry.
    pub const fn value_kind(self) -> AtomKind {
        match self {
            Self::Gain => AtomKind::Float,
            Self::Polarity => AtomKind::Bool,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated parameter update, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    /// New gain in decibels.
    Gain(f32),
    /// New polarity; `true` inverts the output.
    Polarity(bool),
}

// =============================================================================
// ParameterRegisters
// =============================================================================

/// Most recently validated parameter targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRegisters {
    /// Linear gain the output should reach. Always positive.
    pub target_gain_coefficient: f32,
    /// Whether the output sign is flipped.
    pub polarity_inverted: bool,
}

impl ParameterRegisters {
    /// Unity gain, normal polarity.
    pub const fn new() -> Self {
        Self {
            target_gain_coefficient: 1.0,
            polarity_inverted: false,
        }
    }

    /// Store a validated change. Later calls overwrite earlier ones.
    #[inline]
    pub fn apply(&mut self, change: ParameterChange) {
        match change {
            ParameterChange::Gain(db) => self.target_gain_coefficient = db_to_coefficient(db),
            ParameterChange::Polarity(inverted) => self.polarity_inverted = inverted,
        }
    }

    /// The signed coefficient the smoother should converge to.
    #[inline]
    pub fn effective_target(&self) -> f32 {
        if self.polarity_inverted {
            -self.target_gain_coefficient
        } else {
            self.target_gain_coefficient
        }
    }
}

impl Default for ParameterRegisters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_db_to_coefficient() {
        assert_relative_eq!(db_to_coefficient(0.0), 1.0);
        assert_relative_eq!(db_to_coefficient(-20.0), 0.1, max_relative = 1e-6);
        assert_relative_eq!(db_to_coefficient(20.0), 10.0, max_relative = 1e-6);
        assert_relative_eq!(db_to_coefficient(-6.0), 0.501_187, max_relative = 1e-5);
    }

    #[test]
    fn test_defaults_are_unity() {
        let registers = ParameterRegisters::default();
        assert_eq!(registers.target_gain_coefficient, 1.0);
        assert!(!registers.polarity_inverted);
        assert_eq!(registers.effective_target(), 1.0);
    }

    #[test]
    fn test_apply_last_write_wins() {
        let mut registers = ParameterRegisters::new();
        registers.apply(ParameterChange::Gain(-6.0));
        registers.apply(ParameterChange::Gain(0.0));
        assert_eq!(registers.target_gain_coefficient, 1.0);

        registers.apply(ParameterChange::Polarity(true));
        registers.apply(ParameterChange::Polarity(false));
        assert!(!registers.polarity_inverted);
    }

    #[test]
    fn test_polarity_flips_effective_target() {
        let registers = ParameterRegisters {
            target_gain_coefficient: 2.0,
            polarity_inverted: true,
        };
        assert_eq!(registers.effective_target(), -2.0);
    }

    #[test]
    fn test_parameter_metadata() {
        assert_eq!(Parameter::Gain.value_kind(), AtomKind::Float);
        assert_eq!(Parameter::Polarity.to_string(), "polarity");
    }
}
