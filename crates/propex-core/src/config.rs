//! Plugin configuration.
//!
//! [`PluginConfig`] is the static metadata a plugin is built from: its URI,
//! display name, the URIs of its two parameters and the cutoff of the gain
//! smoother. It is `const`-constructible so plugins declare it as a `static`.
//!
//! # Example
//!
//! ```
//! use propex_core::config::{ParameterUris, PluginConfig};
//!
//! pub static CONFIG: PluginConfig = PluginConfig::new(
//!     "urn:example:gain#mono",
//!     ParameterUris::new("urn:example:gain#gain", "urn:example:gain#polarity"),
//! )
//! .with_name("Example Gain")
//! .with_cutoff_hz(500.0);
//!
//! assert_eq!(CONFIG.cutoff_hz, 500.0);
//! ```

use crate::smoothing::DEFAULT_CUTOFF_HZ;

/// URIs addressing the two plugin parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterUris {
    /// URI of the gain parameter (float, decibels).
    pub gain: &'static str,
    /// URI of the polarity parameter (bool).
    pub polarity: &'static str,
}

impl ParameterUris {
    /// Create the parameter URI pair.
    pub const fn new(gain: &'static str, polarity: &'static str) -> Self {
        Self { gain, polarity }
    }
}

/// Static plugin metadata.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Plugin URI, as listed in the host's plugin descriptor.
    pub uri: &'static str,

    /// Name shown by hosts and used as the log message prefix.
    pub name: &'static str,

    /// Parameter URIs.
    pub parameters: ParameterUris,

    /// Cutoff of the one-pole gain smoother, in Hz.
    pub cutoff_hz: f32,
}

impl PluginConfig {
    /// Create a configuration with default name and cutoff.
    pub const fn new(uri: &'static str, parameters: ParameterUris) -> Self {
        Self {
            uri,
            name: "Unnamed Plugin",
            parameters,
            cutoff_hz: DEFAULT_CUTOFF_HZ,
        }
    }

    /// Set the display name.
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Set the smoother cutoff.
    pub const fn with_cutoff_hz(mut self, cutoff_hz: f32) -> Self {
        self.cutoff_hz = cutoff_hz;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PluginConfig::new("urn:a", ParameterUris::new("urn:a#gain", "urn:a#polarity"));
        assert_eq!(config.cutoff_hz, 990.0);
        assert_eq!(config.name, "Unnamed Plugin");
        assert_eq!(config.parameters.polarity, "urn:a#polarity");
    }
}
