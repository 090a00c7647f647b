//! # propex
//!
//! Click-free property plugins for Rust.
//!
//! Plugins built on propex take their parameters as `patch:Set` property
//! messages and apply them through a smoothed gain coefficient, so parameter
//! changes never produce discontinuities in the output.
//!
//! ## Architecture
//!
//! ```text
//! Host wrapper (event transport, URID map, log sink)
//!        ↓
//! Your Plugin (implements Plugin) ──prepare──► Your AudioProcessor
//!        ↓                                           ↓
//! EventDecoder ──► ParameterRegisters ──► SmoothingState
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use propex::prelude::*;
//!
//! static CONFIG: PluginConfig = PluginConfig::new(
//!     "urn:example#mono",
//!     ParameterUris::new("urn:example#gain", "urn:example#polarity"),
//! );
//!
//! let processor = instantiate::<MyPlugin>(
//!     &CONFIG,
//!     48000.0,
//!     HostFeatures::new().with_urid_map(&HashUridMap),
//! )?;
//! ```

// Re-export sub-crates
pub use propex_core as core;

/// Prelude module for convenient imports.
///
/// Import everything you need to build a plugin:
/// ```rust,ignore
/// use propex::prelude::*;
/// ```
pub mod prelude {
    pub use propex_core::{
        // Lifecycle
        instantiate, AudioProcessor, AudioSetup, HostFeatures, Plugin,
        // Configuration
        ParameterUris, PluginConfig,
        // Control messages
        Atom, AtomKind, ControlEvent, Object, Property, Urid,
        // Decoding and smoothing
        DecodeReport, EventDecoder, ParameterChange, ParameterRegisters, SmoothingState,
        // URID mapping
        HashUridMap, PropertyUris, UridMap,
        // Logging
        LogLevel, LogSink, Logger,
        // Sample trait for generic f32/f64 processing
        Sample,
        // Error types
        DecodeError, InstantiateError, InstantiateResult,
    };
}
