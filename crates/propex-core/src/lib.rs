//! # propex-core
//!
//! Core abstractions for property-controlled audio plugins.
//!
//! A property plugin receives its parameters as `patch:Set` messages on an
//! atom control port instead of as plain control ports. This crate provides
//! everything between that control stream and the audio buffer:
//!
//! ```text
//! ControlEvent slice ──► EventDecoder ──► ParameterRegisters
//!                                               │
//!                       input samples ──► SmoothingState ──► output samples
//! ```
//!
//! ## Main Types
//!
//! - [`EventDecoder`] - Validates property messages and updates the registers
//! - [`ParameterRegisters`] - Most recently validated gain and polarity targets
//! - [`SmoothingState`] - One-pole gain smoother evaluated per 16-sample sub-block
//! - [`Plugin`] / [`AudioProcessor`] - Two-phase plugin lifecycle
//! - [`HostFeatures`] - Host capabilities (URID map, log sink) offered at instantiation
//! - [`Atom`], [`Object`], [`ControlEvent`] - Typed control messages
//! - [`Logger`] - Host log sink with `log` facade fallback
//! - [`DecodeError`], [`InstantiateError`] - Error types

pub mod atom;
pub mod config;
pub mod decoder;
pub mod error;
pub mod logger;
pub mod plugin;
pub mod registers;
pub mod sample;
pub mod smoothing;
pub mod types;
pub mod uris;

// Re-exports for convenience
pub use atom::{Atom, AtomKind, ControlEvent, Object, Property};
pub use config::{ParameterUris, PluginConfig};
pub use decoder::{DecodeReport, EventDecoder};
pub use error::{DecodeError, DecodeErrorKind, InstantiateError, InstantiateResult, Malformed};
pub use logger::{LogLevel, LogSink, Logger};
pub use plugin::{instantiate, AudioProcessor, AudioSetup, HostFeatures, Plugin};
pub use registers::{db_to_coefficient, Parameter, ParameterChange, ParameterRegisters};
pub use sample::Sample;
pub use smoothing::{SmoothingState, DEFAULT_CUTOFF_HZ, SETTLE_THRESHOLD, SUB_BLOCK_SIZE};
pub use types::{FrameOffset, Urid};
pub use uris::{vocab, HashUridMap, PropertyUris, UridMap};
