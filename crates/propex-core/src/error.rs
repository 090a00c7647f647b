//! Error types for the propex crates.
//!
//! [`DecodeError`] covers every way a control message can be rejected. All of
//! them are recovered locally: the decoder logs the error and moves on to the
//! next event. [`InstantiateError`] is the only fatal condition.

use thiserror::Error;

use crate::atom::AtomKind;
use crate::registers::Parameter;
use crate::types::Urid;

/// Why a `patch:Set` message could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("set message has no property")]
    MissingProperty,
    #[error("set message has non-URID property")]
    NonUridProperty,
    #[error("set message has no value")]
    MissingValue,
}

/// A rejected control message.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DecodeError {
    /// A required sub-field is missing or has the wrong shape.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] Malformed),

    /// The value is present but has the wrong type for the parameter.
    #[error("invalid property type for '{parameter}', expected '{expected}', got '{found}'")]
    InvalidValueType {
        parameter: Parameter,
        expected: AtomKind,
        found: AtomKind,
    },

    /// The property URID names no known parameter.
    #[error("set message for unknown property (URID {0})")]
    UnknownProperty(Urid),

    /// The gain has the right type but no finite, positive coefficient.
    #[error("gain {0} dB is out of range")]
    GainOutOfRange(f32),
}

/// Fieldless discriminant of [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    MalformedMessage,
    InvalidValueType,
    UnknownProperty,
    GainOutOfRange,
}

impl DecodeError {
    /// Which kind of error this is.
    pub const fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::MalformedMessage(_) => DecodeErrorKind::MalformedMessage,
            Self::InvalidValueType { .. } => DecodeErrorKind::InvalidValueType,
            Self::UnknownProperty(_) => DecodeErrorKind::UnknownProperty,
            Self::GainOutOfRange(_) => DecodeErrorKind::GainOutOfRange,
        }
    }
}

/// Instantiation failures. The plugin cannot run without these resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstantiateError {
    /// The host offered no URID map, so parameter URIs cannot be resolved.
    #[error("host does not support urid:map")]
    MissingUridMap,
}

/// Result type for instantiation.
pub type InstantiateResult<T> = Result<T, InstantiateError>;
