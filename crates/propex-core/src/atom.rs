//! Typed atoms for control messages.
//!
//! The host's event transport delivers each control message as an atom: a
//! type tag plus a body. This module models the decoded form as a sum type,
//! so reading a value means matching on a variant rather than reinterpreting
//! a body through the type tag.
//!
//! All types here borrow from host-owned storage and are `Copy`, so building
//! or walking a message never allocates.
//!
//! # Example
//!
//! ```
//! use propex_core::atom::{Atom, ControlEvent, Object, Property};
//!
//! const SET: u32 = 10;
//! const PROPERTY: u32 = 11;
//! const VALUE: u32 = 12;
//! const GAIN: u32 = 20;
//!
//! let body = [
//!     Property::new(PROPERTY, Atom::Urid(GAIN)),
//!     Property::new(VALUE, Atom::Float(-6.0)),
//! ];
//! let event = ControlEvent::new(0, Atom::Object(Object::new(SET, &body)));
//!
//! let object = event.body.as_object().unwrap();
//! assert_eq!(object.get(VALUE).and_then(Atom::as_float), Some(-6.0));
//! ```

use std::fmt;

use crate::types::{FrameOffset, Urid};

// =============================================================================
// AtomKind
// =============================================================================

/// The declared type of an atom, without its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Bool,
    Int,
    Long,
    Float,
    Double,
    Urid,
    String,
    Object,
    /// A type the decoder has no variant for.
    Other,
}

impl AtomKind {
    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Urid => "URID",
            Self::String => "string",
            Self::Object => "object",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Atom
// =============================================================================

/// A decoded atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atom<'a> {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Urid(Urid),
    String(&'a str),
    Object(Object<'a>),
    /// An atom of a type this crate does not decode. Only the type URID is kept.
    Other { type_urid: Urid },
}

impl<'a> Atom<'a> {
    /// The declared type of this atom.
    pub const fn kind(&self) -> AtomKind {
        match self {
            Self::Bool(_) => AtomKind::Bool,
            Self::Int(_) => AtomKind::Int,
            Self::Long(_) => AtomKind::Long,
            Self::Float(_) => AtomKind::Float,
            Self::Double(_) => AtomKind::Double,
            Self::Urid(_) => AtomKind::Urid,
            Self::String(_) => AtomKind::String,
            Self::Object(_) => AtomKind::Object,
            Self::Other { .. } => AtomKind::Other,
        }
    }

    /// The body as a float, if this is a Float atom.
    ///
    /// Integer and double atoms are not converted.
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Self::Float(value) => Some(value),
            _ => None,
        }
    }

    /// The body as a bool, if this is a Bool atom.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// The body as a URID, if this is a URID atom.
    #[inline]
    pub fn as_urid(&self) -> Option<Urid> {
        match *self {
            Self::Urid(value) => Some(value),
            _ => None,
        }
    }

    /// The body as an object, if this is an Object atom.
    #[inline]
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

// =============================================================================
// Object
// =============================================================================

/// A single key/value pair of an [`Object`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Property<'a> {
    pub key: Urid,
    pub value: Atom<'a>,
}

impl<'a> Property<'a> {
    /// Create a property.
    pub const fn new(key: Urid, value: Atom<'a>) -> Self {
        Self { key, value }
    }
}

/// An object atom: a type URID and an ordered list of properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object<'a> {
    /// Object type, e.g. `patch:Set`.
    pub otype: Urid,
    pub properties: &'a [Property<'a>],
}

impl<'a> Object<'a> {
    /// Create an object of the given type.
    pub const fn new(otype: Urid, properties: &'a [Property<'a>]) -> Self {
        Self { otype, properties }
    }

    /// Look up the value stored under `key`.
    ///
    /// When a key appears more than once the first occurrence is returned.
    #[inline]
    pub fn get(&self, key: Urid) -> Option<&Atom<'a>> {
        self.properties
            .iter()
            .find(|property| property.key == key)
            .map(|property| &property.value)
    }
}

// =============================================================================
// ControlEvent
// =============================================================================

/// A timestamped control message for the current cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlEvent<'a> {
    /// Sample offset within the current cycle (0 = start of cycle).
    ///
    /// Carried for completeness; the decoder applies every change from the
    /// next processed sample regardless of this value.
    pub frames: FrameOffset,
    pub body: Atom<'a>,
}

impl<'a> ControlEvent<'a> {
    /// Create an event at the given frame offset.
    pub const fn new(frames: FrameOffset, body: Atom<'a>) -> Self {
        Self { frames, body }
    }
}
