//! URID mapping.
//!
//! Control messages identify everything by URID. The host owns the mapping
//! from URI text to URID and exposes it through [`UridMap`]; the plugin maps
//! its vocabulary once at instantiation into a [`PropertyUris`] table and
//! compares plain integers from then on.

use propex_utils::uri_hash;

use crate::config::ParameterUris;
use crate::registers::Parameter;
use crate::types::Urid;

/// URIs of the patch vocabulary used by property messages.
pub mod vocab {
    /// Object type of a "set property" message.
    pub const PATCH_SET: &str = "http://lv2plug.in/ns/ext/patch#Set";
    /// Key holding the URID of the property being set.
    pub const PATCH_PROPERTY: &str = "http://lv2plug.in/ns/ext/patch#property";
    /// Key holding the new value.
    pub const PATCH_VALUE: &str = "http://lv2plug.in/ns/ext/patch#value";
}

/// Host capability that maps URIs to URIDs.
///
/// Mapping the same URI twice must return the same URID, and distinct URIs
/// must map to distinct URIDs. `0` means the URI could not be mapped.
pub trait UridMap {
    fn map(&self, uri: &str) -> Urid;
}

impl<F> UridMap for F
where
    F: Fn(&str) -> Urid,
{
    fn map(&self, uri: &str) -> Urid {
        self(uri)
    }
}

/// Deterministic URID map that hashes the URI text.
///
/// Needs no shared table, which makes it suitable for standalone hosts and
/// tests. Collisions are possible in principle for arbitrary URI sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashUridMap;

impl UridMap for HashUridMap {
    fn map(&self, uri: &str) -> Urid {
        uri_hash(uri)
    }
}

/// The mapped vocabulary of one plugin instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyUris {
    pub patch_set: Urid,
    pub patch_property: Urid,
    pub patch_value: Urid,
    pub gain: Urid,
    pub polarity: Urid,
}

impl PropertyUris {
    /// Map the patch vocabulary and the plugin's parameter URIs.
    pub fn map(map: &dyn UridMap, parameters: &ParameterUris) -> Self {
        Self {
            patch_set: map.map(vocab::PATCH_SET),
            patch_property: map.map(vocab::PATCH_PROPERTY),
            patch_value: map.map(vocab::PATCH_VALUE),
            gain: map.map(parameters.gain),
            polarity: map.map(parameters.polarity),
        }
    }

    /// Resolve a property URID to a parameter.
    #[inline]
    pub fn parameter(&self, urid: Urid) -> Option<Parameter> {
        if urid == self.gain {
            Some(Parameter::Gain)
        } else if urid == self.polarity {
            Some(Parameter::Polarity)
        } else {
            None
        }
    }
}
