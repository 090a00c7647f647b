//! Common types used throughout the propex crates.

/// Integer identifier for a URI, as handed out by the host's URID map.
///
/// `0` is reserved and never names a URI.
pub type Urid = u32;

/// Sample offset of an event within the current cycle.
pub type FrameOffset = u32;
