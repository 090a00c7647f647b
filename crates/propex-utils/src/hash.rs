//! Hash functions for stable URI identifiers.
//!
//! Hosts normally hand out URIDs from their own interning table. Standalone
//! hosts and tests have no such table, so this module derives a stable 32-bit
//! identifier straight from the URI text instead.

/// Compute the FNV-1a 32-bit hash of a string.
///
/// Deterministic across platforms and compiler versions, and usable in
/// `const` context so vocabulary URIDs can be computed at compile time.
///
/// # Examples
///
/// ```
/// use propex_utils::fnv1a_32;
///
/// const SET: u32 = fnv1a_32("http://lv2plug.in/ns/ext/patch#Set");
/// assert_eq!(SET, fnv1a_32("http://lv2plug.in/ns/ext/patch#Set"));
/// ```
#[inline]
pub const fn fnv1a_32(s: &str) -> u32 {
    const FNV_OFFSET: u32 = 2166136261;
    const FNV_PRIME: u32 = 16777619;

    let bytes = s.as_bytes();
    let mut hash = FNV_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Hash a URI into a URID.
///
/// URID `0` is reserved as "unmapped", so a hash that lands on zero is
/// folded onto `1`.
#[inline]
pub const fn uri_hash(uri: &str) -> u32 {
    match fnv1a_32(uri) {
        0 => 1,
        hash => hash,
    }
}
