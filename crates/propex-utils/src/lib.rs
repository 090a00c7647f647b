//! Internal utilities for the propex plugin crates.
//!
//! Everything here is `const fn` where possible and has no external
//! dependencies. Plugin authors should go through the `propex` facade crate.
//!
//! # Contents
//!
//! - [`fnv1a_32`] - FNV-1a hash function
//! - [`uri_hash`] - URI to non-zero URID hashing

pub mod hash;

pub use hash::{fnv1a_32, uri_hash};
