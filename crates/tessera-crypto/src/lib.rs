//! # tessera-crypto
//!
//! Cryptographic primitives for Tessera.
//!
//! - Keccak-256 hashing (method selectors, content addressing)

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::keccak256;
