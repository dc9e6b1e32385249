//! # tessera-primitives
//!
//! Primitive types for the Tessera contract toolkit.
//!
//! This crate provides the fundamental data types shared by the
//! higher layers: the 32-byte ABI [`Word`], the 20-byte account
//! [`Address`] with its Base58Check text form, and the `U256`
//! arbitrary-magnitude integer re-exported from `primitive-types`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod error;
mod word;

pub use address::{Address, AddressError};
pub use error::PrimitiveError;
pub use word::{Word, WordError};

// Re-export primitive-types for U256
pub use primitive_types::U256;
