//! # tessera-abi
//!
//! ABI codec for Tessera contract calls.
//!
//! Turns a method signature string plus a JSON argument literal into
//! the canonical 32-byte-word calldata format, and reconstructs typed
//! values from raw calldata given only the signature:
//! - signature parsing and type classification
//! - head/tail packing with offset pointers for dynamic values
//! - bounds-checked unpacking
//! - 4-byte Keccak-256 method selectors
//!
//! # Example
//!
//! ```rust
//! use tessera_abi::{encode_call, decode_call, Token};
//!
//! let sig = "transfer(address,uint256)";
//! let data = encode_call(sig, r#"["TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", 1000]"#).unwrap();
//! assert_eq!(data.len(), 68); // selector + two words
//!
//! let values = decode_call(sig, &data).unwrap();
//! assert_eq!(values.len(), 2);
//! assert!(matches!(values[0], Token::Address(_)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod args;
mod call;
mod decode;
mod encode;
mod error;
mod signature;
mod types;

pub use args::{coerce, parse_args};
pub use call::{
    decode_call, decode_output, encode_call, encode_call_hex, encode_call_tokens, SELECTOR_LEN,
};
pub use decode::decode_params;
pub use encode::encode_params;
pub use error::AbiError;
pub use signature::{function_selector, parse_signature, split_signature};
pub use types::{ParamType, Token, I256, MAX_ARRAY_NESTING};
