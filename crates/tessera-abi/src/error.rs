//! ABI error types

use tessera_primitives::{AddressError, PrimitiveError, WordError};
use thiserror::Error;

/// ABI codec error type
#[derive(Debug, Error)]
pub enum AbiError {
    /// Signature grammar or JSON argument literal malformed
    #[error("parse error: {0}")]
    Parse(String),

    /// Type token matches no classifier rule
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// Value does not fit its declared type
    #[error("encoding error: {0}")]
    Encode(String),

    /// Generic decode failure (bad UTF-8, value/type mismatch)
    #[error("decoding error: {0}")]
    Decode(String),

    /// Leading 4 bytes of calldata do not match the signature's selector
    #[error("selector mismatch: expected {expected}, got {got}")]
    SelectorMismatch {
        /// Selector computed from the signature, lowercase hex
        expected: String,
        /// Selector found in the calldata, lowercase hex
        got: String,
    },

    /// An offset or length word references bytes beyond the buffer end
    #[error("truncated calldata: need {needed} bytes, have {have}")]
    Truncated {
        /// Bytes the offset/length word claims
        needed: usize,
        /// Bytes actually present
        have: usize,
    },
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::Parse(e.to_string())
    }
}

impl From<WordError> for AbiError {
    fn from(e: WordError) -> Self {
        AbiError::Encode(e.to_string())
    }
}

impl From<AddressError> for AbiError {
    fn from(e: AddressError) -> Self {
        AbiError::Encode(e.to_string())
    }
}

impl From<PrimitiveError> for AbiError {
    fn from(e: PrimitiveError) -> Self {
        match e {
            PrimitiveError::Address(e) => e.into(),
            PrimitiveError::Word(e) => e.into(),
        }
    }
}
