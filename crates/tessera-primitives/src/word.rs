//! 32-byte big-endian ABI word

use primitive_types::U256;
use std::fmt;
use thiserror::Error;

/// Word construction error
#[derive(Debug, Error)]
pub enum WordError {
    /// Input does not fit in 32 bytes
    #[error("value does not fit in a word: {0} bytes")]
    Overflow(usize),
}

/// The atomic 32-byte big-endian unit of the calldata format.
///
/// Every static value occupies one or more whole words; there is no
/// sub-word packing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word([u8; 32]);

impl Word {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// All-zero word
    pub const ZERO: Word = Word([0u8; 32]);

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }

    /// Create from an unsigned magnitude, big-endian
    pub fn from_uint(value: U256) -> Self {
        let mut bytes = [0u8; 32];
        value.to_big_endian(&mut bytes);
        Word(bytes)
    }

    /// Create from a byte slice, right-aligned (left-zero-padded).
    ///
    /// Fails if the slice is longer than 32 bytes.
    pub fn right_aligned(slice: &[u8]) -> Result<Self, WordError> {
        if slice.len() > 32 {
            return Err(WordError::Overflow(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes[32 - slice.len()..].copy_from_slice(slice);
        Ok(Word(bytes))
    }

    /// Create from a byte slice, left-aligned (right-zero-padded).
    ///
    /// Fails if the slice is longer than 32 bytes.
    pub fn left_aligned(slice: &[u8]) -> Result<Self, WordError> {
        if slice.len() > 32 {
            return Err(WordError::Overflow(slice.len()));
        }
        let mut bytes = [0u8; 32];
        bytes[..slice.len()].copy_from_slice(slice);
        Ok(Word(bytes))
    }

    /// Two's-complement negation of the whole word
    pub fn negate(&self) -> Word {
        let mut bytes = [0u8; 32];
        for i in 0..32 {
            bytes[i] = !self.0[i];
        }
        let mut carry = 1u16;
        for i in (0..32).rev() {
            let sum = (bytes[i] as u16) + carry;
            bytes[i] = sum as u8;
            carry = sum >> 8;
        }
        Word(bytes)
    }

    /// Interpret as an unsigned big-endian integer
    pub fn to_uint(&self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Word {
    fn from(bytes: [u8; 32]) -> Self {
        Word(bytes)
    }
}

impl From<U256> for Word {
    fn from(value: U256) -> Self {
        Word::from_uint(value)
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
