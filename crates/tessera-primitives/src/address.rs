//! 20-byte account address with Base58Check text form

use std::fmt;
use thiserror::Error;

/// Address parsing error
#[derive(Debug, Error)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid Base58Check string
    #[error("invalid base58check string: {0}")]
    InvalidBase58(String),
    /// Invalid length
    #[error("invalid address length: expected at least 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// 20-byte account address.
///
/// The canonical text form is Base58Check over the prefixed payload
/// `PREFIX ++ bytes`, with a double-SHA256 checksum.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Version byte prepended to the raw address before Base58Check encoding
    pub const PREFIX: u8 = 0x41;

    /// Zero address
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from slice.
    ///
    /// A slice longer than 20 bytes keeps only the trailing 20 (the
    /// leading bytes are the network prefix); shorter slices fail.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        if slice.len() < 20 {
            return Err(AddressError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&slice[slice.len() - 20..]);
        Ok(Address(bytes))
    }

    /// Parse address from a Base58Check string.
    ///
    /// Verifies the 4-byte double-SHA256 checksum and strips the
    /// version prefix.
    pub fn from_base58(s: &str) -> Result<Self, AddressError> {
        let payload = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;
        Self::from_slice(&payload)
    }

    /// Parse address from hex string (with or without 0x prefix).
    ///
    /// Accepts the raw 20-byte form or the 21-byte prefixed form.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Canonical Base58Check string with version prefix and checksum
    pub fn to_base58(&self) -> String {
        let mut payload = [0u8; 21];
        payload[0] = Self::PREFIX;
        payload[1..].copy_from_slice(&self.0);
        bs58::encode(payload).with_check().into_string()
    }

    /// Convert to prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("{:02x}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known mainnet pair: base58 text and its prefixed hex payload.
    const KNOWN_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
    const KNOWN_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

    // ==================== Base58Check ====================

    #[test]
    fn test_from_base58_known_vector() {
        let addr = Address::from_base58(KNOWN_BASE58).unwrap();
        assert_eq!(addr.to_hex(), KNOWN_HEX);
    }

    #[test]
    fn test_to_base58_known_vector() {
        let addr = Address::from_hex(KNOWN_HEX).unwrap();
        assert_eq!(addr.to_base58(), KNOWN_BASE58);
    }

    #[test]
    fn test_base58_roundtrip() {
        let addr = Address::from_bytes([0x5a; 20]);
        let text = addr.to_base58();
        let back = Address::from_base58(&text).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_from_base58_bad_checksum() {
        // Flip the last character so the checksum no longer matches
        let mut s = KNOWN_BASE58.to_string();
        s.pop();
        s.push('1');
        let result = Address::from_base58(&s);
        assert!(matches!(result, Err(AddressError::InvalidBase58(_))));
    }

    #[test]
    fn test_from_base58_invalid_chars() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet
        assert!(Address::from_base58("0OIl").is_err());
        assert!(Address::from_base58("").is_err());
    }

    // ==================== Hex parsing ====================

    #[test]
    fn test_from_hex_prefixed_payload() {
        // 21-byte payload keeps the trailing 20 bytes
        let addr = Address::from_hex(KNOWN_HEX).unwrap();
        assert_eq!(addr.as_bytes()[0], 0xa6);
        assert_eq!(addr.as_bytes()[19], 0x3c);
    }

    #[test]
    fn test_from_hex_raw_20_bytes() {
        let addr = Address::from_hex("a614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap();
        assert_eq!(addr.to_hex(), KNOWN_HEX);
    }

    #[test]
    fn test_from_hex_0x_prefix() {
        let a = Address::from_hex("0xa614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap();
        let b = Address::from_hex("a614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_hex_invalid_chars() {
        let result = Address::from_hex("zzzz");
        assert!(matches!(result, Err(AddressError::InvalidHex(_))));
    }

    #[test]
    fn test_from_hex_too_short() {
        let result = Address::from_hex("a614f803");
        assert!(matches!(result, Err(AddressError::InvalidLength(4))));
    }

    // ==================== Slice handling ====================

    #[test]
    fn test_from_slice_exact() {
        let bytes = [0xab; 20];
        let addr = Address::from_slice(&bytes).unwrap();
        assert_eq!(addr.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_slice_keeps_trailing_20() {
        let mut long = vec![0x41, 0x99];
        long.extend([0x07u8; 20]);
        let addr = Address::from_slice(&long).unwrap();
        assert_eq!(addr.as_bytes(), &[0x07u8; 20]);
    }

    #[test]
    fn test_from_slice_too_short() {
        let result = Address::from_slice(&[0u8; 19]);
        assert!(matches!(result, Err(AddressError::InvalidLength(19))));
    }

    #[test]
    fn test_from_slice_empty() {
        let result = Address::from_slice(&[]);
        assert!(matches!(result, Err(AddressError::InvalidLength(0))));
    }

    // ==================== Misc ====================

    #[test]
    fn test_zero_address() {
        let zero = Address::ZERO;
        assert!(zero.is_zero());
        assert_eq!(zero.to_hex(), format!("41{}", "00".repeat(20)));
    }

    #[test]
    fn test_address_display_is_base58() {
        let addr = Address::from_hex(KNOWN_HEX).unwrap();
        assert_eq!(format!("{}", addr), KNOWN_BASE58);
        assert!(format!("{:?}", addr).contains(KNOWN_BASE58));
    }

    #[test]
    fn test_address_equality_and_hash() {
        use std::collections::HashSet;

        let a = Address::from_hex(KNOWN_HEX).unwrap();
        let b = Address::from_base58(KNOWN_BASE58).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_address_len_constant() {
        assert_eq!(Address::LEN, 20);
    }
}
