//! ABI type and value definitions

use tessera_primitives::{Address, U256};

use crate::AbiError;

/// Array nesting deeper than this is rejected by the classifier, which
/// bounds every recursive walk over a parsed type.
pub const MAX_ARRAY_NESTING: usize = 32;

/// ABI parameter types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// 20-byte account address
    Address,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Signed integer with bit size
    Int(usize),
    /// Native token identifier, laid out like `uint256`
    TokenId,
    /// Boolean
    Bool,
    /// Dynamic bytes
    Bytes,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// UTF-8 string
    String,
    /// Array: element type plus optional fixed length.
    /// `None` length means variable-length.
    Array(Box<ParamType>, Option<usize>),
}

impl ParamType {
    /// Check if this type is dynamic (variable length).
    ///
    /// A fixed-length array is dynamic iff its element type is; the
    /// same predicate drives both the encode and the decode layout.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String => true,
            ParamType::Array(_, None) => true,
            ParamType::Array(inner, Some(_)) => inner.is_dynamic(),
            _ => false,
        }
    }

    /// Classify a single type token from a signature string.
    ///
    /// Tried in order: exact keywords, `bytesN`, `uintN`/`intN`
    /// (width defaults to 256 when absent), then a trailing `[...]`
    /// suffix peeled off to build an array over the recursively
    /// classified prefix. Anything else is [`AbiError::UnknownType`].
    pub fn parse(token: &str) -> Result<ParamType, AbiError> {
        Self::parse_nested(token, 0)
    }

    fn parse_nested(token: &str, nesting: usize) -> Result<ParamType, AbiError> {
        if nesting > MAX_ARRAY_NESTING {
            return Err(AbiError::UnknownType(token.to_string()));
        }

        match token {
            "address" => return Ok(ParamType::Address),
            "string" => return Ok(ParamType::String),
            "bool" => return Ok(ParamType::Bool),
            "bytes" => return Ok(ParamType::Bytes),
            "token" => return Ok(ParamType::TokenId),
            _ => {}
        }

        // T[] / T[N]
        if let Some(stripped) = token.strip_suffix(']') {
            let open = stripped
                .rfind('[')
                .ok_or_else(|| AbiError::UnknownType(token.to_string()))?;
            let inner = Self::parse_nested(&stripped[..open], nesting + 1)?;
            let len_str = &stripped[open + 1..];
            let len = if len_str.is_empty() {
                None
            } else {
                let n: usize = len_str
                    .parse()
                    .map_err(|_| AbiError::UnknownType(token.to_string()))?;
                Some(n)
            };
            return Ok(ParamType::Array(Box::new(inner), len));
        }

        // bytesN
        if let Some(rest) = token.strip_prefix("bytes") {
            if let Ok(n) = rest.parse::<usize>() {
                if (1..=32).contains(&n) {
                    return Ok(ParamType::FixedBytes(n));
                }
            }
            return Err(AbiError::UnknownType(token.to_string()));
        }

        // uintN
        if let Some(rest) = token.strip_prefix("uint") {
            let bits = parse_bit_width(rest).ok_or_else(|| AbiError::UnknownType(token.to_string()))?;
            return Ok(ParamType::Uint(bits));
        }

        // intN
        if let Some(rest) = token.strip_prefix("int") {
            let bits = parse_bit_width(rest).ok_or_else(|| AbiError::UnknownType(token.to_string()))?;
            return Ok(ParamType::Int(bits));
        }

        Err(AbiError::UnknownType(token.to_string()))
    }
}

/// Width defaults to 256 when absent; otherwise 1..=256.
fn parse_bit_width(s: &str) -> Option<usize> {
    if s.is_empty() {
        return Some(256);
    }
    match s.parse::<usize>() {
        Ok(n) if (1..=256).contains(&n) => Some(n),
        _ => None,
    }
}

/// Typed argument values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Address (20 bytes)
    Address(Address),
    /// Unsigned integer
    Uint(U256),
    /// Signed integer
    Int(I256),
    /// Boolean
    Bool(bool),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Fixed-size bytes
    FixedBytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Array elements, fixed- or variable-length per the paired type
    Array(Vec<Token>),
}

/// Signed 256-bit integer, sign-and-magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    /// Absolute value
    pub abs: U256,
    /// Sign (true if negative)
    pub negative: bool,
}

impl I256 {
    /// Create a new I256
    pub fn new(abs: U256, negative: bool) -> Self {
        Self { abs, negative }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        if value < 0 {
            Self {
                abs: U256::from(value.unsigned_abs()),
                negative: true,
            }
        } else {
            Self {
                abs: U256::from(value as u128),
                negative: false,
            }
        }
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Classifier ====================

    #[test]
    fn test_parse_exact_keywords() {
        assert_eq!(ParamType::parse("address").unwrap(), ParamType::Address);
        assert_eq!(ParamType::parse("string").unwrap(), ParamType::String);
        assert_eq!(ParamType::parse("bool").unwrap(), ParamType::Bool);
        assert_eq!(ParamType::parse("bytes").unwrap(), ParamType::Bytes);
        assert_eq!(ParamType::parse("token").unwrap(), ParamType::TokenId);
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(ParamType::parse("uint256").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint").unwrap(), ParamType::Uint(256));
        assert_eq!(ParamType::parse("uint8").unwrap(), ParamType::Uint(8));
        assert_eq!(ParamType::parse("int256").unwrap(), ParamType::Int(256));
        assert_eq!(ParamType::parse("int").unwrap(), ParamType::Int(256));
        assert_eq!(ParamType::parse("int64").unwrap(), ParamType::Int(64));
    }

    #[test]
    fn test_parse_fixed_bytes() {
        assert_eq!(ParamType::parse("bytes1").unwrap(), ParamType::FixedBytes(1));
        assert_eq!(ParamType::parse("bytes32").unwrap(), ParamType::FixedBytes(32));
        assert!(ParamType::parse("bytes0").is_err());
        assert!(ParamType::parse("bytes33").is_err());
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(
            ParamType::parse("uint256[]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)), None)
        );
        assert_eq!(
            ParamType::parse("uint256[3]").unwrap(),
            ParamType::Array(Box::new(ParamType::Uint(256)), Some(3))
        );
        assert_eq!(
            ParamType::parse("string[2]").unwrap(),
            ParamType::Array(Box::new(ParamType::String), Some(2))
        );
    }

    #[test]
    fn test_parse_nested_arrays() {
        // T[2][3] is a 3-element array of 2-element arrays of T
        assert_eq!(
            ParamType::parse("uint256[2][3]").unwrap(),
            ParamType::Array(
                Box::new(ParamType::Array(Box::new(ParamType::Uint(256)), Some(2))),
                Some(3)
            )
        );
        assert_eq!(
            ParamType::parse("address[][]").unwrap(),
            ParamType::Array(
                Box::new(ParamType::Array(Box::new(ParamType::Address), None)),
                None
            )
        );
    }

    #[test]
    fn test_parse_unknown_tokens() {
        for bad in ["", "uint257", "int0", "tuple", "foo[]", "uint256[x]", "bytes[2"] {
            assert!(
                matches!(ParamType::parse(bad), Err(AbiError::UnknownType(_))),
                "token {:?} should not classify",
                bad
            );
        }
    }

    #[test]
    fn test_parse_nesting_limit() {
        let mut token = "uint256".to_string();
        for _ in 0..MAX_ARRAY_NESTING {
            token.push_str("[1]");
        }
        assert!(ParamType::parse(&token).is_ok());

        token.push_str("[1]");
        assert!(matches!(
            ParamType::parse(&token),
            Err(AbiError::UnknownType(_))
        ));
    }

    // ==================== Dynamism ====================

    #[test]
    fn test_is_dynamic_scalars() {
        assert!(!ParamType::Address.is_dynamic());
        assert!(!ParamType::Uint(256).is_dynamic());
        assert!(!ParamType::Int(128).is_dynamic());
        assert!(!ParamType::TokenId.is_dynamic());
        assert!(!ParamType::Bool.is_dynamic());
        assert!(!ParamType::FixedBytes(32).is_dynamic());

        assert!(ParamType::Bytes.is_dynamic());
        assert!(ParamType::String.is_dynamic());
    }

    #[test]
    fn test_is_dynamic_arrays() {
        // variable-length arrays are always dynamic
        assert!(ParamType::parse("uint256[]").unwrap().is_dynamic());
        // fixed-length arrays follow their element type
        assert!(!ParamType::parse("uint256[3]").unwrap().is_dynamic());
        assert!(ParamType::parse("string[3]").unwrap().is_dynamic());
        assert!(!ParamType::parse("bool[2][2]").unwrap().is_dynamic());
        assert!(ParamType::parse("bytes[2][2]").unwrap().is_dynamic());
    }

    // ==================== I256 ====================

    #[test]
    fn test_i256_from_i128() {
        let positive = I256::from_i128(100);
        assert!(!positive.negative);
        assert_eq!(positive.abs, U256::from(100));

        let negative = I256::from_i128(-100);
        assert!(negative.negative);
        assert_eq!(negative.abs, U256::from(100));

        let zero = I256::from_i128(0);
        assert!(zero.is_zero());

        let min = I256::from_i128(i128::MIN);
        assert!(min.negative);
        assert_eq!(min.abs, U256::from(u128::MAX / 2 + 1));
    }
}
