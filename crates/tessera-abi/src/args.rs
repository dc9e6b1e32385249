//! JSON argument literals to typed values

use serde_json::Value;
use tessera_primitives::{Address, U256};

use crate::types::I256;
use crate::{AbiError, ParamType, Token};

/// Parse a JSON array literal into typed values, positionally matched
/// against the declared parameter types.
pub fn parse_args(types: &[ParamType], json: &str) -> Result<Vec<Token>, AbiError> {
    let value: Value = serde_json::from_str(json)?;
    let items = value
        .as_array()
        .ok_or_else(|| AbiError::Parse("argument literal must be a JSON array".to_string()))?;

    if items.len() != types.len() {
        return Err(AbiError::Parse(format!(
            "signature declares {} parameters, got {} arguments",
            types.len(),
            items.len()
        )));
    }

    types
        .iter()
        .zip(items.iter())
        .map(|(ty, item)| coerce(ty, item))
        .collect()
}

/// Coerce one JSON value into the token its declared type expects
pub fn coerce(param_type: &ParamType, value: &Value) -> Result<Token, AbiError> {
    match param_type {
        ParamType::Address => {
            let text = expect_str(value, "address")?;
            let addr = Address::from_base58(text)
                .or_else(|_| Address::from_hex(text))
                .map_err(|e| AbiError::Encode(format!("invalid address {:?}: {}", text, e)))?;
            Ok(Token::Address(addr))
        }
        ParamType::Uint(_) | ParamType::TokenId => Ok(Token::Uint(coerce_uint(value)?)),
        ParamType::Int(_) => Ok(Token::Int(coerce_int(value)?)),
        ParamType::Bool => Ok(Token::Bool(coerce_bool(value)?)),
        ParamType::FixedBytes(_) => {
            let text = expect_str(value, "fixed bytes")?;
            Ok(Token::FixedBytes(decode_hex(text)?))
        }
        ParamType::Bytes => {
            let text = expect_str(value, "bytes")?;
            Ok(Token::Bytes(decode_hex(text)?))
        }
        ParamType::String => Ok(Token::String(expect_str(value, "string")?.to_string())),
        ParamType::Array(inner, length) => {
            let items = value.as_array().ok_or_else(|| {
                AbiError::Encode(format!("expected a JSON array for {:?}", param_type))
            })?;
            if let Some(expected) = length {
                if items.len() != *expected {
                    return Err(AbiError::Encode(format!(
                        "fixed array expects {} elements, got {}",
                        expected,
                        items.len()
                    )));
                }
            }
            let tokens = items
                .iter()
                .map(|item| coerce(inner, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Token::Array(tokens))
        }
    }
}

fn expect_str<'a>(value: &'a Value, what: &str) -> Result<&'a str, AbiError> {
    value
        .as_str()
        .ok_or_else(|| AbiError::Encode(format!("expected a string literal for {}", what)))
}

/// Unsigned integers accept JSON numbers and decimal strings
fn coerce_uint(value: &Value) -> Result<U256, AbiError> {
    match value {
        Value::Number(n) => {
            let v = n
                .as_u64()
                .ok_or_else(|| AbiError::Encode(format!("invalid unsigned value: {}", n)))?;
            Ok(U256::from(v))
        }
        Value::String(s) => U256::from_dec_str(s.trim())
            .map_err(|e| AbiError::Encode(format!("invalid unsigned value {:?}: {:?}", s, e))),
        other => Err(AbiError::Encode(format!(
            "expected an integer literal, got {}",
            other
        ))),
    }
}

/// Signed integers additionally accept a leading minus sign
fn coerce_int(value: &Value) -> Result<I256, AbiError> {
    match value {
        Value::Number(n) => {
            let v = n
                .as_i64()
                .ok_or_else(|| AbiError::Encode(format!("invalid signed value: {}", n)))?;
            Ok(I256::from_i128(v as i128))
        }
        Value::String(s) => {
            let s = s.trim();
            let (magnitude, negative) = match s.strip_prefix('-') {
                Some(rest) => (rest, true),
                None => (s, false),
            };
            let abs = U256::from_dec_str(magnitude)
                .map_err(|e| AbiError::Encode(format!("invalid signed value {:?}: {:?}", s, e)))?;
            Ok(I256::new(abs, negative && !abs.is_zero()))
        }
        other => Err(AbiError::Encode(format!(
            "expected an integer literal, got {}",
            other
        ))),
    }
}

/// Textual `"true"` and `"1"` are true, every other text is false
fn coerce_bool(value: &Value) -> Result<bool, AbiError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => Ok(matches!(s.trim(), "true" | "1")),
        Value::Number(n) => Ok(n.as_u64() == Some(1)),
        other => Err(AbiError::Encode(format!(
            "expected a boolean literal, got {}",
            other
        ))),
    }
}

/// Hex with optional `0x` prefix; an odd-length string gets one zero
/// nibble prepended
fn decode_hex(text: &str) -> Result<Vec<u8>, AbiError> {
    let stripped = text.strip_prefix("0x").unwrap_or(text);
    let padded;
    let hex_str = if stripped.len() % 2 == 1 {
        padded = format!("0{}", stripped);
        &padded
    } else {
        stripped
    };
    hex::decode(hex_str).map_err(|e| AbiError::Encode(format!("invalid hex {:?}: {}", text, e)))
}
