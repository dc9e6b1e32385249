//! Head/tail calldata encoding

use tessera_primitives::{Word, U256};

use crate::{AbiError, ParamType, Token};

/// Encode an ordered argument list into one parameter block.
///
/// Static entries land in the head; dynamic entries leave a pointer
/// word in the head and append their payload to the tail. Pointers are
/// absolute byte offsets from the start of this block.
pub fn encode_params(types: &[ParamType], tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    if types.len() != tokens.len() {
        return Err(AbiError::Encode(format!(
            "expected {} values, got {}",
            types.len(),
            tokens.len()
        )));
    }

    let head_size: usize = types.iter().map(head_length).sum();

    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for (param_type, token) in types.iter().zip(tokens.iter()) {
        if param_type.is_dynamic() {
            let offset = head_size + tail.len();
            head.extend_from_slice(Word::from_uint(U256::from(offset as u64)).as_bytes());
            tail.extend(encode_token(param_type, token)?);
        } else {
            head.extend(encode_token(param_type, token)?);
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Head bytes an entry occupies: a pointer word when dynamic, the full
/// inline size otherwise.
fn head_length(param_type: &ParamType) -> usize {
    match param_type {
        ParamType::Array(inner, Some(size)) if !inner.is_dynamic() => head_length(inner) * size,
        _ => Word::LEN,
    }
}

/// Encode a single value per its declared type
fn encode_token(param_type: &ParamType, token: &Token) -> Result<Vec<u8>, AbiError> {
    match (param_type, token) {
        (ParamType::Address, Token::Address(addr)) => {
            // 20 raw bytes right-aligned in one word
            Ok(Word::right_aligned(addr.as_bytes())?.as_bytes().to_vec())
        }
        (ParamType::Uint(_) | ParamType::TokenId, Token::Uint(value)) => {
            Ok(Word::from_uint(*value).as_bytes().to_vec())
        }
        (ParamType::Int(_), Token::Int(value)) => {
            let magnitude = Word::from_uint(value.abs);
            let word = if value.negative {
                magnitude.negate()
            } else {
                magnitude
            };
            Ok(word.as_bytes().to_vec())
        }
        (ParamType::Bool, Token::Bool(b)) => {
            let value = if *b { U256::one() } else { U256::zero() };
            Ok(Word::from_uint(value).as_bytes().to_vec())
        }
        (ParamType::FixedBytes(size), Token::FixedBytes(data)) => {
            if data.len() > *size {
                return Err(AbiError::Encode(format!(
                    "bytes{} value is {} bytes long",
                    size,
                    data.len()
                )));
            }
            // left-aligned, zero-padded on the right
            Ok(Word::left_aligned(data)?.as_bytes().to_vec())
        }
        (ParamType::Bytes, Token::Bytes(data)) => Ok(encode_bytes(data)),
        (ParamType::String, Token::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (ParamType::Array(inner, length), Token::Array(items)) => {
            if let Some(expected) = length {
                if items.len() != *expected {
                    return Err(AbiError::Encode(format!(
                        "fixed array expects {} elements, got {}",
                        expected,
                        items.len()
                    )));
                }
            }
            let element_types = vec![(**inner).clone(); items.len()];
            let body = encode_params(&element_types, items)?;
            if length.is_none() {
                // variable-length arrays carry a leading count word
                let mut result =
                    Word::from_uint(U256::from(items.len() as u64)).as_bytes().to_vec();
                result.extend(body);
                Ok(result)
            } else {
                Ok(body)
            }
        }
        (param_type, token) => Err(AbiError::Encode(format!(
            "value {:?} does not match declared type {:?}",
            token, param_type
        ))),
    }
}

/// Length word followed by the payload, zero-padded to whole words
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = Word::from_uint(U256::from(data.len() as u64)).as_bytes().to_vec();
    let padded_len = data.len().div_ceil(Word::LEN) * Word::LEN;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);
    result
}
