//! Offset-resolving calldata decoding

use tessera_primitives::{Address, Word, U256};

use crate::types::I256;
use crate::{AbiError, ParamType, Token};

/// Decode one parameter block against an ordered type list.
///
/// Mirrors the encoder's head/tail layout: static entries are read
/// inline, dynamic entries through a pointer word holding an absolute
/// offset into the same block. Every offset and length word is
/// bounds-checked before any slice is taken.
pub fn decode_params(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let mut offset = 0;
    let mut tokens = Vec::with_capacity(types.len());

    for param_type in types {
        let (token, consumed) = decode_token(param_type, data, offset)?;
        tokens.push(token);
        offset += consumed;
    }

    Ok(tokens)
}

/// Decode a single value; returns the token and the head bytes consumed
fn decode_token(
    param_type: &ParamType,
    data: &[u8],
    offset: usize,
) -> Result<(Token, usize), AbiError> {
    match param_type {
        ParamType::Address => {
            let word = read_word(data, offset)?;
            let addr = Address::from_slice(&word[12..32])
                .map_err(|e| AbiError::Decode(e.to_string()))?;
            Ok((Token::Address(addr), Word::LEN))
        }
        ParamType::Uint(_) | ParamType::TokenId => {
            let word = read_word(data, offset)?;
            Ok((Token::Uint(U256::from_big_endian(word)), Word::LEN))
        }
        ParamType::Int(_) => {
            let word = read_word(data, offset)?;
            // sign bit set: recover the magnitude by two's complement
            let negative = word[0] & 0x80 != 0;
            let abs = if negative {
                let mut bytes = [0u8; 32];
                bytes.copy_from_slice(word);
                Word::from_bytes(bytes).negate().to_uint()
            } else {
                U256::from_big_endian(word)
            };
            Ok((Token::Int(I256::new(abs, negative)), Word::LEN))
        }
        ParamType::Bool => {
            let word = read_word(data, offset)?;
            let value = word.iter().any(|&b| b != 0);
            Ok((Token::Bool(value), Word::LEN))
        }
        ParamType::FixedBytes(_) => {
            // the whole word is returned, not truncated to N bytes
            let word = read_word(data, offset)?;
            Ok((Token::FixedBytes(word.to_vec()), Word::LEN))
        }
        ParamType::Bytes => {
            let pointer = read_offset(data, offset)?;
            let bytes = decode_bytes(data, pointer)?;
            Ok((Token::Bytes(bytes), Word::LEN))
        }
        ParamType::String => {
            let pointer = read_offset(data, offset)?;
            let bytes = decode_bytes(data, pointer)?;
            let s = String::from_utf8(bytes)
                .map_err(|e| AbiError::Decode(format!("invalid UTF-8: {}", e)))?;
            Ok((Token::String(s), Word::LEN))
        }
        ParamType::Array(inner, None) => {
            let pointer = read_offset(data, offset)?;
            let count = read_offset(data, pointer)?;
            if count > data.len() / Word::LEN {
                return Err(AbiError::Truncated {
                    needed: count.saturating_mul(Word::LEN),
                    have: data.len(),
                });
            }
            let start = pointer
                .checked_add(Word::LEN)
                .ok_or_else(|| overflow(data.len()))?;
            let items = decode_elements(inner, data, start, count)?;
            Ok((Token::Array(items), Word::LEN))
        }
        ParamType::Array(inner, Some(count)) => {
            if param_type.is_dynamic() {
                // fixed count, dynamic elements: pointed-to block, no
                // count word
                let pointer = read_offset(data, offset)?;
                let items = decode_elements(inner, data, pointer, *count)?;
                Ok((Token::Array(items), Word::LEN))
            } else {
                // fully static: elements sit inline in the head
                let mut consumed = 0;
                let mut items = Vec::with_capacity(capped(*count, data));
                for _ in 0..*count {
                    let (token, used) = decode_token(inner, data, offset + consumed)?;
                    items.push(token);
                    consumed += used;
                }
                Ok((Token::Array(items), consumed))
            }
        }
    }
}

/// Decode `count` elements of one block starting at `start`
fn decode_elements(
    inner: &ParamType,
    data: &[u8],
    start: usize,
    count: usize,
) -> Result<Vec<Token>, AbiError> {
    // element pointers are relative to the block the elements form
    let block = data.get(start..).ok_or_else(|| AbiError::Truncated {
        needed: start,
        have: data.len(),
    })?;

    let mut offset = 0;
    let mut items = Vec::with_capacity(capped(count, block));
    for _ in 0..count {
        let (token, consumed) = decode_token(inner, block, offset)?;
        items.push(token);
        offset += consumed;
    }
    Ok(items)
}

/// Length word followed by that many raw bytes
fn decode_bytes(data: &[u8], offset: usize) -> Result<Vec<u8>, AbiError> {
    let len = read_offset(data, offset)?;
    let start = offset
        .checked_add(Word::LEN)
        .ok_or_else(|| overflow(data.len()))?;
    let end = start.checked_add(len).ok_or_else(|| overflow(data.len()))?;
    if data.len() < end {
        return Err(AbiError::Truncated {
            needed: end,
            have: data.len(),
        });
    }
    Ok(data[start..end].to_vec())
}

/// Read one 32-byte word, bounds-checked
fn read_word(data: &[u8], offset: usize) -> Result<&[u8], AbiError> {
    let end = offset
        .checked_add(Word::LEN)
        .ok_or_else(|| overflow(data.len()))?;
    if data.len() < end {
        return Err(AbiError::Truncated {
            needed: end,
            have: data.len(),
        });
    }
    Ok(&data[offset..end])
}

/// Read a word holding an offset or length; anything past the buffer
/// length cannot be valid, so it is rejected before conversion
fn read_offset(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let word = read_word(data, offset)?;
    let value = U256::from_big_endian(word);
    if value > U256::from(data.len() as u64) {
        let needed = if value > U256::from(u64::MAX) {
            usize::MAX
        } else {
            value.as_u64() as usize
        };
        return Err(AbiError::Truncated {
            needed,
            have: data.len(),
        });
    }
    Ok(value.as_usize())
}

fn overflow(have: usize) -> AbiError {
    AbiError::Truncated {
        needed: usize::MAX,
        have,
    }
}

/// Allocation cap: a block of `len` bytes cannot hold more than
/// `len / 32` decoded elements
fn capped(count: usize, data: &[u8]) -> usize {
    count.min(data.len() / Word::LEN + 1)
}
