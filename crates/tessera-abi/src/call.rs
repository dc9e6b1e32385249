//! Call codec: selector plus packed arguments

use crate::{
    decode_params, encode_params, function_selector, parse_args, parse_signature, AbiError, Token,
};

/// Selector length in bytes
pub const SELECTOR_LEN: usize = 4;

/// Encode a full contract call from a signature and a JSON argument
/// literal: 4-byte selector followed by the packed parameter block.
pub fn encode_call(signature: &str, json_args: &str) -> Result<Vec<u8>, AbiError> {
    let types = parse_signature(signature)?;
    let tokens = parse_args(&types, json_args)?;
    let mut result = function_selector(signature).to_vec();
    result.extend(encode_params(&types, &tokens)?);
    Ok(result)
}

/// [`encode_call`] rendered as lowercase hex for transport
pub fn encode_call_hex(signature: &str, json_args: &str) -> Result<String, AbiError> {
    Ok(hex::encode(encode_call(signature, json_args)?))
}

/// Encode a full contract call from already-typed values
pub fn encode_call_tokens(signature: &str, tokens: &[Token]) -> Result<Vec<u8>, AbiError> {
    let types = parse_signature(signature)?;
    let mut result = function_selector(signature).to_vec();
    result.extend(encode_params(&types, tokens)?);
    Ok(result)
}

/// Decode calldata against a signature.
///
/// The leading 4 bytes must equal the signature's selector; the check
/// happens before any argument is unpacked.
pub fn decode_call(signature: &str, data: &[u8]) -> Result<Vec<Token>, AbiError> {
    if data.len() < SELECTOR_LEN {
        return Err(AbiError::Truncated {
            needed: SELECTOR_LEN,
            have: data.len(),
        });
    }
    let expected = function_selector(signature);
    if data[..SELECTOR_LEN] != expected {
        return Err(AbiError::SelectorMismatch {
            expected: hex::encode(expected),
            got: hex::encode(&data[..SELECTOR_LEN]),
        });
    }
    let types = parse_signature(signature)?;
    decode_params(&types, &data[SELECTOR_LEN..])
}

/// Decode call return data, which carries no selector prefix
pub fn decode_output(signature: &str, data: &[u8]) -> Result<Vec<Token>, AbiError> {
    let types = parse_signature(signature)?;
    decode_params(&types, data)
}
