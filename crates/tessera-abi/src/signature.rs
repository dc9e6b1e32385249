//! Method signature parsing and selector derivation

use tessera_crypto::keccak256;

use crate::{AbiError, ParamType};

/// Split a `name(type1,type2,...)` signature into raw type tokens.
///
/// Takes the substring between the first `(` and the last `)`, strips
/// all whitespace, and splits on commas. An empty parameter region
/// yields an empty list. No deeper grammar validation happens here;
/// unclassifiable tokens are rejected later.
pub fn split_signature(signature: &str) -> Result<Vec<String>, AbiError> {
    let open = signature
        .find('(')
        .ok_or_else(|| AbiError::Parse(format!("missing '(' in signature: {}", signature)))?;
    let close = signature
        .rfind(')')
        .filter(|&c| c > open)
        .ok_or_else(|| AbiError::Parse(format!("missing ')' in signature: {}", signature)))?;

    let params: String = signature[open + 1..close]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if params.is_empty() {
        return Ok(Vec::new());
    }
    Ok(params.split(',').map(str::to_string).collect())
}

/// Parse a signature into its classified parameter types
pub fn parse_signature(signature: &str) -> Result<Vec<ParamType>, AbiError> {
    split_signature(signature)?
        .iter()
        .map(|token| ParamType::parse(token))
        .collect()
}

/// Compute the 4-byte method selector.
///
/// First 4 bytes of the Keccak-256 digest of the exact signature
/// string; callers pass the canonical spaceless form.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}
