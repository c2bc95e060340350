//! Base58 encoding of `prefix ‖ payload ‖ checksum`, as defined by the SS58 address
//! format.

use std::{error::Error, fmt};

use blake2b_simd::{Hash as Blake2bHash, Params as Blake2bParams, OUTBYTES};
use ss58_protocol::{
    constants::{checksum_len, CHECKSUM_CONTEXT},
    NetworkPrefix,
};

/// An error while attempting to parse a string as an SS58 address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string contains a character outside the base58 alphabet.
    InvalidCharacter { character: char, index: usize },
    /// The string decodes to a byte length that no SS58 address has.
    InvalidLength(usize),
    /// The first decoded byte falls in the range SS58 reserves for future prefix forms, or
    /// starts a two-byte prefix for an identifier that has a one-byte form.
    InvalidPrefix(u8),
    /// The trailing checksum does not match the address contents.
    ChecksumMismatch,
    /// The address is well-formed but belongs to a different network.
    WrongNetwork {
        expected: NetworkPrefix,
        actual: NetworkPrefix,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCharacter { character, index } => write!(
                f,
                "Invalid character {:?} at position {}",
                character, index
            ),
            ParseError::InvalidLength(len) => {
                write!(f, "Invalid address length ({} decoded bytes)", len)
            }
            ParseError::InvalidPrefix(b) => write!(f, "Reserved address prefix byte {:#04x}", b),
            ParseError::ChecksumMismatch => write!(f, "Address checksum does not match"),
            ParseError::WrongNetwork { expected, actual } => write!(
                f,
                "Address is for network prefix {}, expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for ParseError {}

/// BLAKE2b-512 over the checksum context followed by `data`.
fn checksum(data: &[u8]) -> Blake2bHash {
    Blake2bParams::new()
        .hash_length(OUTBYTES)
        .to_state()
        .update(CHECKSUM_CONTEXT)
        .update(data)
        .finalize()
}

/// Encodes `payload` as an SS58 address for the network identified by `prefix`.
///
/// # Panics
///
/// Panics if `payload` has a length for which SS58 defines no checksum (see
/// [`checksum_len`]). Callers pass fixed-size account types, so this indicates a bug
/// rather than bad input.
pub fn encode(prefix: NetworkPrefix, payload: &[u8]) -> String {
    let check_len = checksum_len(payload.len())
        .unwrap_or_else(|| panic!("SS58 does not define {}-byte payloads", payload.len()));

    let prefix_bytes = prefix.to_bytes();
    let mut data = Vec::with_capacity(prefix.encoded_len() + payload.len() + check_len);
    data.extend_from_slice(&prefix_bytes[..prefix.encoded_len()]);
    data.extend_from_slice(payload);
    let hash = checksum(&data);
    data.extend_from_slice(&hash.as_bytes()[..check_len]);

    bs58::encode(data).into_string()
}

/// Decodes an SS58 address into its network prefix and account payload.
///
/// The string is not trimmed: whitespace is reported as an invalid character like any
/// other symbol outside the base58 alphabet.
pub fn decode(s: &str) -> Result<(NetworkPrefix, Vec<u8>), ParseError> {
    let data = bs58::decode(s).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            ParseError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => ParseError::InvalidCharacter {
            character: s
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        },
        // `into_vec` sizes its own output buffer, and no checksum mode is enabled.
        e => unreachable!("unexpected base58 decoding error: {}", e),
    })?;

    // With at least two bytes available, only a reserved or non-canonical first byte
    // makes the prefix unreadable.
    let (prefix, prefix_len) = NetworkPrefix::read(&data).ok_or(match data.first() {
        Some(&b) if b >= 0x80 || data.len() >= 2 => ParseError::InvalidPrefix(b),
        _ => ParseError::InvalidLength(data.len()),
    })?;

    // The first byte fixes the prefix width, and the checksum width is then the only
    // one consistent with the remaining length.
    let body_len = data.len() - prefix_len;
    let check_len = [2, 1]
        .into_iter()
        .find(|c| body_len.checked_sub(*c).and_then(checksum_len) == Some(*c))
        .ok_or(ParseError::InvalidLength(data.len()))?;

    let (body, expected) = data.split_at(data.len() - check_len);
    if checksum(body).as_bytes()[..check_len] != *expected {
        return Err(ParseError::ChecksumMismatch);
    }

    Ok((prefix, body[prefix_len..].to_vec()))
}

/// Decodes an SS58 address, requiring it to belong to the network `expected`.
pub fn decode_for_network(s: &str, expected: NetworkPrefix) -> Result<Vec<u8>, ParseError> {
    let (actual, payload) = decode(s)?;
    if actual == expected {
        Ok(payload)
    } else {
        Err(ParseError::WrongNetwork { expected, actual })
    }
}
