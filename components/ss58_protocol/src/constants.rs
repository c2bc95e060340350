//! Pinned constants of the SS58 address format and the EVM mirror-account convention.
//!
//! Every value in this module is part of an external contract: the ledger derives the
//! same native account for an EVM address, and wallets compute the same checksum for an
//! SS58 string. A format revision must only ever touch this module.

use static_assertions::const_assert_eq;

use crate::NetworkPrefix;

pub mod local;
pub mod mainnet;
pub mod testnet;

/// Length of a compact (EVM `H160`) account identifier.
pub const COMPACT_ID_LEN: usize = 20;

/// Length of a native (`AccountId32`) account identifier.
pub const NATIVE_ACCOUNT_LEN: usize = 32;

/// The ASCII marker at the start of every native account that mirrors an EVM account.
pub const MIRROR_TAG: [u8; 4] = *b"evm:";

/// Number of zero bytes following the embedded compact identifier in a mirror account.
pub const MIRROR_PADDING_LEN: usize = 8;

const_assert_eq!(
    MIRROR_TAG.len() + COMPACT_ID_LEN + MIRROR_PADDING_LEN,
    NATIVE_ACCOUNT_LEN
);

/// The context string hashed ahead of the address bytes when computing an SS58 checksum.
pub const CHECKSUM_CONTEXT: &[u8; 7] = b"SS58PRE";

/// The SS58 prefix shared by every Bittensor deployment.
pub const SS58_PREFIX: NetworkPrefix = NetworkPrefix::SUBSTRATE;

/// Returns the number of checksum bytes appended to an SS58 address whose account
/// payload is `payload_len` bytes long, or `None` if SS58 does not define that length.
///
/// Account indices (1, 2, 4 or 8 bytes) carry a single checksum byte; public keys
/// (32 bytes, or 33 for compressed ECDSA keys) carry two.
pub const fn checksum_len(payload_len: usize) -> Option<usize> {
    match payload_len {
        1 | 2 | 4 | 8 => Some(1),
        32 | 33 => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{checksum_len, CHECKSUM_CONTEXT, MIRROR_TAG, NATIVE_ACCOUNT_LEN};

    #[test]
    fn pinned_values() {
        assert_eq!(MIRROR_TAG, [0x65, 0x76, 0x6d, 0x3a]);
        assert_eq!(CHECKSUM_CONTEXT, &[0x53, 0x53, 0x35, 0x38, 0x50, 0x52, 0x45]);
        assert_eq!(checksum_len(NATIVE_ACCOUNT_LEN), Some(2));
    }

    #[test]
    fn checksum_table() {
        let supported = (0..=64)
            .filter(|len| checksum_len(*len).is_some())
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(supported, [1, 2, 4, 8, 32, 33]);
        assert_eq!(checksum_len(20), None);
    }
}
