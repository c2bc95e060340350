//! Mirror accounts: native accounts that structurally embed an EVM account.
//!
//! A mirror account is `"evm:" ‖ h160 ‖ [0; 8]`. The mapping involves no hashing, so the
//! EVM address can always be recovered from the native account without a lookup.

use std::{error::Error, fmt};

use ss58_protocol::{
    constants::{COMPACT_ID_LEN, MIRROR_PADDING_LEN, MIRROR_TAG, NATIVE_ACCOUNT_LEN},
    CompactId, NativeAccount,
};

const COMPACT_START: usize = MIRROR_TAG.len();
const PADDING_START: usize = COMPACT_START + COMPACT_ID_LEN;

/// The native account was not derived from an EVM account.
///
/// This is the expected outcome for a genuine keypair-backed account, and does not
/// indicate that the account is corrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAMirrorAddress;

impl fmt::Display for NotAMirrorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account is not the mirror of an EVM address")
    }
}

impl Error for NotAMirrorAddress {}

/// Returns the native account that mirrors `compact`.
pub fn embed(compact: &CompactId) -> NativeAccount {
    let mut bytes = [0; NATIVE_ACCOUNT_LEN];
    bytes[..COMPACT_START].copy_from_slice(&MIRROR_TAG);
    bytes[COMPACT_START..PADDING_START].copy_from_slice(compact.as_bytes());
    NativeAccount::from_bytes(bytes)
}

/// Recovers the EVM account mirrored by `account`.
pub fn extract(account: &NativeAccount) -> Result<CompactId, NotAMirrorAddress> {
    let bytes = account.as_bytes();
    let (tag, rest) = bytes.split_at(COMPACT_START);
    let (compact, padding) = rest.split_at(COMPACT_ID_LEN);

    if tag != MIRROR_TAG || padding != [0; MIRROR_PADDING_LEN] {
        return Err(NotAMirrorAddress);
    }

    CompactId::try_from(compact).map_err(|_| NotAMirrorAddress)
}

/// Returns whether `account` is the mirror of some EVM account.
pub fn is_mirror(account: &NativeAccount) -> bool {
    extract(account).is_ok()
}
