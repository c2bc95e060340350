use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "std")]
use memuse::DynamicUsage;

use crate::constants::{COMPACT_ID_LEN, NATIVE_ACCOUNT_LEN};

/// An error while parsing an account identifier from hex or raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseAccountError {
    /// The input is not valid hex.
    InvalidHex,
    /// The input decoded to the wrong number of bytes.
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for ParseAccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAccountError::InvalidHex => write!(f, "Invalid hex encoding"),
            ParseAccountError::InvalidLength { expected, actual } => write!(
                f,
                "Expected an account of {} bytes, got {} bytes",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseAccountError {}

fn parse_hex<const N: usize>(s: &str) -> Result<[u8; N], ParseAccountError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|_| ParseAccountError::InvalidHex)?;
    to_array(&bytes)
}

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], ParseAccountError> {
    bytes
        .try_into()
        .map_err(|_| ParseAccountError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })
}

/// A 20-byte account identifier from the contract-execution (EVM) environment.
///
/// Displayed as `0x`-prefixed lowercase hex, the way EVM tooling prints an `H160`.
/// Checksummed (mixed-case) input is accepted when parsing, but the case is not
/// validated.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct CompactId([u8; COMPACT_ID_LEN]);

#[cfg(feature = "std")]
memuse::impl_no_dynamic_usage!(CompactId);

impl CompactId {
    /// Wraps the given bytes as a compact identifier.
    pub const fn from_bytes(bytes: [u8; COMPACT_ID_LEN]) -> Self {
        CompactId(bytes)
    }

    /// Returns the raw bytes of this identifier.
    pub const fn as_bytes(&self) -> &[u8; COMPACT_ID_LEN] {
        &self.0
    }
}

impl fmt::Debug for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompactId").field(&self.to_string()).finish()
    }
}

impl fmt::Display for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for CompactId {
    type Err = ParseAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(CompactId)
    }
}

impl TryFrom<&[u8]> for CompactId {
    type Error = ParseAccountError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        to_array(bytes).map(CompactId)
    }
}

impl AsRef<[u8; COMPACT_ID_LEN]> for CompactId {
    fn as_ref(&self) -> &[u8; COMPACT_ID_LEN] {
        &self.0
    }
}

impl From<CompactId> for [u8; COMPACT_ID_LEN] {
    fn from(value: CompactId) -> Self {
        value.0
    }
}

/// A 32-byte account identifier of the ledger's consensus layer.
///
/// This is either a genuine public key or a mirror of a [`CompactId`]; the type itself
/// makes no distinction.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct NativeAccount([u8; NATIVE_ACCOUNT_LEN]);

#[cfg(feature = "std")]
memuse::impl_no_dynamic_usage!(NativeAccount);

impl NativeAccount {
    /// Wraps the given bytes as a native account.
    pub const fn from_bytes(bytes: [u8; NATIVE_ACCOUNT_LEN]) -> Self {
        NativeAccount(bytes)
    }

    /// Returns the raw bytes of this account.
    pub const fn as_bytes(&self) -> &[u8; NATIVE_ACCOUNT_LEN] {
        &self.0
    }
}

impl fmt::Debug for NativeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeAccount")
            .field(&self.to_string())
            .finish()
    }
}

impl fmt::Display for NativeAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for NativeAccount {
    type Err = ParseAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(NativeAccount)
    }
}

impl TryFrom<&[u8]> for NativeAccount {
    type Error = ParseAccountError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        to_array(bytes).map(NativeAccount)
    }
}

impl AsRef<[u8; NATIVE_ACCOUNT_LEN]> for NativeAccount {
    fn as_ref(&self) -> &[u8; NATIVE_ACCOUNT_LEN] {
        &self.0
    }
}

impl From<NativeAccount> for [u8; NATIVE_ACCOUNT_LEN] {
    fn from(value: NativeAccount) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::{CompactId, NativeAccount, ParseAccountError};
    use crate::testing::{arb_compact_id, arb_native_account};

    #[test]
    fn parse_evm_address() {
        let id: CompactId = "0x1111111111111111111111111111111111111111".parse().unwrap();
        assert_eq!(id, CompactId::from_bytes([0x11; 20]));

        // Mixed-case EIP-55 addresses parse as plain hex.
        let id: CompactId = "0xAbCdEf0000000000000000000000000000000000".parse().unwrap();
        assert_eq!(&id.as_bytes()[..3], &[0xab, 0xcd, 0xef]);
        assert_eq!(
            id.to_string(),
            "0xabcdef0000000000000000000000000000000000"
        );

        // The `0x` prefix is optional.
        assert_eq!(
            "1111111111111111111111111111111111111111".parse::<CompactId>(),
            Ok(CompactId::from_bytes([0x11; 20]))
        );
    }

    #[test]
    fn parse_errors() {
        assert_matches!(
            "0x11".parse::<CompactId>(),
            Err(ParseAccountError::InvalidLength {
                expected: 20,
                actual: 1
            })
        );
        assert_matches!(
            "0xzz11111111111111111111111111111111111111".parse::<CompactId>(),
            Err(ParseAccountError::InvalidHex)
        );
        assert_matches!(
            "0x111".parse::<NativeAccount>(),
            Err(ParseAccountError::InvalidHex)
        );
        assert_matches!(
            NativeAccount::try_from(&[0u8; 20][..]),
            Err(ParseAccountError::InvalidLength {
                expected: 32,
                actual: 20
            })
        );
    }

    proptest! {
        #[test]
        fn compact_display_roundtrip(id in arb_compact_id()) {
            prop_assert_eq!(id.to_string().parse::<CompactId>(), Ok(id));
        }

        #[test]
        fn native_display_roundtrip(account in arb_native_account()) {
            prop_assert_eq!(account.to_string().parse::<NativeAccount>(), Ok(account));
        }
    }
}
