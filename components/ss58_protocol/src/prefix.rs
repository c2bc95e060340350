use core::fmt;

#[cfg(feature = "std")]
use memuse::DynamicUsage;

/// The network identifier carried at the front of every SS58 address.
///
/// SS58 identifiers are 14-bit values. Identifiers below 64 are serialized as a single
/// byte; the remainder use a two-byte form whose first byte has its top two bits set to
/// `01`. The first byte of a serialized prefix therefore uniquely determines its width,
/// and first bytes `0x80..=0xFF` are reserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkPrefix(u16);

#[cfg(feature = "std")]
memuse::impl_no_dynamic_usage!(NetworkPrefix);

/// An error produced when a value cannot be used as an SS58 network prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixError {
    /// The value does not fit in the 14 bits available to SS58 identifiers.
    OutOfRange(u16),
}

impl fmt::Display for PrefixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixError::OutOfRange(v) => write!(
                f,
                "SS58 network prefix {} is out of range (maximum {})",
                v,
                NetworkPrefix::MAX
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrefixError {}

impl NetworkPrefix {
    /// The largest identifier representable in the two-byte prefix form.
    pub const MAX: u16 = 0b0011_1111_1111_1111;

    /// Polkadot relay chain.
    pub const POLKADOT: NetworkPrefix = NetworkPrefix(0);
    /// Kusama relay chain.
    pub const KUSAMA: NetworkPrefix = NetworkPrefix(2);
    /// The generic Substrate prefix, used by every Bittensor deployment.
    pub const SUBSTRATE: NetworkPrefix = NetworkPrefix(42);

    /// Constructs a prefix, returning `None` if `ident` exceeds [`NetworkPrefix::MAX`].
    pub const fn new(ident: u16) -> Option<Self> {
        if ident <= Self::MAX {
            Some(NetworkPrefix(ident))
        } else {
            None
        }
    }

    #[cfg(any(test, feature = "test-dependencies"))]
    pub(crate) const fn from_u16_unchecked(ident: u16) -> Self {
        NetworkPrefix(ident)
    }

    /// Returns the numeric identifier.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the identifiers that the SS58 registry reserves and never assigns to a
    /// network (46 and 47). They still encode and decode like any other identifier.
    pub const fn is_reserved(self) -> bool {
        matches!(self.0, 46 | 47)
    }

    /// Returns the number of bytes this prefix occupies when serialized.
    pub const fn encoded_len(self) -> usize {
        if self.0 < 64 {
            1
        } else {
            2
        }
    }

    /// Serializes this prefix.
    ///
    /// Only the first [`NetworkPrefix::encoded_len`] bytes of the returned buffer are
    /// meaningful; the remainder is zero.
    pub const fn to_bytes(self) -> [u8; 2] {
        let ident = self.0;
        if ident < 64 {
            [ident as u8, 0]
        } else {
            let first = ((ident & 0b0000_0000_1111_1100) as u8) >> 2;
            let second = ((ident >> 8) as u8) | (((ident & 0b0000_0000_0000_0011) as u8) << 6);
            [first | 0b0100_0000, second]
        }
    }

    /// Reads a serialized prefix from the front of `data`.
    ///
    /// Returns the prefix together with the number of bytes it occupied, or `None` if
    /// `data` is too short, starts with a reserved byte, or uses the two-byte form for an
    /// identifier below 64.
    pub fn read(data: &[u8]) -> Option<(Self, usize)> {
        match data {
            [first @ 0..=63, ..] => Some((NetworkPrefix(u16::from(*first)), 1)),
            [first @ 64..=127, second, ..] => {
                let lower = (*first << 2) | (*second >> 6);
                let upper = *second & 0b0011_1111;
                let ident = u16::from(lower) | (u16::from(upper) << 8);
                // Identifiers below 64 have a single canonical one-byte form.
                (ident >= 64).then_some((NetworkPrefix(ident), 2))
            }
            _ => None,
        }
    }
}

impl TryFrom<u16> for NetworkPrefix {
    type Error = PrefixError;

    fn try_from(ident: u16) -> Result<Self, Self::Error> {
        NetworkPrefix::new(ident).ok_or(PrefixError::OutOfRange(ident))
    }
}

impl From<NetworkPrefix> for u16 {
    fn from(prefix: NetworkPrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::{NetworkPrefix, PrefixError};
    use crate::testing::arb_network_prefix;

    #[test]
    fn single_byte_prefixes() {
        assert_eq!(NetworkPrefix::POLKADOT.to_bytes(), [0x00, 0x00]);
        assert_eq!(NetworkPrefix::SUBSTRATE.to_bytes(), [42, 0x00]);
        assert_eq!(NetworkPrefix::SUBSTRATE.encoded_len(), 1);
        assert_eq!(NetworkPrefix::new(63).unwrap().encoded_len(), 1);
    }

    #[test]
    fn two_byte_prefixes() {
        let p = NetworkPrefix::new(64).unwrap();
        assert_eq!(p.encoded_len(), 2);
        assert_eq!(p.to_bytes(), [0x50, 0x00]);

        let p = NetworkPrefix::new(NetworkPrefix::MAX).unwrap();
        assert_eq!(p.to_bytes(), [0x7f, 0xff]);

        let p = NetworkPrefix::new(1284).unwrap();
        assert_eq!(NetworkPrefix::read(&p.to_bytes()), Some((p, 2)));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(NetworkPrefix::new(NetworkPrefix::MAX + 1), None);
        assert_matches!(
            NetworkPrefix::try_from(u16::MAX),
            Err(PrefixError::OutOfRange(u16::MAX))
        );
    }

    #[test]
    fn reserved_first_bytes() {
        assert_eq!(NetworkPrefix::read(&[]), None);
        assert_eq!(NetworkPrefix::read(&[0x40]), None);
        for first in 0x80..=0xff {
            assert_eq!(NetworkPrefix::read(&[first, 0x00]), None);
        }
    }

    #[test]
    fn non_canonical_two_byte_form() {
        // 42 packed into the two-byte form.
        assert_eq!(NetworkPrefix::read(&[0x4a, 0x80]), None);
        assert_eq!(NetworkPrefix::read(&[0x40, 0x00]), None);
        assert_eq!(NetworkPrefix::read(&[0x4f, 0xc0]), None);
        assert_eq!(
            NetworkPrefix::read(&[0x50, 0x00]),
            Some((NetworkPrefix::new(64).unwrap(), 2))
        );
    }

    #[test]
    fn reserved_identifiers() {
        assert!(NetworkPrefix::new(46).unwrap().is_reserved());
        assert!(NetworkPrefix::new(47).unwrap().is_reserved());
        assert!(!NetworkPrefix::SUBSTRATE.is_reserved());
    }

    proptest! {
        #[test]
        fn prefix_roundtrip(prefix in arb_network_prefix()) {
            let bytes = prefix.to_bytes();
            prop_assert_eq!(
                NetworkPrefix::read(&bytes[..prefix.encoded_len()]),
                Some((prefix, prefix.encoded_len()))
            );
        }
    }
}
