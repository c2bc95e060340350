//! *Parser for SS58 addresses and the EVM mirror accounts they can represent.*
//!
//! A Bittensor deployment has two account spaces: 20-byte EVM accounts used by its
//! contract-execution environment, and 32-byte native accounts shown to users as SS58
//! strings. Every EVM account owns a *mirror* native account, and funds sent to the
//! mirror's SS58 address become available to the EVM account.
//!
//! This crate converts between the two:
//!
//! ```text
//!            mirror::embed          encoding::encode
//!            ------------->         --------------->
//! CompactId                NativeAccount              SS58 string
//!            <-------------         <---------------
//!            mirror::extract        encoding::decode
//! ```
//!
//! [`compact_to_native`] and [`native_to_compact`] compose both steps, and are what most
//! callers want. Every call takes the expected [`NetworkPrefix`] explicitly; there is no
//! global network configuration.
//!
//! # Examples
//!
//! ```
//! use ss58_address::{compact_to_native, native_to_compact};
//! use ss58_protocol::{CompactId, NetworkPrefix};
//!
//! let evm: CompactId = "0x1111111111111111111111111111111111111111".parse().unwrap();
//! let encoded = compact_to_native(&evm, NetworkPrefix::SUBSTRATE);
//! assert_eq!(encoded, "5EMjsczPbUMmd1jtRoHJESkgdGMM3peHZ89DuNmKqib75rK4");
//! assert_eq!(native_to_compact(&encoded, NetworkPrefix::SUBSTRATE), Ok(evm));
//! ```
//!
//! Decoding fails closed, with a distinct error for each corrective action a caller may
//! need to take:
//!
//! ```
//! use ss58_address::{encoding::ParseError, native_to_compact, AddressError};
//! use ss58_protocol::NetworkPrefix;
//!
//! // A genuine public key has no EVM counterpart.
//! let alice = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
//! assert_eq!(
//!     native_to_compact(alice, NetworkPrefix::SUBSTRATE),
//!     Err(AddressError::NotAMirrorAddress),
//! );
//!
//! // The same key on Polkadot is rejected before the account is even looked at.
//! let polkadot_alice = "15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5";
//! assert_eq!(
//!     native_to_compact(polkadot_alice, NetworkPrefix::SUBSTRATE),
//!     Err(AddressError::Parse(ParseError::WrongNetwork {
//!         expected: NetworkPrefix::SUBSTRATE,
//!         actual: NetworkPrefix::POLKADOT,
//!     })),
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

use std::{error::Error, fmt, str::FromStr};

use tracing::{debug, trace};

pub mod encoding;
pub mod mirror;

#[cfg(any(test, feature = "test-dependencies"))]
pub mod test_vectors;

pub use encoding::ParseError;
pub use mirror::NotAMirrorAddress;
pub use ss58_protocol::{CompactId, NativeAccount, NetworkPrefix};

use ss58_protocol::constants::{checksum_len, SS58_PREFIX};

/// An error while recovering an EVM account from an SS58 address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The string is not a valid SS58 address for the expected network.
    Parse(ParseError),
    /// The address is valid, but its account does not mirror an EVM account.
    NotAMirrorAddress,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Parse(e) => write!(f, "Invalid SS58 address: {}", e),
            AddressError::NotAMirrorAddress => fmt::Display::fmt(&NotAMirrorAddress, f),
        }
    }
}

impl Error for AddressError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AddressError::Parse(e) => Some(e),
            AddressError::NotAMirrorAddress => None,
        }
    }
}

impl From<ParseError> for AddressError {
    fn from(e: ParseError) -> Self {
        AddressError::Parse(e)
    }
}

impl From<NotAMirrorAddress> for AddressError {
    fn from(_: NotAMirrorAddress) -> Self {
        AddressError::NotAMirrorAddress
    }
}

/// An SS58 address of a 32-byte native account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ss58Address {
    prefix: NetworkPrefix,
    account: NativeAccount,
}

impl Ss58Address {
    /// Constructs the address of `account` on the network identified by `prefix`.
    pub fn new(prefix: NetworkPrefix, account: NativeAccount) -> Self {
        Ss58Address { prefix, account }
    }

    /// Constructs the address of the mirror account of `compact`.
    pub fn from_compact(prefix: NetworkPrefix, compact: &CompactId) -> Self {
        Ss58Address::new(prefix, mirror::embed(compact))
    }

    /// Attempts to parse the given string as an SS58 address.
    ///
    /// This simply calls [`s.parse()`], leveraging the [`FromStr` implementation]. No
    /// network is enforced; use [`Ss58Address::ensure_network`] or
    /// [`native_to_compact`] for that.
    ///
    /// [`s.parse()`]: std::primitive::str::parse
    /// [`FromStr` implementation]: Ss58Address#impl-FromStr-for-Ss58Address
    pub fn try_from_encoded(s: &str) -> Result<Self, ParseError> {
        s.parse()
    }

    /// Encodes this address in its canonical string representation.
    pub fn encode(&self) -> String {
        encoding::encode(self.prefix, self.account.as_bytes())
    }

    /// Returns the network prefix of this address.
    pub fn prefix(&self) -> NetworkPrefix {
        self.prefix
    }

    /// Returns the native account of this address.
    pub fn account(&self) -> &NativeAccount {
        &self.account
    }

    /// Returns this address unchanged if it belongs to the network `expected`.
    pub fn ensure_network(self, expected: NetworkPrefix) -> Result<Self, ParseError> {
        if self.prefix == expected {
            Ok(self)
        } else {
            Err(ParseError::WrongNetwork {
                expected,
                actual: self.prefix,
            })
        }
    }

    /// Returns the EVM account this address mirrors.
    pub fn to_compact(&self) -> Result<CompactId, NotAMirrorAddress> {
        mirror::extract(&self.account)
    }

    /// Returns the EVM account this address mirrors, if it belongs to the network
    /// `expected`.
    pub fn to_compact_if_network(&self, expected: NetworkPrefix) -> Result<CompactId, AddressError> {
        let compact = self.ensure_network(expected)?.to_compact()?;
        Ok(compact)
    }
}

impl FromStr for Ss58Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = encoding::decode(s)?;
        // Account indices and compressed keys are valid SS58, but do not name a
        // 32-byte account.
        let account = NativeAccount::try_from(&payload[..]).map_err(|_| {
            ParseError::InvalidLength(
                prefix.encoded_len() + payload.len() + checksum_len(payload.len()).unwrap_or(0),
            )
        })?;
        Ok(Ss58Address { prefix, account })
    }
}

impl fmt::Display for Ss58Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Returns the SS58 address of the mirror account of `compact` on `network`.
pub fn compact_to_native(compact: &CompactId, network: NetworkPrefix) -> String {
    let encoded = Ss58Address::from_compact(network, compact).encode();
    trace!("Derived mirror address {} for {}", encoded, compact);
    encoded
}

/// Recovers the EVM account whose mirror has the SS58 address `address` on `network`.
///
/// Either the complete [`CompactId`] is returned, or an error identifying why the
/// address was rejected:
///
/// - [`AddressError::Parse`] if the string is mistyped or corrupted
///   ([`ParseError::InvalidCharacter`], [`ParseError::InvalidLength`],
///   [`ParseError::InvalidPrefix`], [`ParseError::ChecksumMismatch`]) or belongs to
///   another network ([`ParseError::WrongNetwork`]);
/// - [`AddressError::NotAMirrorAddress`] if the address is valid but its account is an
///   independent keypair rather than the mirror of an EVM account.
pub fn native_to_compact(address: &str, network: NetworkPrefix) -> Result<CompactId, AddressError> {
    address
        .parse::<Ss58Address>()
        .map_err(AddressError::from)
        .and_then(|addr| addr.to_compact_if_network(network))
        .map_err(|e| {
            debug!("Rejected address {:?}: {}", address, e);
            e
        })
}

/// Returns the SS58 address of the mirror account of `compact` on the Bittensor
/// deployments, for display to users.
pub fn derive_mirror_text(compact: &CompactId) -> String {
    compact_to_native(compact, SS58_PREFIX)
}

/// Returns the SS58 address of a native account (for example a hotkey's public key) on
/// `network`.
pub fn native_to_text(account: &NativeAccount, network: NetworkPrefix) -> String {
    Ss58Address::new(network, *account).encode()
}

#[cfg(feature = "test-dependencies")]
pub mod testing {
    use proptest::{prop_compose, strategy::Strategy};
    use ss58_protocol::{
        testing::{arb_compact_id, arb_native_account, arb_network_prefix},
        NetworkPrefix,
    };

    use crate::Ss58Address;

    prop_compose! {
        /// Create an arbitrary SS58 address of a mirror account.
        pub fn arb_mirror_address(prefix: NetworkPrefix)(
            compact in arb_compact_id()
        ) -> Ss58Address {
            Ss58Address::from_compact(prefix, &compact)
        }
    }

    /// Create an arbitrary SS58 address on any network.
    ///
    /// The account is uniformly random, and so is almost never a mirror account.
    pub fn arb_address() -> impl Strategy<Value = Ss58Address> {
        (arb_network_prefix(), arb_native_account())
            .prop_map(|(prefix, account)| Ss58Address::new(prefix, account))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use ss58_protocol::{
        testing::{arb_compact_id, arb_native_account, arb_network_prefix},
        CompactId, NativeAccount, NetworkPrefix,
    };

    use super::{
        compact_to_native, derive_mirror_text, native_to_compact, native_to_text, AddressError,
        ParseError, Ss58Address,
    };
    use crate::test_vectors::TEST_VECTORS;

    const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn vectors() {
        for tv in TEST_VECTORS {
            let prefix = NetworkPrefix::new(tv.prefix).unwrap();
            let account = NativeAccount::from_bytes(tv.account);

            let addr: Ss58Address = tv.encoded.parse().unwrap();
            assert_eq!(addr, Ss58Address::new(prefix, account));
            assert_eq!(addr.to_string(), tv.encoded);
            assert_eq!(native_to_text(&account, prefix), tv.encoded);

            match tv.compact {
                Some(compact) => {
                    let compact = CompactId::from_bytes(compact);
                    assert_eq!(compact_to_native(&compact, prefix), tv.encoded);
                    assert_eq!(native_to_compact(tv.encoded, prefix), Ok(compact));
                }
                None => assert_eq!(
                    native_to_compact(tv.encoded, prefix),
                    Err(AddressError::NotAMirrorAddress)
                ),
            }
        }
    }

    #[test]
    fn deployment_display_address() {
        let compact = CompactId::from_bytes([0x11; 20]);
        assert_eq!(
            derive_mirror_text(&compact),
            "5EMjsczPbUMmd1jtRoHJESkgdGMM3peHZ89DuNmKqib75rK4"
        );
        assert_eq!(
            derive_mirror_text(&compact),
            compact_to_native(&compact, NetworkPrefix::SUBSTRATE)
        );
    }

    #[test]
    fn account_index_is_not_an_account() {
        assert_eq!(
            "F7NZ".parse::<Ss58Address>(),
            Err(ParseError::InvalidLength(3))
        );
        assert_matches!(
            native_to_compact("F7NZ", NetworkPrefix::SUBSTRATE),
            Err(AddressError::Parse(ParseError::InvalidLength(3)))
        );
    }

    #[test]
    fn single_character_mutations_fail_closed() {
        let compact = CompactId::from_bytes([0x11; 20]);
        let encoded = compact_to_native(&compact, NetworkPrefix::SUBSTRATE);
        assert_eq!(encoded, "5EMjsczPbUMmd1jtRoHJESkgdGMM3peHZ89DuNmKqib75rK4");

        let mut checksum_collisions = vec![];
        for (index, original) in encoded.char_indices() {
            for c in BASE58_ALPHABET.chars().chain("0OIl".chars()) {
                if c == original {
                    continue;
                }
                let mut mutated = encoded.clone();
                mutated.replace_range(index..index + 1, &c.to_string());

                match native_to_compact(&mutated, NetworkPrefix::SUBSTRATE) {
                    Ok(recovered) => panic!("{} decoded to {}", mutated, recovered),
                    Err(AddressError::Parse(ParseError::InvalidCharacter {
                        character,
                        index: i,
                    })) => {
                        assert_eq!((character, i), (c, index));
                    }
                    Err(AddressError::Parse(ParseError::ChecksumMismatch)) => (),
                    // Edits to the first character can change the prefix width.
                    Err(AddressError::Parse(
                        ParseError::InvalidPrefix(_) | ParseError::InvalidLength(_),
                    )) => assert_eq!(index, 0),
                    // A 2-byte checksum admits roughly one in 65536 corruptions; the
                    // mirror layout check must catch those.
                    Err(AddressError::NotAMirrorAddress) => checksum_collisions.push(mutated),
                    Err(e) => panic!("{}: unexpected error {}", mutated, e),
                }
            }
        }

        assert_eq!(
            checksum_collisions,
            ["5EMjsczPbUMmd1jtRoHJESkgdGMG3peHZ89DuNmKqib75rK4"]
        );
    }

    #[test]
    fn only_canonical_text_is_accepted() {
        let alt = "Zp3SUqAUsL61Mp4KkVYMJ55jDf5f7VT9HCUXonRP15t6LkfLk";
        assert_eq!(
            native_to_compact(alt, NetworkPrefix::SUBSTRATE),
            Err(AddressError::Parse(ParseError::InvalidPrefix(0x4a)))
        );
    }

    #[test]
    fn wrong_network_is_reported_before_mirror_check() {
        let addr = Ss58Address::new(NetworkPrefix::KUSAMA, NativeAccount::from_bytes([7; 32]));
        assert_eq!(
            native_to_compact(&addr.encode(), NetworkPrefix::SUBSTRATE),
            Err(AddressError::Parse(ParseError::WrongNetwork {
                expected: NetworkPrefix::SUBSTRATE,
                actual: NetworkPrefix::KUSAMA,
            }))
        );
    }

    #[test]
    fn error_sources() {
        use std::error::Error;

        let e = AddressError::from(ParseError::ChecksumMismatch);
        assert_eq!(
            e.source().map(|s| s.to_string()),
            Some(ParseError::ChecksumMismatch.to_string())
        );
        assert!(AddressError::NotAMirrorAddress.source().is_none());
    }

    proptest! {
        #[test]
        fn compact_space_roundtrip(
            network in arb_network_prefix(),
            compact in arb_compact_id(),
        ) {
            let encoded = compact_to_native(&compact, network);
            prop_assert_eq!(native_to_compact(&encoded, network), Ok(compact));
        }

        #[test]
        fn text_space_roundtrip(
            network in arb_network_prefix(),
            compact in arb_compact_id(),
        ) {
            let encoded = compact_to_native(&compact, network);
            let recovered = native_to_compact(&encoded, network).unwrap();
            prop_assert_eq!(compact_to_native(&recovered, network), encoded);
        }

        #[test]
        fn network_discrimination(
            a in arb_network_prefix(),
            b in arb_network_prefix(),
            compact in arb_compact_id(),
        ) {
            prop_assume!(a != b);
            let encoded = compact_to_native(&compact, a);
            prop_assert_eq!(
                native_to_compact(&encoded, b),
                Err(AddressError::Parse(ParseError::WrongNetwork { expected: b, actual: a }))
            );
        }

        #[test]
        fn independent_accounts_are_not_mirrors(
            network in arb_network_prefix(),
            account in arb_native_account(),
        ) {
            let addr = Ss58Address::new(network, account);
            prop_assume!(addr.to_compact().is_err());
            prop_assert_eq!(
                native_to_compact(&addr.encode(), network),
                Err(AddressError::NotAMirrorAddress)
            );
        }
    }
}
