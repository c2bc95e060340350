//! *A crate for SS58 mirror-address protocol constants and value types.*
//!
//! `ss58_protocol` contains the account identifier types shared by the two account spaces
//! of a Bittensor deployment (20-byte EVM accounts and 32-byte native accounts), the
//! [`NetworkPrefix`] that tags an SS58 address with the network it belongs to, and the
//! pinned binary constants of the SS58 and mirror-account conventions.
//!
//! Nothing in this crate performs base58 or checksum work; see the `ss58_address` crate
//! for the codec built on top of these types.
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]

#[cfg_attr(any(test, feature = "test-dependencies"), macro_use)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod constants;

mod account;
mod network;
mod prefix;

pub use account::{CompactId, NativeAccount, ParseAccountError};
pub use network::{Deployment, ParseDeploymentError};
pub use prefix::{NetworkPrefix, PrefixError};

#[cfg(any(test, feature = "test-dependencies"))]
pub mod testing {
    use proptest::{
        array::{uniform20, uniform32},
        prelude::any,
        prop_compose,
    };

    use crate::{CompactId, NativeAccount, NetworkPrefix};

    prop_compose! {
        /// Create an arbitrary 20-byte account identifier.
        pub fn arb_compact_id()(bytes in uniform20(any::<u8>())) -> CompactId {
            CompactId::from_bytes(bytes)
        }
    }

    prop_compose! {
        /// Create an arbitrary 32-byte native account.
        ///
        /// The generated account is almost never a mirror account; use
        /// [`arb_compact_id`] together with the embedder for those.
        pub fn arb_native_account()(bytes in uniform32(any::<u8>())) -> NativeAccount {
            NativeAccount::from_bytes(bytes)
        }
    }

    prop_compose! {
        /// Create an arbitrary network prefix from the full encodable range.
        pub fn arb_network_prefix()(ident in 0..=NetworkPrefix::MAX) -> NetworkPrefix {
            NetworkPrefix::from_u16_unchecked(ident)
        }
    }
}
