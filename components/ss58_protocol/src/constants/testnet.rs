//! Constants for the Bittensor test network.

use crate::NetworkPrefix;

/// The name under which the test network is selected.
pub const NAME: &str = "testnet";

/// The SS58 prefix of testnet addresses.
///
/// Testnet shares its prefix with mainnet, so an address alone does not tell the two
/// apart.
pub const SS58_PREFIX: NetworkPrefix = super::SS58_PREFIX;
