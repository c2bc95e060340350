//! Constants for the Bittensor main network (finney).

use crate::NetworkPrefix;

/// The name under which the main network is selected.
pub const NAME: &str = "mainnet";

/// The SS58 prefix of mainnet addresses.
pub const SS58_PREFIX: NetworkPrefix = super::SS58_PREFIX;
