//! Constants for a locally run development chain.

use crate::NetworkPrefix;

/// The name under which a local chain is selected.
pub const NAME: &str = "local";

/// The SS58 prefix of local development addresses.
pub const SS58_PREFIX: NetworkPrefix = super::SS58_PREFIX;
