use core::fmt;
use core::str::FromStr;

use crate::{
    constants::{local, mainnet, testnet},
    NetworkPrefix,
};

/// The Bittensor deployments an address helper can be configured for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Deployment {
    /// The main network (finney).
    #[default]
    Mainnet,
    /// The public test network.
    Testnet,
    /// A locally run development chain.
    Local,
}

impl Deployment {
    /// All known deployments, in the order they are listed in help output.
    pub const ALL: [Deployment; 3] = [Deployment::Mainnet, Deployment::Testnet, Deployment::Local];

    /// Returns the name used to select this deployment.
    pub const fn name(self) -> &'static str {
        match self {
            Deployment::Mainnet => mainnet::NAME,
            Deployment::Testnet => testnet::NAME,
            Deployment::Local => local::NAME,
        }
    }

    /// Returns the SS58 prefix used by addresses on this deployment.
    pub const fn ss58_prefix(self) -> NetworkPrefix {
        match self {
            Deployment::Mainnet => mainnet::SS58_PREFIX,
            Deployment::Testnet => testnet::SS58_PREFIX,
            Deployment::Local => local::SS58_PREFIX,
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error returned when a string does not name a known [`Deployment`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDeploymentError(alloc::string::String);

impl fmt::Display for ParseDeploymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown deployment \"{}\" (expected one of {}, {}, {})",
            self.0,
            mainnet::NAME,
            testnet::NAME,
            local::NAME
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDeploymentError {}

impl FromStr for Deployment {
    type Err = ParseDeploymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Deployment::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            // "finney" is the name the Bittensor tooling uses for mainnet.
            .or_else(|| s.eq_ignore_ascii_case("finney").then_some(Deployment::Mainnet))
            .ok_or_else(|| ParseDeploymentError(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::Deployment;
    use crate::NetworkPrefix;

    #[test]
    fn names_roundtrip() {
        for d in Deployment::ALL {
            assert_eq!(d.name().parse::<Deployment>(), Ok(d));
        }
        assert_eq!("Finney".parse::<Deployment>(), Ok(Deployment::Mainnet));
        assert_eq!(" TESTNET ".parse::<Deployment>(), Ok(Deployment::Testnet));
        assert_matches!("devnet".parse::<Deployment>(), Err(_));
    }

    #[test]
    fn every_deployment_uses_the_substrate_prefix() {
        for d in Deployment::ALL {
            assert_eq!(d.ss58_prefix(), NetworkPrefix::SUBSTRATE);
        }
    }
}
