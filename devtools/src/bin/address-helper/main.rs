use std::env;
use std::io;
use std::process;

use anyhow::Context as _;
use gumdrop::{Options, ParsingStyle};
use ss58_protocol::{CompactId, Deployment, NativeAccount, NetworkPrefix};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod address;

/// Environment variable consulted when `--deployment` is not given.
const DEPLOYMENT_VAR: &str = "SS58_DEPLOYMENT";

#[derive(Debug, Options)]
struct CliOptions {
    #[options(help = "Print this help output")]
    help: bool,

    #[options(help = "Log library decisions at debug level")]
    verbose: bool,

    #[options(
        meta = "NAME",
        help = "Deployment whose address format to use (mainnet, testnet, local)"
    )]
    deployment: Option<String>,

    #[options(meta = "N", help = "Network prefix to use instead of the deployment's")]
    prefix: Option<u16>,

    #[options(
        free,
        required,
        help = "SS58 address, or hex-encoded EVM address or native account"
    )]
    data: String,
}

/// The network that addresses are displayed for and checked against.
pub(crate) struct Network {
    pub(crate) deployment: Deployment,
    pub(crate) prefix: NetworkPrefix,
}

impl Network {
    fn from_options(opts: &CliOptions) -> anyhow::Result<Self> {
        let deployment = match opts
            .deployment
            .clone()
            .or_else(|| env::var(DEPLOYMENT_VAR).ok())
        {
            Some(name) => name.parse::<Deployment>()?,
            None => Deployment::default(),
        };

        let prefix = match opts.prefix {
            Some(p) => NetworkPrefix::try_from(p).context("Invalid --prefix")?,
            None => deployment.ss58_prefix(),
        };

        Ok(Network { deployment, prefix })
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = env::args().collect::<Vec<_>>();
    let opts = CliOptions::parse_args(&args[1..], ParsingStyle::default()).unwrap_or_else(|e| {
        eprintln!("{}: {}", args[0], e);
        process::exit(2);
    });

    if opts.help_requested() {
        println!("Usage: {} [options] data", args[0]);
        println!();
        println!("{}", CliOptions::usage());
        return;
    }

    init_logging(opts.verbose);

    let network = Network::from_options(&opts).unwrap_or_else(|e| {
        eprintln!("{}: {:#}", args[0], e);
        process::exit(2);
    });
    debug!(
        "Using network prefix {} for deployment {}",
        network.prefix, network.deployment
    );

    let usable = if let Ok(compact) = opts.data.parse::<CompactId>() {
        address::inspect_compact(&compact, &network);
        true
    } else if let Ok(account) = opts.data.parse::<NativeAccount>() {
        address::inspect_native(&account, &network);
        true
    } else {
        address::inspect_encoded(&opts.data, &network)
    };

    if !usable {
        process::exit(2);
    }
}
