//! Module for the CLI.

use alloy_primitives::Address;
use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use taiko_protocol::{GoldenTouchSigner, ProtocolConstants};
use taiko_providers::{ConstantsFetcher, ConstantsProvider, FileConstantsFetcher, ProviderConfig};
use taiko_providers_alloy::AlloyConstantsFetcher;
use tracing::{info, Level};

/// Main CLI
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// The subcommand to run.
    #[clap(subcommand)]
    pub subcommand: ConstantsSubcommand,
}

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum ConstantsSubcommand {
    /// Fetch the constants from a TaikoL1 contract.
    Fetch(FetchArgs),
    /// Load the constants from a saved record.
    File(FileArgs),
    /// Print the golden touch account.
    Signer,
}

/// Provider tunables shared by the subcommands.
#[derive(Debug, Clone, Args)]
pub(crate) struct ProviderArgs {
    /// Fetch timeout, in seconds.
    #[clap(long, env = "FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,
}

impl ProviderArgs {
    /// Returns the [ProviderConfig] described by the arguments.
    pub(crate) fn config(&self) -> ProviderConfig {
        ProviderConfig::default().with_fetch_timeout(Duration::from_secs(self.timeout))
    }
}

/// Arguments of the `fetch` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct FetchArgs {
    /// URL of the L1 execution client.
    #[clap(long, env = "L1_RPC_URL")]
    pub l1_rpc_url: reqwest::Url,
    /// Address of the TaikoL1 contract.
    #[clap(long, env = "TAIKO_L1_ADDRESS")]
    pub taiko_l1: Address,
    /// Write the validated constants to this file.
    #[clap(long)]
    pub save: Option<PathBuf>,
    #[clap(flatten)]
    pub provider: ProviderArgs,
}

/// Arguments of the `file` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct FileArgs {
    /// Path of the saved record.
    pub path: PathBuf,
    #[clap(flatten)]
    pub provider: ProviderArgs,
}

impl Cli {
    /// Initializes telemetry for the application.
    pub(crate) fn init_telemetry(self) -> Result<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;
        Ok(self)
    }

    /// Parse the CLI arguments and run the command
    pub(crate) async fn run(&self) -> Result<()> {
        match &self.subcommand {
            ConstantsSubcommand::Fetch(args) => {
                let fetcher =
                    AlloyConstantsFetcher::new_http(args.l1_rpc_url.clone(), args.taiko_l1);
                let constants = load(fetcher, args.provider.config()).await?;
                if let Some(path) = &args.save {
                    FileConstantsFetcher::new(path).store(&constants).await?;
                    info!(target: "cli", path = %path.display(), "Saved protocol constants");
                }
                print(&constants)
            }
            ConstantsSubcommand::File(args) => {
                let fetcher = FileConstantsFetcher::new(&args.path);
                let constants = load(fetcher, args.provider.config()).await?;
                print(&constants)
            }
            ConstantsSubcommand::Signer => {
                println!("{}", GoldenTouchSigner::TAIKO.address());
                Ok(())
            }
        }
    }
}

/// Loads the constants through a fresh [ConstantsProvider].
async fn load<F>(fetcher: F, config: ProviderConfig) -> Result<ProtocolConstants>
where
    F: ConstantsFetcher + Send,
{
    let provider = ConstantsProvider::new(fetcher, config);
    let constants = provider.latest().await?;
    info!(target: "cli", chain_id = %constants.chain_id, "Loaded protocol constants");
    Ok(*constants)
}

fn print(constants: &ProtocolConstants) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(constants)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::parse_from([
            "taiko-constants",
            "-vv",
            "fetch",
            "--l1-rpc-url",
            "http://localhost:8545",
            "--taiko-l1",
            "0x0000777700000000000000000000000000000001",
            "--timeout",
            "3",
        ]);
        assert_eq!(cli.v, 2);
        let ConstantsSubcommand::Fetch(args) = cli.subcommand else {
            panic!("expected fetch subcommand");
        };
        assert_eq!(args.provider.config().fetch_timeout, Duration::from_secs(3));
        assert!(args.save.is_none());
    }

    #[test]
    fn test_parse_file() {
        let cli = Cli::parse_from(["taiko-constants", "file", "constants.json"]);
        let ConstantsSubcommand::File(args) = cli.subcommand else {
            panic!("expected file subcommand");
        };
        assert_eq!(args.path, PathBuf::from("constants.json"));
        assert_eq!(args.provider.config(), ProviderConfig::default());
    }
}
