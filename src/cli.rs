//! CLI argument parsing via clap.

use clap::{ArgAction, Parser, Subcommand};
use filplorer::build_info;
use filplorer::config::ConfigOverrides;

/// Ask an on-chain agent a question from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "filplorer",
    version,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    /// Query to submit. If provided, runs once and exits.
    pub prompt: Option<String>,

    /// Path to config file (default: ./filplorer.toml or ~/.config/filplorer/filplorer.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the chain JSON-RPC endpoint.
    #[arg(long = "rpc-url", global = true)]
    pub rpc_url: Option<String>,

    /// Override the wallet JSON-RPC endpoint.
    #[arg(long = "wallet-url", global = true)]
    pub wallet_url: Option<String>,

    /// Override the agent contract address.
    #[arg(long = "contract")]
    pub contract: Option<String>,

    /// Send from this wallet account instead of the first one offered.
    #[arg(long = "account", global = true)]
    pub account: Option<String>,

    /// Iteration budget passed to `runAgent`.
    #[arg(long = "max-iterations")]
    pub max_iterations: Option<u64>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Connect to the wallet and show the active account.
    Account,
    /// Write the default config to ~/.config/filplorer/filplorer.toml.
    Init {
        /// Replace an existing config, keeping a timestamped backup.
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rpc_url: self.rpc_url.clone(),
            wallet_url: self.wallet_url.clone(),
            contract: self.contract.clone(),
            account: self.account.clone(),
            max_iterations: self.max_iterations,
            no_color: self.no_color,
        }
    }
}
