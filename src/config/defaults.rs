//! Default configuration constants.

/// Embedded default `filplorer.toml` template written by `filplorer init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/filplorer.toml");

pub(super) const DEFAULT_CHAIN_ID: u64 = 696969;
pub(super) const DEFAULT_CHAIN_NAME: &str = "Galadriel Devnet";
pub(super) const DEFAULT_CURRENCY: &str = "GAL";
pub(super) const DEFAULT_RPC_URL: &str = "https://devnet.galadriel.com/";
pub(super) const DEFAULT_EXPLORER_URL: &str = "https://explorer.galadriel.com";
pub(super) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Local signer endpoint (Frame's default JSON-RPC port).
pub(super) const DEFAULT_WALLET_URL: &str = "http://127.0.0.1:1248";

pub(super) const DEFAULT_CONTRACT_ADDRESS: &str = "0x979f1Bb83FfA981533cd466082B227e5433161E3";
pub(super) const DEFAULT_MAX_ITERATIONS: u64 = 5;
pub(super) const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;
pub(super) const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u64 = 1_000;
