//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loader and source-resolution
//! logic lives in `config::mod`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    DEFAULT_CHAIN_ID, DEFAULT_CHAIN_NAME, DEFAULT_CONTRACT_ADDRESS, DEFAULT_CURRENCY,
    DEFAULT_EXPLORER_URL, DEFAULT_MAX_ITERATIONS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_RECEIPT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RPC_URL,
    DEFAULT_WALLET_URL,
};
use crate::agent::PollSettings;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub wallet: WalletConfig,
    pub agent: AgentConfig,
    pub display: DisplayConfig,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.network.request_timeout_secs)
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            poll_interval: Duration::from_millis(self.agent.poll_interval_ms),
            receipt_poll_interval: Duration::from_millis(self.agent.receipt_poll_interval_ms),
            max_iterations: self.agent.max_iterations,
        }
    }

    /// Explorer page for a transaction hash.
    pub fn explorer_tx_url(&self, tx_hash: &str) -> String {
        format!(
            "{}/tx/{tx_hash}",
            self.network.explorer_url.trim_end_matches('/')
        )
    }

    /// Explorer page for an account or contract.
    pub fn explorer_address_url(&self, address: &str) -> String {
        format!(
            "{}/address/{address}",
            self.network.explorer_url.trim_end_matches('/')
        )
    }
}

/// Chain the agent contract lives on.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub currency: String,
    pub rpc_url: String,
    pub explorer_url: String,
    pub request_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHAIN_NAME.into(),
            chain_id: DEFAULT_CHAIN_ID,
            currency: DEFAULT_CURRENCY.into(),
            rpc_url: DEFAULT_RPC_URL.into(),
            explorer_url: DEFAULT_EXPLORER_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Wallet signer endpoint and account selection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalletConfig {
    pub url: String,
    /// Account to use; the wallet's first account when unset.
    pub account: Option<String>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WALLET_URL.into(),
            account: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgentConfig {
    pub contract: String,
    pub max_iterations: u64,
    pub poll_interval_ms: u64,
    pub receipt_poll_interval_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT_ADDRESS.into(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    /// Show every new message as a THOUGHT/STEP trace on stderr.
    pub show_steps: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_steps: true,
        }
    }
}

/// Outcome of `filplorer init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created {
        path: PathBuf,
    },
    AlreadyInitialized {
        path: PathBuf,
    },
    Overwritten {
        path: PathBuf,
        backup_path: PathBuf,
    },
}
