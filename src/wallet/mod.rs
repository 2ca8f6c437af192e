//! Wallet connection and transaction submission.
//!
//! The wallet is an external signer reached over JSON-RPC: it owns the keys,
//! chooses gas and nonce, and broadcasts. This crate never signs anything.

mod rpc_wallet;

pub use rpc_wallet::RpcWallet;

use crate::error::WalletError;
use crate::rpc::TransactionRequest;
use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;

/// Connected account and chain reported by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletSession {
    pub account: Address,
    pub chain_id: u64,
}

/// Wallet-connection provider used by the agent run flow.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access and report the active account and chain.
    async fn connect(&self) -> Result<WalletSession, WalletError>;

    /// Ask the wallet to sign and broadcast a transaction.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError>;
}
