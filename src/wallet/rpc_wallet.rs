//! [`WalletProvider`] backed by a JSON-RPC signer endpoint.

use super::{WalletProvider, WalletSession};
use crate::error::WalletError;
use crate::rpc::{JsonRpcClient, TransactionRequest};
use alloy_primitives::{Address, TxHash, U64};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

/// JSON-RPC "method not found".
const METHOD_NOT_FOUND: i64 = -32601;

pub struct RpcWallet {
    rpc: JsonRpcClient,
    expected_chain_id: u64,
    preferred_account: Option<Address>,
}

impl RpcWallet {
    pub fn new(
        url: &str,
        timeout: Duration,
        expected_chain_id: u64,
        preferred_account: Option<Address>,
    ) -> Self {
        Self {
            rpc: JsonRpcClient::new(url, timeout),
            expected_chain_id,
            preferred_account,
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>, WalletError> {
        match self
            .rpc
            .request_as::<Vec<Address>>("eth_requestAccounts", json!([]))
            .await
        {
            Ok(accounts) => Ok(accounts),
            // Plain nodes with unlocked accounts only know eth_accounts.
            Err(err) if err.rpc_code() == Some(METHOD_NOT_FOUND) => {
                debug!("eth_requestAccounts unsupported, falling back to eth_accounts");
                Ok(self
                    .rpc
                    .request_as::<Vec<Address>>("eth_accounts", json!([]))
                    .await?)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let chain_id: U64 = self.rpc.request_as("eth_chainId", json!([])).await?;
        Ok(chain_id.to::<u64>())
    }
}

fn select_account(
    accounts: &[Address],
    preferred: Option<Address>,
) -> Result<Address, WalletError> {
    match preferred {
        Some(wanted) => accounts
            .iter()
            .copied()
            .find(|account| *account == wanted)
            .ok_or_else(|| WalletError::AccountUnavailable(wanted.to_string())),
        None => accounts.first().copied().ok_or(WalletError::NoAccounts),
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn connect(&self) -> Result<WalletSession, WalletError> {
        let accounts = self.accounts().await?;
        let account = select_account(&accounts, self.preferred_account)?;
        let chain_id = self.chain_id().await?;
        if chain_id != self.expected_chain_id {
            return Err(WalletError::WrongChain {
                expected: self.expected_chain_id,
                actual: chain_id,
            });
        }
        info!(%account, chain_id, wallet = %self.rpc.url(), "wallet connected");
        Ok(WalletSession { account, chain_id })
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError> {
        Ok(self
            .rpc
            .request_as("eth_sendTransaction", json!([tx]))
            .await?)
    }
}
