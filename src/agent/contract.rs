//! Typed facade over the on-chain agent contract.

use super::bindings::{
    getMessageHistoryContentsCall, getMessageHistoryRolesCall, isRunFinishedCall, runAgentCall,
};
use super::transcript::{zip_history, Message};
use crate::error::RunError;
use crate::rpc::{ChainClient, TransactionReceipt, TransactionRequest};
use crate::wallet::{WalletProvider, WalletSession};
use alloy::sol_types::SolCall;
use alloy_primitives::{Address, TxHash, U256, U64};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Agent contract at a fixed address, reached through a wallet for writes and
/// a chain client for reads.
#[derive(Clone)]
pub struct AgentContract {
    address: Address,
    chain: Arc<dyn ChainClient>,
    wallet: Arc<dyn WalletProvider>,
}

impl AgentContract {
    pub fn new(
        address: Address,
        chain: Arc<dyn ChainClient>,
        wallet: Arc<dyn WalletProvider>,
    ) -> Self {
        Self {
            address,
            chain,
            wallet,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn wallet(&self) -> &Arc<dyn WalletProvider> {
        &self.wallet
    }

    /// Submit `runAgent(query, max_iterations)` from the connected account.
    pub async fn run_agent(
        &self,
        session: &WalletSession,
        query: &str,
        max_iterations: u64,
    ) -> Result<TxHash, RunError> {
        let call = runAgentCall {
            query: query.to_string(),
            max_iterations: U256::from(max_iterations),
        };
        let tx = TransactionRequest {
            from: session.account,
            to: self.address,
            data: call.abi_encode().into(),
            chain_id: Some(U64::from(session.chain_id)),
        };
        Ok(self.wallet.send_transaction(&tx).await?)
    }

    /// Wait until the transaction is mined (one confirmation).
    ///
    /// There is no timeout; a reverted transaction is an error.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: &TxHash,
        interval: Duration,
    ) -> Result<TransactionReceipt, RunError> {
        loop {
            if let Some(receipt) = self.chain.transaction_receipt(tx_hash).await? {
                if !receipt.succeeded() {
                    return Err(RunError::Reverted {
                        tx_hash: tx_hash.to_string(),
                    });
                }
                return Ok(receipt);
            }
            debug!(tx = %tx_hash, "receipt pending");
            sleep(interval).await;
        }
    }

    /// Full message history for a run, contents and roles paired by index.
    pub async fn message_history(&self, run_id: u64) -> Result<Vec<Message>, RunError> {
        let agent_id = U256::from(run_id);
        let contents = self
            .view(getMessageHistoryContentsCall { agentId: agent_id })
            .await?;
        let roles = self
            .view(getMessageHistoryRolesCall { agentId: agent_id })
            .await?;
        Ok(zip_history(contents, roles))
    }

    pub async fn is_run_finished(&self, run_id: u64) -> Result<bool, RunError> {
        self.view(isRunFinishedCall {
            runId: U256::from(run_id),
        })
        .await
    }

    async fn view<C: SolCall>(&self, call: C) -> Result<C::Return, RunError> {
        let out = self.chain.call(&self.address, &call.abi_encode()).await?;
        Ok(C::abi_decode_returns(&out)?)
    }
}
