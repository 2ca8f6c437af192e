//! Ethereum JSON-RPC access.
//!
//! - `client`: JSON-RPC 2.0 framing over `reqwest`.
//! - `types`: transaction, receipt, and log wire types.
//!
//! [`ChainClient`] is the read-side seam used by the agent poller; tests swap
//! in scripted fakes while production uses [`HttpChainClient`].

mod client;
mod types;

pub use client::JsonRpcClient;
pub use types::{CallRequest, Log, TransactionReceipt, TransactionRequest};

use crate::error::RpcError;
use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Read-only chain access needed to follow an agent run.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Execute a view call against the latest block and return raw return data.
    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, RpcError>;

    /// Fetch a receipt; `None` while the transaction is still pending.
    async fn transaction_receipt(
        &self,
        hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError>;
}

/// [`ChainClient`] backed by a node's HTTP JSON-RPC endpoint.
pub struct HttpChainClient {
    rpc: JsonRpcClient,
}

impl HttpChainClient {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            rpc: JsonRpcClient::new(url, timeout),
        }
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        let request = CallRequest::new(*to, data);
        let raw: Bytes = self
            .rpc
            .request_as("eth_call", json!([request, "latest"]))
            .await?;
        Ok(raw.to_vec())
    }

    async fn transaction_receipt(
        &self,
        hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        self.rpc
            .request_as("eth_getTransactionReceipt", json!([hash]))
            .await
    }
}
