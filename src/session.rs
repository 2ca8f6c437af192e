//! Query session state shared by one-shot and interactive modes.
//!
//! A session owns the transcript and remembers the wallet connection once it
//! has been made. `submit` borrows the session mutably, so queries on one
//! session always run one after another.

use crate::agent::{AgentContract, AgentRunPoller, RunEventSink, RunOutcome, Transcript};
use crate::config::{contract_address, wallet_account, Config};
use crate::error::{ConfigError, RunError};
use crate::rpc::HttpChainClient;
use crate::wallet::{RpcWallet, WalletSession};
use std::sync::Arc;
use tracing::debug;

pub struct QuerySession {
    poller: AgentRunPoller,
    wallet: Option<WalletSession>,
    transcript: Transcript,
}

impl QuerySession {
    pub fn new(poller: AgentRunPoller) -> Self {
        Self {
            poller,
            wallet: None,
            transcript: Transcript::new(),
        }
    }

    /// Wire the HTTP chain client, the JSON-RPC wallet and the poller from
    /// `config`. Nothing is contacted until the first query.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let timeout = config.request_timeout();
        let chain = Arc::new(HttpChainClient::new(&config.network.rpc_url, timeout));
        let wallet = Arc::new(RpcWallet::new(
            &config.wallet.url,
            timeout,
            config.network.chain_id,
            wallet_account(config)?,
        ));
        let contract = AgentContract::new(contract_address(config)?, chain, wallet);
        Ok(Self::new(AgentRunPoller::new(contract, config.poll_settings())))
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The wallet connection, if one has been made.
    pub fn wallet_session(&self) -> Option<WalletSession> {
        self.wallet
    }

    pub fn poller(&self) -> &AgentRunPoller {
        &self.poller
    }

    /// Connect to the wallet on first use and reuse the session afterwards.
    pub async fn connect(&mut self) -> Result<WalletSession, RunError> {
        if let Some(session) = self.wallet {
            return Ok(session);
        }
        let session = self.poller.contract().wallet().connect().await?;
        debug!(account = %session.account, chain_id = session.chain_id, "wallet session cached");
        self.wallet = Some(session);
        Ok(session)
    }

    /// Run one query end to end: connect if needed, submit, and poll.
    pub async fn submit(
        &mut self,
        query: &str,
        sink: &mut dyn RunEventSink,
    ) -> Result<RunOutcome, RunError> {
        let session = self.connect().await?;
        self.poller
            .run(&session, query, &mut self.transcript, sink)
            .await
    }
}
