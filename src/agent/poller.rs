//! Submit one agent run and follow its message history to completion.

use super::contract::AgentContract;
use super::events::{AgentRunEvent, RunEventSink};
use super::receipt::agent_run_id;
use super::transcript::{Message, Transcript};
use crate::error::RunError;
use crate::wallet::WalletSession;
use alloy_primitives::TxHash;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Timing and call parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    /// Fixed delay between history polls.
    pub poll_interval: Duration,
    /// Delay between receipt lookups while the transaction is pending.
    pub receipt_poll_interval: Duration,
    /// Iteration cap passed to `runAgent`.
    pub max_iterations: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            receipt_poll_interval: Duration::from_secs(1),
            max_iterations: 5,
        }
    }
}

/// Result of one [`AgentRunPoller::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The receipt had no run id; nothing was polled.
    NoRunId { tx_hash: TxHash },
    Completed {
        tx_hash: TxHash,
        run_id: u64,
        /// History polls performed, including the final one after finish.
        polls: u32,
        /// Messages seen across the whole run, any role.
        messages: usize,
    },
}

impl RunOutcome {
    pub fn tx_hash(&self) -> &TxHash {
        match self {
            Self::NoRunId { tx_hash } | Self::Completed { tx_hash, .. } => tx_hash,
        }
    }
}

/// Messages at index `seen` and beyond.
pub fn new_messages(history: Vec<Message>, seen: usize) -> Vec<Message> {
    history.into_iter().skip(seen).collect()
}

pub struct AgentRunPoller {
    contract: AgentContract,
    settings: PollSettings,
}

impl AgentRunPoller {
    pub fn new(contract: AgentContract, settings: PollSettings) -> Self {
        Self { contract, settings }
    }

    pub fn contract(&self) -> &AgentContract {
        &self.contract
    }

    pub fn settings(&self) -> PollSettings {
        self.settings
    }

    /// Submit `query`, wait for the receipt, and poll until the run finishes.
    ///
    /// The transcript is cleared first and then receives assistant lines in
    /// order. Polling stops one poll after `isRunFinished` first reports true.
    /// Errors during polling are returned as-is; nothing is retried.
    pub async fn run(
        &self,
        session: &WalletSession,
        query: &str,
        transcript: &mut Transcript,
        sink: &mut dyn RunEventSink,
    ) -> Result<RunOutcome, RunError> {
        transcript.clear();

        let tx_hash = self
            .contract
            .run_agent(session, query, self.settings.max_iterations)
            .await?;
        sink.emit(AgentRunEvent::Submitted { tx_hash });

        let receipt = self
            .contract
            .wait_for_receipt(&tx_hash, self.settings.receipt_poll_interval)
            .await?;
        info!(tx = %receipt.transaction_hash, "task sent");
        info!(query, "agent started");
        sink.emit(AgentRunEvent::Confirmed {
            tx_hash,
            block_number: receipt.block_number(),
        });

        let Some(run_id) = agent_run_id(&receipt) else {
            info!(tx = %tx_hash, "no agent run id in receipt");
            sink.emit(AgentRunEvent::NoRunId { tx_hash });
            return Ok(RunOutcome::NoRunId { tx_hash });
        };
        info!(run_id, "created agent run");
        sink.emit(AgentRunEvent::RunCreated { run_id });

        let (polls, messages) = self.poll_until_finished(run_id, transcript, sink).await?;
        info!(run_id, polls, "agent run finished");
        sink.emit(AgentRunEvent::Finished { run_id, polls });
        Ok(RunOutcome::Completed {
            tx_hash,
            run_id,
            polls,
            messages,
        })
    }

    async fn poll_until_finished(
        &self,
        run_id: u64,
        transcript: &mut Transcript,
        sink: &mut dyn RunEventSink,
    ) -> Result<(u32, usize), RunError> {
        let mut seen = 0usize;
        let mut polls = 0u32;
        let mut exit_next_poll = false;

        loop {
            let history = self.contract.message_history(run_id).await?;
            let total = history.len();
            polls = polls.saturating_add(1);

            for message in new_messages(history, seen) {
                let index = seen;
                seen += 1;
                let appended = message
                    .is_assistant()
                    .then(|| transcript.append_content(&message.content).to_vec());
                sink.emit(AgentRunEvent::Message {
                    index,
                    role: message.role,
                    content: message.content,
                });
                if let Some(lines) = appended {
                    sink.emit(AgentRunEvent::TranscriptLines { lines });
                }
            }
            debug!(run_id, poll = polls, total, "polled message history");
            sink.emit(AgentRunEvent::Polled {
                iteration: polls,
                total_messages: total,
            });

            sleep(self.settings.poll_interval).await;
            if exit_next_poll {
                return Ok((polls, seen));
            }
            if self.contract.is_run_finished(run_id).await? {
                exit_next_poll = true;
            }
        }
    }
}
