//! Run lifecycle events.
//!
//! The poller reports progress through a [`RunEventSink`] so the terminal UI
//! and tests can observe a run without coupling to it.

use alloy_primitives::TxHash;

/// Progress events emitted while an agent run is submitted and polled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentRunEvent {
    Submitted {
        tx_hash: TxHash,
    },
    Confirmed {
        tx_hash: TxHash,
        block_number: Option<u64>,
    },
    RunCreated {
        run_id: u64,
    },
    /// The receipt carried no `AgentRunCreated` event; polling is skipped.
    NoRunId {
        tx_hash: TxHash,
    },
    /// A message not seen before, of any role.
    Message {
        index: usize,
        role: String,
        content: String,
    },
    /// Lines appended to the transcript from one assistant message.
    TranscriptLines {
        lines: Vec<String>,
    },
    Polled {
        iteration: u32,
        total_messages: usize,
    },
    Finished {
        run_id: u64,
        polls: u32,
    },
}

/// Consumer of [`AgentRunEvent`]s.
pub trait RunEventSink: Send {
    fn emit(&mut self, event: AgentRunEvent);
}

impl RunEventSink for Vec<AgentRunEvent> {
    fn emit(&mut self, event: AgentRunEvent) {
        self.push(event);
    }
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl RunEventSink for NullSink {
    fn emit(&mut self, _event: AgentRunEvent) {}
}
