//! Agent run flow: submit a query to the agent contract and follow the run.
//!
//! - `bindings`: the contract's Solidity surface, generated with `sol!`.
//! - `contract`: typed calls for the contract surface.
//! - `receipt`: run-id extraction from receipt logs.
//! - `poller`: the submit/confirm/poll loop.
//! - `transcript`: messages and the visible transcript.
//! - `events`: lifecycle events for UI consumers.

mod bindings;
mod contract;
mod events;
mod poller;
mod receipt;
mod transcript;

pub use bindings::{
    getMessageHistoryContentsCall, getMessageHistoryRolesCall, isRunFinishedCall, runAgentCall,
    AgentRunCreated,
};
pub use contract::AgentContract;
pub use events::{AgentRunEvent, NullSink, RunEventSink};
pub use poller::{new_messages, AgentRunPoller, PollSettings, RunOutcome};
pub use receipt::agent_run_id;
pub use transcript::{zip_history, Message, Transcript, ASSISTANT_ROLE};
