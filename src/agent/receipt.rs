//! Run-id extraction from `runAgent` receipts.

use super::bindings::AgentRunCreated;
use crate::rpc::TransactionReceipt;
use alloy::sol_types::SolEvent;
use tracing::{debug, warn};

/// Scan every log for `AgentRunCreated` and return its run id.
///
/// Logs from other events are skipped. Logs that match the event but fail to
/// decode, or carry a run id wider than 64 bits, are logged and skipped. If
/// several logs match, the last one wins.
pub fn agent_run_id(receipt: &TransactionReceipt) -> Option<u64> {
    let mut run_id = None;
    for log in &receipt.logs {
        if log.topics.first() != Some(&AgentRunCreated::SIGNATURE_HASH) {
            debug!(address = %log.address, "skipping unrelated log");
            continue;
        }
        let decoded = match AgentRunCreated::decode_log(&log.to_primitive()) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(address = %log.address, error = %err, "could not parse log");
                continue;
            }
        };
        match u64::try_from(decoded.data.runId) {
            Ok(id) => run_id = Some(id),
            Err(err) => warn!(address = %log.address, error = %err, "run id out of range"),
        }
    }
    run_id
}
