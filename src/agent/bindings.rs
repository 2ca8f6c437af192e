//! Solidity surface of the agent contract.

use alloy::sol;

sol! {
    /// Emitted by `runAgent` with the id of the new run.
    event AgentRunCreated(address indexed owner, uint256 indexed runId);

    function runAgent(string query, uint256 max_iterations) returns (uint256);
    function getMessageHistoryContents(uint256 agentId) view returns (string[]);
    function getMessageHistoryRoles(uint256 agentId) view returns (string[]);
    function isRunFinished(uint256 runId) view returns (bool);
}
