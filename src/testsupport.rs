//! Shared test fixtures: temp dirs, a scripted JSON-RPC server, and in-memory
//! chain/wallet fakes for the poller.

use crate::agent::AgentRunCreated;
use crate::error::{RpcError, WalletError};
use crate::rpc::{ChainClient, Log, TransactionReceipt, TransactionRequest};
use crate::wallet::{WalletProvider, WalletSession};
use alloy::sol_types::{SolEvent, SolValue};
use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("filplorer-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC server
// ---------------------------------------------------------------------------

/// Serve one canned JSON-RPC response per connection, in order.
///
/// Returns the endpoint URL and the list of request bodies received so far.
pub async fn serve_json_rpc(responses: Vec<Value>) -> (String, Arc<Mutex<Vec<Value>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_by_server = Arc::clone(&seen);

    tokio::spawn(async move {
        for response in responses {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let request = read_http_body(&mut stream).await;
            if let Ok(body) = serde_json::from_slice::<Value>(&request) {
                seen_by_server.lock().await.push(body);
            }
            let payload = response.to_string();
            let reply = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                payload.len(),
                payload
            );
            let _ = stream.write_all(reply.as_bytes()).await;
        }
    });

    (format!("http://{addr}"), seen)
}

async fn read_http_body(stream: &mut tokio::net::TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return Vec::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(header_end) = find_subslice(&buf, b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let body_start = header_end + 4;
        while buf.len() < body_start + content_length {
            let n = stream.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let end = buf.len().min(body_start + content_length);
        return buf[body_start..end].to_vec();
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

// ---------------------------------------------------------------------------
// ABI fixtures
// ---------------------------------------------------------------------------

/// `string[]` return data as a node would encode it.
pub fn strings_return(items: &[&str]) -> Vec<u8> {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .abi_encode()
}

/// `bool` return data.
pub fn bool_return(flag: bool) -> Vec<u8> {
    flag.abi_encode()
}

/// Receipt log for any event emitted by `address`.
pub fn log_from_event<E: SolEvent>(address: Address, event: &E) -> Log {
    let (topics, data) = event.encode_log_data().split();
    Log {
        address,
        topics,
        data,
    }
}

/// `AgentRunCreated` log as the agent contract emits it.
pub fn run_created_log(run_id: u64) -> Log {
    log_from_event(
        Address::repeat_byte(0xcc),
        &AgentRunCreated {
            owner: Address::repeat_byte(0xaa),
            runId: U256::from(run_id),
        },
    )
}

// ---------------------------------------------------------------------------
// In-memory chain and wallet
// ---------------------------------------------------------------------------

/// Scripted [`ChainClient`]: calls are answered by selector from FIFO queues.
///
/// When a queue has a single entry left it is repeated, so tests only script
/// the transitions they care about.
#[derive(Default)]
pub struct ScriptedChain {
    receipts: std::sync::Mutex<VecDeque<Option<TransactionReceipt>>>,
    calls: std::sync::Mutex<Vec<([u8; 4], VecDeque<Result<Vec<u8>, String>>)>>,
    call_log: std::sync::Mutex<Vec<Vec<u8>>>,
}

impl ScriptedChain {
    pub fn push_receipt(&self, receipt: Option<TransactionReceipt>) {
        self.receipts.lock().unwrap().push_back(receipt);
    }

    /// Queue a successful return value for calls starting with `selector`.
    pub fn push_call(&self, selector: [u8; 4], data: Vec<u8>) {
        self.push_call_result(selector, Ok(data));
    }

    /// Queue a failure (surfaced as an RPC error) for calls with `selector`.
    pub fn push_call_error(&self, selector: [u8; 4], message: &str) {
        self.push_call_result(selector, Err(message.to_string()));
    }

    fn push_call_result(&self, selector: [u8; 4], result: Result<Vec<u8>, String>) {
        let mut calls = self.calls.lock().unwrap();
        if let Some((_, queue)) = calls.iter_mut().find(|(sel, _)| *sel == selector) {
            queue.push_back(result);
        } else {
            calls.push((selector, VecDeque::from([result])));
        }
    }

    /// Every call payload received, in order.
    pub fn call_log(&self) -> Vec<Vec<u8>> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of calls whose payload starts with `selector`.
    pub fn calls_to(&self, selector: [u8; 4]) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|data| data.starts_with(&selector))
            .count()
    }
}

#[async_trait]
impl ChainClient for ScriptedChain {
    async fn call(&self, _to: &Address, data: &[u8]) -> Result<Vec<u8>, RpcError> {
        self.call_log.lock().unwrap().push(data.to_vec());
        let mut calls = self.calls.lock().unwrap();
        let queue = calls
            .iter_mut()
            .find(|(sel, _)| data.starts_with(sel))
            .map(|(_, queue)| queue)
            .ok_or_else(|| RpcError::InvalidResponse("unscripted call".into()))?;
        let next = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        match next {
            Some(Ok(bytes)) => Ok(bytes),
            Some(Err(message)) => Err(RpcError::Rpc {
                code: -32000,
                message,
            }),
            None => Err(RpcError::InvalidResponse("empty script".into())),
        }
    }

    async fn transaction_receipt(
        &self,
        _hash: &TxHash,
    ) -> Result<Option<TransactionReceipt>, RpcError> {
        let mut receipts = self.receipts.lock().unwrap();
        if receipts.len() > 1 {
            Ok(receipts.pop_front().flatten())
        } else {
            Ok(receipts.front().cloned().flatten())
        }
    }
}

/// Wallet fake that records submitted transactions.
pub struct StubWallet {
    pub session: WalletSession,
    pub tx_hash: TxHash,
    pub sent: std::sync::Mutex<Vec<TransactionRequest>>,
    pub connects: AtomicU64,
}

impl StubWallet {
    pub fn new(account: Address, chain_id: u64, tx_hash: TxHash) -> Self {
        Self {
            session: WalletSession { account, chain_id },
            tx_hash,
            sent: std::sync::Mutex::new(Vec::new()),
            connects: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl WalletProvider for StubWallet {
    async fn connect(&self) -> Result<WalletSession, WalletError> {
        self.connects.fetch_add(1, Ordering::Relaxed);
        Ok(self.session)
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, WalletError> {
        self.sent.lock().unwrap().push(tx.clone());
        Ok(self.tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn strings_return_fixture_decodes_as_history() {
        use crate::agent::getMessageHistoryRolesCall;
        use alloy::sol_types::SolCall;

        let data = strings_return(&["a", "bc"]);
        assert_eq!(
            getMessageHistoryRolesCall::abi_decode_returns(&data).unwrap(),
            vec!["a", "bc"]
        );
    }

    #[tokio::test]
    async fn scripted_chain_repeats_last_entry() {
        let chain = ScriptedChain::default();
        chain.push_call([1, 2, 3, 4], vec![1]);
        chain.push_call([1, 2, 3, 4], vec![2]);
        let to = Address::ZERO;
        assert_eq!(chain.call(&to, &[1, 2, 3, 4]).await.unwrap(), vec![1]);
        assert_eq!(chain.call(&to, &[1, 2, 3, 4]).await.unwrap(), vec![2]);
        assert_eq!(chain.call(&to, &[1, 2, 3, 4]).await.unwrap(), vec![2]);
        assert_eq!(chain.calls_to([1, 2, 3, 4]), 3);
        assert!(chain.call(&to, &[9, 9, 9, 9]).await.is_err());
    }
}
