//! JSON-RPC 2.0 over HTTP.

use crate::error::RpcError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Build an HTTP client with timeout applied.
fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// Client for one JSON-RPC endpoint (a chain node or a wallet signer).
pub struct JsonRpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            http: build_http_client(timeout),
            url: url.trim().to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one request and return its raw `result` value.
    ///
    /// A missing `result` with no `error` is returned as `Value::Null`.
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        debug!(url = %self.url, method, id, "rpc request");

        let response = self.http.post(&self.url).json(&body).send().await?;
        if !response.status().is_success() {
            let code = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status { code, body });
        }

        let text = response.text().await?;
        let parsed: RpcResponse = serde_json::from_str(&text)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))?;
        if let Some(err) = parsed.error {
            debug!(method, id, code = err.code, "rpc error response");
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        Ok(parsed.result.unwrap_or(Value::Null))
    }

    /// Send one request and deserialize the result into `T`.
    pub async fn request_as<T>(&self, method: &str, params: Value) -> Result<T, RpcError>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.request(method, params).await?;
        serde_json::from_value(value)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))
    }
}
