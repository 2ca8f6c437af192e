//! Unified error types for the agent run client.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// RpcError
// ---------------------------------------------------------------------------

/// Errors from the JSON-RPC transport layer.
#[derive(Debug)]
pub enum RpcError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx HTTP status from the endpoint.
    Status { code: u16, body: String },
    /// JSON-RPC error object returned by the node or wallet.
    Rpc { code: i64, message: String },
    /// Response body did not match the expected shape.
    InvalidResponse(String),
}

impl RpcError {
    /// JSON-RPC error code, when the endpoint returned an error object.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::Rpc { code, message } => write!(f, "rpc error {code}: {message}"),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for RpcError {}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// WalletError
// ---------------------------------------------------------------------------

/// Errors from the wallet provider.
#[derive(Debug)]
pub enum WalletError {
    Rpc(RpcError),
    /// The wallet did not expose any account.
    NoAccounts,
    /// The configured account is not among the wallet's accounts.
    AccountUnavailable(String),
    /// The wallet is connected to a different chain.
    WrongChain { expected: u64, actual: u64 },
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(e) => write!(f, "wallet rpc: {e}"),
            Self::NoAccounts => write!(f, "wallet exposed no accounts"),
            Self::AccountUnavailable(account) => {
                write!(f, "account {account} is not available in the wallet")
            }
            Self::WrongChain { expected, actual } => write!(
                f,
                "wallet is on chain {actual}, expected chain {expected}"
            ),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<RpcError> for WalletError {
    fn from(e: RpcError) -> Self {
        Self::Rpc(e)
    }
}

// ---------------------------------------------------------------------------
// RunError
// ---------------------------------------------------------------------------

/// Top-level error type for one agent run.
#[derive(Debug)]
pub enum RunError {
    Config(ConfigError),
    Rpc(RpcError),
    /// Contract return data did not decode as the declared return type.
    Abi(alloy::sol_types::Error),
    Wallet(WalletError),
    /// The runAgent transaction was mined with a failed status.
    Reverted { tx_hash: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Rpc(e) => write!(f, "rpc: {e}"),
            Self::Abi(e) => write!(f, "abi: {e}"),
            Self::Wallet(e) => write!(f, "wallet: {e}"),
            Self::Reverted { tx_hash } => write!(f, "transaction {tx_hash} reverted"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RpcError> for RunError {
    fn from(e: RpcError) -> Self {
        Self::Rpc(e)
    }
}

impl From<alloy::sol_types::Error> for RunError {
    fn from(e: alloy::sol_types::Error) -> Self {
        Self::Abi(e)
    }
}

impl From<WalletError> for RunError {
    fn from(e: WalletError) -> Self {
        Self::Wallet(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn rpc_error_exposes_code_only_for_rpc_objects() {
        let e = RpcError::Rpc {
            code: -32601,
            message: "method not found".into(),
        };
        assert_eq!(e.rpc_code(), Some(-32601));
        assert_eq!(e.to_string(), "rpc error -32601: method not found");
        assert_eq!(RpcError::InvalidResponse("x".into()).rpc_code(), None);
    }

    #[test]
    fn wallet_error_display_variants() {
        assert_eq!(
            WalletError::WrongChain {
                expected: 696969,
                actual: 1
            }
            .to_string(),
            "wallet is on chain 1, expected chain 696969"
        );
        assert_eq!(
            WalletError::NoAccounts.to_string(),
            "wallet exposed no accounts"
        );
    }

    #[test]
    fn run_error_wraps_layers() {
        let e = RunError::from(alloy::sol_types::Error::Overrun);
        assert!(e.to_string().starts_with("abi:"), "got: {e}");
        let e = RunError::from(WalletError::NoAccounts);
        assert!(e.to_string().starts_with("wallet:"), "got: {e}");
        assert_eq!(
            RunError::Reverted {
                tx_hash: "0xab".into()
            }
            .to_string(),
            "transaction 0xab reverted"
        );
    }
}
