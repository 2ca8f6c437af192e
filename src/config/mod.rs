//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags, applied by the caller through [`ConfigOverrides`].
//! 2. Environment variables (`FILPLORER_RPC_URL`, `FILPLORER_WALLET_URL`,
//!    `FILPLORER_CONTRACT`, `FILPLORER_ACCOUNT`, `FILPLORER_CHAIN_ID`,
//!    `FILPLORER_POLL_INTERVAL_MS`).
//! 3. TOML file specified via --config CLI flag
//! 4. ./filplorer.toml in the current directory
//! 5. $XDG_CONFIG_HOME/filplorer/filplorer.toml (or
//!    ~/.config/filplorer/filplorer.toml)
//! 6. Built-in defaults (Galadriel devnet)

use crate::error::ConfigError;
use alloy_primitives::Address;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod init;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, initialize_config_at_path,
    initialize_default_global_config,
};
pub use types::{
    AgentConfig, Config, DisplayConfig, GlobalConfigInitResult, NetworkConfig, WalletConfig,
};

use env::apply_runtime_env_overrides;

/// Where the loaded config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment, then validate it.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    let (config, _) = load_config_with_source(path_override)?;
    validate(&config)?;
    Ok(config)
}

/// Load configuration and report which file (if any) it came from.
///
/// The result is not validated yet: CLI values may still replace bad file or
/// env values, so callers validate through [`apply_overrides`].
pub fn load_config_with_source(
    path_override: Option<&str>,
) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    Ok((config, source))
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new("filplorer.toml")) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join("filplorer").join("filplorer.toml");
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

// ---------------------------------------------------------------------------
// CLI overrides and validation
// ---------------------------------------------------------------------------

/// Values supplied on the command line; `None` keeps the loaded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub rpc_url: Option<String>,
    pub wallet_url: Option<String>,
    pub contract: Option<String>,
    pub account: Option<String>,
    pub max_iterations: Option<u64>,
    pub no_color: bool,
}

/// Apply CLI overrides on top of a loaded config and re-validate.
pub fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
    if let Some(url) = &overrides.rpc_url {
        config.network.rpc_url = url.clone();
    }
    if let Some(url) = &overrides.wallet_url {
        config.wallet.url = url.clone();
    }
    if let Some(contract) = &overrides.contract {
        config.agent.contract = contract.clone();
    }
    if let Some(account) = &overrides.account {
        config.wallet.account = Some(account.clone());
    }
    if let Some(max_iterations) = overrides.max_iterations {
        config.agent.max_iterations = max_iterations;
    }
    if overrides.no_color {
        config.display.color = false;
    }
    validate(config)
}

/// Reject configs the run flow cannot work with.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.network.rpc_url.trim().is_empty() {
        return Err(ConfigError::Invalid("network.rpc_url is empty".into()));
    }
    if config.wallet.url.trim().is_empty() {
        return Err(ConfigError::Invalid("wallet.url is empty".into()));
    }
    contract_address(config)?;
    wallet_account(config)?;
    if config.agent.poll_interval_ms == 0 || config.agent.receipt_poll_interval_ms == 0 {
        return Err(ConfigError::Invalid(
            "agent poll intervals must be at least 1 ms".into(),
        ));
    }
    if config.network.request_timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "network.request_timeout_secs must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Parsed `agent.contract`.
pub fn contract_address(config: &Config) -> Result<Address, ConfigError> {
    config.agent.contract.parse().map_err(|e| {
        ConfigError::Invalid(format!(
            "agent.contract `{}` is not an address: {e}",
            config.agent.contract
        ))
    })
}

/// Parsed `wallet.account`, if set.
pub fn wallet_account(config: &Config) -> Result<Option<Address>, ConfigError> {
    config
        .wallet
        .account
        .as_deref()
        .map(|raw| {
            raw.parse().map_err(|e| {
                ConfigError::Invalid(format!("wallet.account `{raw}` is not an address: {e}"))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn files(entries: &[(&str, &str)]) -> impl Fn(&Path) -> Result<String, std::io::Error> {
        let map: HashMap<PathBuf, String> = entries
            .iter()
            .map(|(p, text)| (PathBuf::from(p), text.to_string()))
            .collect();
        move |path: &Path| {
            map.get(path).cloned().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
            })
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn root() -> Option<PathBuf> {
        Some(PathBuf::from("/home/u/.config"))
    }

    #[test]
    fn falls_back_to_defaults_without_files() {
        let (config, source) = load_config_from_sources(None, files(&[]), no_env, root).unwrap();
        assert_eq!(source, ConfigSource::BuiltInDefaults);
        assert_eq!(config, Config::default());
        assert_eq!(config.network.chain_id, 696969);
        assert_eq!(config.agent.max_iterations, 5);
        assert_eq!(config.agent.poll_interval_ms, 2000);
    }

    #[test]
    fn local_file_wins_over_global() {
        let (config, source) = load_config_from_sources(
            None,
            files(&[
                ("filplorer.toml", "[agent]\nmax_iterations = 8\n"),
                (
                    "/home/u/.config/filplorer/filplorer.toml",
                    "[agent]\nmax_iterations = 3\n",
                ),
            ]),
            no_env,
            root,
        )
        .unwrap();
        assert_eq!(source, ConfigSource::Local);
        assert_eq!(config.agent.max_iterations, 8);
        // Unset keys keep their defaults.
        assert_eq!(config.agent.poll_interval_ms, 2000);
    }

    #[test]
    fn global_file_is_used_when_no_local() {
        let (config, source) = load_config_from_sources(
            None,
            files(&[(
                "/home/u/.config/filplorer/filplorer.toml",
                "[display]\ncolor = false\n",
            )]),
            no_env,
            root,
        )
        .unwrap();
        assert!(matches!(source, ConfigSource::Global(_)));
        assert!(!config.display.color);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(Some("custom.toml"), files(&[]), no_env, root)
            .unwrap_err();
        assert!(err.to_string().starts_with("io:"), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let (config, _) = load_config_from_sources(
            None,
            files(&[("filplorer.toml", "[network]\nrpc_url = \"http://file\"\n")]),
            |name: &str| (name == "FILPLORER_RPC_URL").then(|| "http://env".to_string()),
            root,
        )
        .unwrap();
        assert_eq!(config.network.rpc_url, "http://env");
    }

    #[test]
    fn invalid_contract_is_rejected_once_overrides_apply() {
        let (mut config, _) = load_config_from_sources(
            None,
            files(&[("filplorer.toml", "[agent]\ncontract = \"0x1234\"\n")]),
            no_env,
            root,
        )
        .unwrap();
        let err = apply_overrides(&mut config, &ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("agent.contract"), "got: {err}");
    }

    #[test]
    fn cli_contract_replaces_bad_env_contract() {
        let (mut config, _) = load_config_from_sources(
            None,
            files(&[]),
            |name: &str| (name == "FILPLORER_CONTRACT").then(|| "garbage".to_string()),
            root,
        )
        .unwrap();
        assert_eq!(config.agent.contract, "garbage");

        apply_overrides(
            &mut config,
            &ConfigOverrides {
                contract: Some("0x979f1Bb83FfA981533cd466082B227e5433161E3".into()),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(
            contract_address(&config).unwrap(),
            "0x979f1bb83ffa981533cd466082b227e5433161e3".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let mut config = Config::default();
        config.agent.poll_interval_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut config = Config::default();
        apply_overrides(
            &mut config,
            &ConfigOverrides {
                rpc_url: Some("http://127.0.0.1:8545".into()),
                max_iterations: Some(2),
                account: Some("0x0000000000000000000000000000000000000002".into()),
                no_color: true,
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.agent.max_iterations, 2);
        assert!(!config.display.color);
        assert_eq!(
            wallet_account(&config).unwrap(),
            Some(Address::with_last_byte(2))
        );
    }

    #[test]
    fn explorer_url_joins_without_double_slash() {
        let mut config = Config::default();
        config.network.explorer_url = "https://explorer.example/".into();
        assert_eq!(
            config.explorer_tx_url("0xabc"),
            "https://explorer.example/tx/0xabc"
        );
        assert_eq!(
            config.explorer_address_url("0xdef"),
            "https://explorer.example/address/0xdef"
        );
    }
}
