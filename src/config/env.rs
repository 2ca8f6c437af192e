//! Environment overrides.
//!
//! `FILPLORER_*` variables take precedence over any config file.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(env_lookup, "FILPLORER_RPC_URL") {
        config.network.rpc_url = url;
    }
    if let Some(url) = non_empty(env_lookup, "FILPLORER_WALLET_URL") {
        config.wallet.url = url;
    }
    if let Some(contract) = non_empty(env_lookup, "FILPLORER_CONTRACT") {
        config.agent.contract = contract;
    }
    if let Some(account) = non_empty(env_lookup, "FILPLORER_ACCOUNT") {
        config.wallet.account = Some(account);
    }
    if let Some(chain_id) = non_empty(env_lookup, "FILPLORER_CHAIN_ID") {
        config.network.chain_id = parse_u64("FILPLORER_CHAIN_ID", &chain_id)?;
    }
    if let Some(interval) = non_empty(env_lookup, "FILPLORER_POLL_INTERVAL_MS") {
        config.agent.poll_interval_ms = parse_u64("FILPLORER_POLL_INTERVAL_MS", &interval)?;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64(name: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| {
        ConfigError::Invalid(format!(
            "invalid {name} value `{raw}`: expected a non-negative integer"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn overrides_apply_and_blank_values_are_ignored() {
        let mut config = Config::default();
        apply_runtime_env_overrides(
            &mut config,
            &env(&[
                ("FILPLORER_RPC_URL", "http://localhost:8545"),
                ("FILPLORER_WALLET_URL", "  "),
                ("FILPLORER_CHAIN_ID", "31337"),
                ("FILPLORER_ACCOUNT", "0x0000000000000000000000000000000000000001"),
            ]),
        )
        .unwrap();
        assert_eq!(config.network.rpc_url, "http://localhost:8545");
        assert_eq!(config.wallet.url, Config::default().wallet.url);
        assert_eq!(config.network.chain_id, 31337);
        assert!(config.wallet.account.is_some());
    }

    #[test]
    fn non_numeric_chain_id_is_rejected() {
        let mut config = Config::default();
        let err = apply_runtime_env_overrides(&mut config, &env(&[("FILPLORER_CHAIN_ID", "devnet")]))
            .unwrap_err();
        assert!(err.to_string().contains("FILPLORER_CHAIN_ID"), "got: {err}");
    }
}
