//! Bootstrap configuration of a pool master.

use {
    crate::domain::{Address, Fee, PoolType},
    anyhow::{Context, Result},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub owner: Address,
    pub vault: Address,
    pub fee_recipient: Address,

    /// Factories allowed to register pools from the start.
    #[serde(default)]
    pub whitelisted_factories: Vec<Address>,

    #[serde(default)]
    pub pool_types: Vec<PoolTypeConfig>,

    #[serde(default)]
    pub custom_swap_fees: Vec<CustomSwapFeeConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PoolTypeConfig {
    pub pool_type: PoolType,
    #[serde(default)]
    pub default_swap_fee: Fee,
    #[serde(default)]
    pub protocol_fee: Fee,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CustomSwapFeeConfig {
    pub pool: Address,
    /// Raw override: `0` clears it, `0xffffff` means no fee, anything else is
    /// the fee itself.
    pub fee: u32,
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        toml::from_str(data).context("invalid pool master configuration")
    }
}

/// Reads and parses the TOML configuration at `path`.
pub async fn load(path: &Path) -> Result<Config> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {path:?}"))?;
    Config::from_toml(&data).with_context(|| format!("failed to parse {path:?}"))
}
