//! Network configuration.
//!
//! The configuration names every known network, says which of them are
//! development networks and holds, per chain id, the addresses deploy scripts
//! use on public networks. A default copy is embedded from `networks.toml`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crowdfund::constants::ONE_NATIVE;
use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::network::{ChainId, Network, NetworkKind};
use crate::registry::ChainAddress;

const EMBEDDED: &str = include_str!("../networks.toml");

/// Environment variable holding the block-explorer verification credential.
pub const API_KEY_ENV: &str = "EXPLORER_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
    pub default_network: String,
    pub development_chains: Vec<String>,
    #[serde(default)]
    pub sandbox: SandboxSettings,
    pub networks: BTreeMap<String, NetworkEntry>,
    #[serde(default)]
    pub chains: BTreeMap<ChainId, ChainConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkEntry {
    pub chain_id: ChainId,
    pub block_confirmations: Option<u32>,
}

/// Addresses a public chain provides to the deploy scripts.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    pub name: String,
    pub price_feed: Option<ChainAddress>,
    pub native_token: Option<ChainAddress>,
}

/// Named accounts the sandbox creates and funds at startup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SandboxSettings {
    pub accounts: usize,
    /// In stroops
    pub starting_balance: i64,
}

impl Default for SandboxSettings {
    fn default() -> Self {
        Self {
            accounts: 10,
            starting_balance: 10_000 * ONE_NATIVE as i64,
        }
    }
}

impl DeployConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading network configuration");
        Self::from_toml(&source)
    }

    /// The configuration shipped with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED)
    }

    pub fn is_development(&self, network: &str) -> bool {
        self.development_chains.iter().any(|name| name == network)
    }

    pub fn network(&self, name: &str) -> Result<Network, ConfigError> {
        let entry = self
            .networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))?;

        let kind = if self.is_development(name) {
            NetworkKind::Development
        } else {
            NetworkKind::Public
        };

        Ok(Network {
            name: name.to_string(),
            chain_id: entry.chain_id.clone(),
            block_confirmations: entry.block_confirmations,
            kind,
        })
    }

    pub fn chain(&self, chain_id: &ChainId) -> Option<&ChainConfig> {
        self.chains.get(chain_id)
    }
}

/// Verification credential. Only its presence matters to the deploy scripts.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Reads `EXPLORER_API_KEY`; unset and empty both mean no credential.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
