//! Per-network resolution of the addresses FundMe is constructed with.
//!
//! Development networks use whatever the registry deployed most recently;
//! public networks read the chain table of the configuration. A public network
//! without an entry is a configuration error, never a fallback to a default.

use tracing::debug;

use crate::config::{ChainConfig, DeployConfig};
use crate::error::{ConfigError, DeployError};
use crate::network::Network;
use crate::registry::{ChainAddress, DeploymentRegistry};
use crate::scripts::{MOCK_PRICE_FEED, NATIVE_TOKEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dependency {
    PriceFeed,
    NativeToken,
}

impl Dependency {
    /// Deployment standing in for the dependency on development networks
    fn deployment(self) -> &'static str {
        match self {
            Dependency::PriceFeed => MOCK_PRICE_FEED,
            Dependency::NativeToken => NATIVE_TOKEN,
        }
    }

    fn field(self) -> &'static str {
        match self {
            Dependency::PriceFeed => "price_feed",
            Dependency::NativeToken => "native_token",
        }
    }

    fn configured(self, chain: &ChainConfig) -> Option<&ChainAddress> {
        match self {
            Dependency::PriceFeed => chain.price_feed.as_ref(),
            Dependency::NativeToken => chain.native_token.as_ref(),
        }
    }
}

pub fn resolve_price_feed_address<R: DeploymentRegistry + ?Sized>(
    network: &Network,
    registry: &R,
    config: &DeployConfig,
) -> Result<ChainAddress, DeployError> {
    resolve_address(Dependency::PriceFeed, network, registry, config)
}

pub fn resolve_native_token_address<R: DeploymentRegistry + ?Sized>(
    network: &Network,
    registry: &R,
    config: &DeployConfig,
) -> Result<ChainAddress, DeployError> {
    resolve_address(Dependency::NativeToken, network, registry, config)
}

fn resolve_address<R: DeploymentRegistry + ?Sized>(
    dependency: Dependency,
    network: &Network,
    registry: &R,
    config: &DeployConfig,
) -> Result<ChainAddress, DeployError> {
    if network.is_development() {
        let record = registry.get(dependency.deployment())?;
        debug!(
            network = %network.name,
            deployment = dependency.deployment(),
            address = %record.address,
            "using local deployment"
        );
        return Ok(record.address);
    }

    let chain = config
        .chain(&network.chain_id)
        .ok_or_else(|| ConfigError::MissingChain {
            network: network.name.clone(),
            chain_id: network.chain_id.to_string(),
        })?;

    let address = dependency
        .configured(chain)
        .cloned()
        .ok_or_else(|| ConfigError::MissingField {
            chain_id: network.chain_id.to_string(),
            field: dependency.field(),
        })?;

    debug!(
        network = %network.name,
        chain = %chain.name,
        field = dependency.field(),
        %address,
        "using configured address"
    );
    Ok(address)
}
