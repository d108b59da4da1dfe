//! Tagged deploy scripts.
//!
//! Scripts run in declaration order; a run selects every script that shares at
//! least one tag with the requested set.

use tracing::info;

use crowdfund::constants::{MOCK_DECIMALS, MOCK_INITIAL_ANSWER};

use crate::config::{ApiKey, DeployConfig};
use crate::error::DeployError;
use crate::network::Network;
use crate::registry::{
    ChainAddress, ConstructorArg, DeployOptions, DeploymentRecord, DeploymentRegistry,
};
use crate::resolve::{resolve_native_token_address, resolve_price_feed_address};
use crate::verify::{maybe_verify, Verifier};

pub const MOCK_PRICE_FEED: &str = "MockPriceFeed";
pub const FUND_ME: &str = "FundMe";
/// Asset contract holding the value FundMe collects
pub const NATIVE_TOKEN: &str = "NativeToken";

pub struct DeployContext<'a> {
    pub network: Network,
    pub config: &'a DeployConfig,
    pub registry: &'a mut dyn DeploymentRegistry,
    pub deployer: ChainAddress,
    pub verifier: Option<&'a dyn Verifier>,
    pub api_key: Option<ApiKey>,
}

impl<'a> DeployContext<'a> {
    pub fn new(
        network: Network,
        config: &'a DeployConfig,
        registry: &'a mut dyn DeploymentRegistry,
        deployer: ChainAddress,
    ) -> Self {
        Self {
            network,
            config,
            registry,
            deployer,
            verifier: None,
            api_key: None,
        }
    }

    pub fn with_verifier(mut self, verifier: &'a dyn Verifier) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }
}

pub trait DeployScript {
    fn name(&self) -> &'static str;

    fn tags(&self) -> &'static [&'static str];

    /// Records produced by this run, empty when the script skipped itself.
    fn run(&self, ctx: &mut DeployContext<'_>) -> Result<Vec<DeploymentRecord>, DeployError>;
}

/// Deploys the price feed mock on development networks.
pub struct DeployMocks;

impl DeployScript for DeployMocks {
    fn name(&self) -> &'static str {
        "00-deploy-mocks"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["all", "mocks"]
    }

    fn run(&self, ctx: &mut DeployContext<'_>) -> Result<Vec<DeploymentRecord>, DeployError> {
        if !ctx.network.is_development() {
            info!(network = %ctx.network.name, "not a development network, skipping mocks");
            return Ok(Vec::new());
        }

        info!(network = %ctx.network.name, "development network detected, deploying mocks");
        let record = ctx.registry.deploy(
            MOCK_PRICE_FEED,
            DeployOptions {
                from: ctx.deployer.clone(),
                args: vec![
                    ConstructorArg::U32(MOCK_DECIMALS),
                    ConstructorArg::I128(MOCK_INITIAL_ANSWER),
                ],
                wait_confirmations: ctx.network.confirmations(),
            },
        )?;
        info!("mocks deployed");

        Ok(vec![record])
    }
}

pub struct DeployFundMe;

impl DeployScript for DeployFundMe {
    fn name(&self) -> &'static str {
        "01-deploy-fund-me"
    }

    fn tags(&self) -> &'static [&'static str] {
        &["all", "fundme"]
    }

    fn run(&self, ctx: &mut DeployContext<'_>) -> Result<Vec<DeploymentRecord>, DeployError> {
        let price_feed = resolve_price_feed_address(&ctx.network, &*ctx.registry, ctx.config)?;
        let native_token = resolve_native_token_address(&ctx.network, &*ctx.registry, ctx.config)?;

        let record = deploy_fund_me(
            &mut *ctx.registry,
            ctx.deployer.clone(),
            price_feed,
            native_token,
            ctx.network.confirmations(),
        )?;

        maybe_verify(
            &record,
            &record.args,
            &ctx.network,
            ctx.api_key.as_ref(),
            ctx.verifier,
        );

        Ok(vec![record])
    }
}

/// Deploys FundMe owned by `deployer`.
pub fn deploy_fund_me(
    registry: &mut dyn DeploymentRegistry,
    deployer: ChainAddress,
    price_feed: ChainAddress,
    native_token: ChainAddress,
    wait_confirmations: u32,
) -> Result<DeploymentRecord, DeployError> {
    let args = vec![
        ConstructorArg::Address(deployer.clone()),
        ConstructorArg::Address(price_feed),
        ConstructorArg::Address(native_token),
    ];

    registry.deploy(
        FUND_ME,
        DeployOptions {
            from: deployer,
            args,
            wait_confirmations,
        },
    )
}

pub fn default_scripts() -> Vec<Box<dyn DeployScript>> {
    vec![Box::new(DeployMocks), Box::new(DeployFundMe)]
}

/// Runs the scripts tagged with any of `tags`. Returns every record produced,
/// in execution order.
pub fn run_tagged(
    scripts: &[Box<dyn DeployScript>],
    tags: &[&str],
    ctx: &mut DeployContext<'_>,
) -> Result<Vec<DeploymentRecord>, DeployError> {
    let mut records = Vec::new();
    for script in scripts
        .iter()
        .filter(|script| script.tags().iter().any(|tag| tags.contains(tag)))
    {
        info!(script = script.name(), network = %ctx.network.name, "running deploy script");
        records.extend(script.run(ctx)?);
        info!("-----------------------------------------------");
    }
    Ok(records)
}
