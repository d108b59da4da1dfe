//! Behavioral harness for FundMe.
//!
//! Every test builds its own fixture: a fresh sandbox with the tagged deploy
//! scripts run against it. On networks that are not development networks the
//! harness hands out nothing and the tests return early.

use std::sync::OnceLock;

use crowdfund_fund_me::{errors::FundMeError, FundMeClient};
use crowdfund_mock_price_feed::MockPriceFeedClient;
use soroban_sdk::{Address, Env, InvokeError};
use thiserror::Error;
use tracing::info;

use crate::config::{ApiKey, DeployConfig};
use crate::error::DeployError;
use crate::registry::{DeploymentRecord, DeploymentRegistry};
use crate::sandbox::SandboxRegistry;
use crate::scripts::{default_scripts, run_tagged, DeployContext, FUND_ME};

/// Environment variable naming the network the harness runs against.
pub const NETWORK_ENV: &str = "CROWDFUND_NETWORK";

static DEVELOPMENT_GATE: OnceLock<bool> = OnceLock::new();

/// Name of the active network, `default_network` unless overridden.
pub fn active_network(config: &DeployConfig) -> String {
    std::env::var(NETWORK_ENV)
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| config.default_network.clone())
}

/// Whether behavioral tests run at all. Decided once per process.
pub fn development_gate(config: &DeployConfig) -> bool {
    *DEVELOPMENT_GATE.get_or_init(|| {
        let network = active_network(config);
        let development = config.is_development(&network);
        if !development {
            info!(%network, "not a development network, skipping behavioral tests");
        }
        development
    })
}

/// A contract call that did not go through.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevertReason {
    #[error("You need to spend more ETH!")]
    InsufficientFunding,

    #[error("FundMe__NotOwner")]
    NotOwner,

    #[error("Funder index out of range")]
    FunderIndexOutOfRange,

    #[error("Price feed answered with a non-positive price")]
    PriceFeedNonPositive,

    #[error("Price feed decimals out of range")]
    InvalidPriceFeedDecimals,

    #[error("Arithmetic overflow")]
    MathOverflow,

    /// Host-level failure with no FundMe error code
    #[error("Call aborted: {0}")]
    Aborted(String),
}

impl From<FundMeError> for RevertReason {
    fn from(err: FundMeError) -> Self {
        match err {
            FundMeError::NotOwner => RevertReason::NotOwner,
            FundMeError::InsufficientFunding => RevertReason::InsufficientFunding,
            FundMeError::FunderIndexOutOfRange => RevertReason::FunderIndexOutOfRange,
            FundMeError::PriceFeedNonPositive => RevertReason::PriceFeedNonPositive,
            FundMeError::InvalidPriceFeedDecimals => RevertReason::InvalidPriceFeedDecimals,
            FundMeError::MathOverflow => RevertReason::MathOverflow,
        }
    }
}

/// Flattens the nested result of a `try_*` client call.
fn settle<T, C: std::fmt::Debug>(
    result: Result<Result<T, C>, Result<FundMeError, InvokeError>>,
) -> Result<T, RevertReason> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(RevertReason::Aborted(format!("{conversion:?}"))),
        Err(Ok(err)) => Err(err.into()),
        Err(Err(invoke)) => Err(RevertReason::Aborted(format!("{invoke:?}"))),
    }
}

/// Outcome of a confirmed state-changing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Native asset spent on fees; the sandbox charges none
    pub fee_charged: i128,
    pub ledger: u32,
}

pub struct Harness {
    sandbox: SandboxRegistry,
    records: Vec<DeploymentRecord>,
    fund_me: FundMeClient<'static>,
    price_feed: MockPriceFeedClient<'static>,
}

impl Harness {
    /// The `["all"]` fixture, or `None` when the active network is public.
    pub fn setup() -> Result<Option<Self>, DeployError> {
        let config = DeployConfig::embedded()?;
        if !development_gate(&config) {
            return Ok(None);
        }
        Self::fixture_with(&config, &["all"]).map(Some)
    }

    pub fn fixture(tags: &[&str]) -> Result<Self, DeployError> {
        Self::fixture_with(&DeployConfig::embedded()?, tags)
    }

    /// Runs the tagged deploy scripts against a fresh sandbox.
    pub fn fixture_with(config: &DeployConfig, tags: &[&str]) -> Result<Self, DeployError> {
        let network = config.network(&active_network(config))?;
        if !network.is_development() {
            return Err(DeployError::UnsupportedNetwork(network.name));
        }

        let mut sandbox = SandboxRegistry::new(&config.sandbox);
        let deployer = sandbox.strkey(sandbox.deployer());
        let records = {
            let mut ctx = DeployContext::new(network, config, &mut sandbox, deployer)
                .with_api_key(ApiKey::from_env());
            run_tagged(&default_scripts(), tags, &mut ctx)?
        };

        let fund_me_address = sandbox.address(&sandbox.get(FUND_ME)?.address);
        let fund_me = FundMeClient::new(sandbox.env(), &fund_me_address);
        let price_feed = MockPriceFeedClient::new(sandbox.env(), &fund_me.get_price_feed());

        Ok(Self {
            sandbox,
            records,
            fund_me,
            price_feed,
        })
    }

    pub fn env(&self) -> &Env {
        self.sandbox.env()
    }

    pub fn sandbox(&self) -> &SandboxRegistry {
        &self.sandbox
    }

    /// Records of the fixture run, in deployment order.
    pub fn records(&self) -> &[DeploymentRecord] {
        &self.records
    }

    pub fn fund_me(&self) -> &FundMeClient<'static> {
        &self.fund_me
    }

    pub fn price_feed(&self) -> &MockPriceFeedClient<'static> {
        &self.price_feed
    }

    pub fn deployer(&self) -> &Address {
        self.sandbox.deployer()
    }

    pub fn accounts(&self) -> &[Address] {
        self.sandbox.accounts()
    }

    pub fn balance(&self, address: &Address) -> i128 {
        self.sandbox.balance(address)
    }

    pub fn fund(&self, funder: &Address, amount: i128) -> Result<Receipt, RevertReason> {
        settle(self.fund_me.try_fund(funder, &amount))?;
        Ok(self.confirm())
    }

    pub fn withdraw(&self, sender: &Address) -> Result<Receipt, RevertReason> {
        settle(self.fund_me.try_withdraw(sender))?;
        Ok(self.confirm())
    }

    pub fn cheaper_withdraw(&self, sender: &Address) -> Result<Receipt, RevertReason> {
        settle(self.fund_me.try_cheaper_withdraw(sender))?;
        Ok(self.confirm())
    }

    pub fn funder(&self, index: u32) -> Result<Address, RevertReason> {
        settle(self.fund_me.try_get_funder(&index))
    }

    pub fn amount_funded(&self, funder: &Address) -> i128 {
        self.fund_me.get_address_to_amount_funded(funder)
    }

    fn confirm(&self) -> Receipt {
        Receipt {
            fee_charged: 0,
            ledger: self.sandbox.close_ledgers(1),
        }
    }
}
