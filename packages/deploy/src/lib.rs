//! Deploy scripts for the FundMe contracts.
//!
//! A run resolves the addresses FundMe depends on for the active network,
//! deploys it through a [`DeploymentRegistry`] and, on public networks with a
//! verification credential, submits it for source verification. Development
//! networks run against [`SandboxRegistry`], an in-process Soroban host that
//! also backs the behavioral [`harness`].

pub mod config;
pub mod error;
pub mod harness;
pub mod network;
pub mod registry;
pub mod resolve;
pub mod sandbox;
pub mod scripts;
pub mod verify;

pub use config::{ApiKey, ChainConfig, DeployConfig, SandboxSettings};
pub use error::{ConfigError, DeployError, VerifyError};
pub use network::{ChainId, Network, NetworkKind};
pub use registry::{
    ChainAddress, ConstructorArg, DeployOptions, DeploymentRecord, DeploymentRegistry,
};
pub use resolve::{resolve_native_token_address, resolve_price_feed_address};
pub use sandbox::SandboxRegistry;
pub use scripts::{default_scripts, deploy_fund_me, run_tagged, DeployContext, DeployScript};
pub use verify::{maybe_verify, Verifier, VerifyOutcome};
