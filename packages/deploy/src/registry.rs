use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DeployError;

/// Strkey of an account (`G...`) or contract (`C...`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainAddress(String);

impl ChainAddress {
    pub fn new(strkey: impl Into<String>) -> Self {
        Self(strkey.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Constructor argument, kept independent of any host environment so it can
/// be recorded and handed to a verification service as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
    Address(ChainAddress),
    U32(u32),
    I128(i128),
}

impl fmt::Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::Address(address) => write!(f, "{address}"),
            ConstructorArg::U32(value) => write!(f, "{value}u32"),
            ConstructorArg::I128(value) => write!(f, "{value}i128"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub from: ChainAddress,
    pub args: Vec<ConstructorArg>,
    pub wait_confirmations: u32,
}

/// Outcome of one contract deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRecord {
    pub name: String,
    pub address: ChainAddress,
    pub args: Vec<ConstructorArg>,
    pub deployer: ChainAddress,
    /// Ledger the deployment was confirmed at
    pub ledger: u32,
    /// Events the contract emitted while being created
    pub logs: Vec<String>,
}

impl fmt::Display for DeploymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deployed \"{}\" at {} (ledger {}, deployer {})",
            self.name, self.address, self.ledger, self.deployer
        )?;
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, " with args [{}]", args.join(", "))?;
        }
        Ok(())
    }
}

/// Named deployments of a network.
///
/// Deploy scripts only consume this: they deploy by name and look up earlier
/// deployments by name, nothing else.
pub trait DeploymentRegistry {
    /// Creates `name`, waits for `options.wait_confirmations` and records the
    /// deployment as the most recent one for `name`.
    fn deploy(&mut self, name: &str, options: DeployOptions)
        -> Result<DeploymentRecord, DeployError>;

    /// The most recent deployment of `name`.
    fn get(&self, name: &str) -> Result<DeploymentRecord, DeployError>;
}
