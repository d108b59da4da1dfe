use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid network configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("No chain entry for {chain_id} (network {network})")]
    MissingChain { network: String, chain_id: String },

    #[error("Chain {chain_id} has no {field} configured")]
    MissingField {
        chain_id: String,
        field: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No deployment named {0}")]
    MissingDeployment(String),

    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Invalid constructor argument for {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("{name} reached {reached} of {requested} confirmations")]
    Confirmation {
        name: String,
        requested: u32,
        reached: u32,
    },

    #[error("Network {0} is not a development network; only the sandbox registry is available")]
    UnsupportedNetwork(String),
}

/// Failures reported by a verification service. None of them abort a deployment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Already verified")]
    AlreadyVerified,

    #[error("Verification rejected: {0}")]
    Rejected(String),

    #[error("Verification service unavailable: {0}")]
    Unavailable(String),
}
