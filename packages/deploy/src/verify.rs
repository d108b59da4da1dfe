//! Source verification on public block explorers.

use tracing::{info, warn};

use crate::config::ApiKey;
use crate::error::VerifyError;
use crate::network::Network;
use crate::registry::{ChainAddress, ConstructorArg, DeploymentRecord};

/// A block-explorer verification service.
pub trait Verifier {
    /// Submits `address` built with `args`, authenticated with `api_key`.
    fn verify(
        &self,
        api_key: &ApiKey,
        address: &ChainAddress,
        args: &[ConstructorArg],
    ) -> Result<(), VerifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Development network, no credential or no verifier
    Skipped,
    Verified,
    AlreadyVerified,
    /// Logged and otherwise ignored
    Failed(VerifyError),
}

/// Submits `record` for verification when the network is public and a
/// credential is available. Failures never abort the deployment.
pub fn maybe_verify(
    record: &DeploymentRecord,
    args: &[ConstructorArg],
    network: &Network,
    api_key: Option<&ApiKey>,
    verifier: Option<&dyn Verifier>,
) -> VerifyOutcome {
    if network.is_development() {
        return VerifyOutcome::Skipped;
    }
    let (api_key, verifier) = match (api_key, verifier) {
        (Some(api_key), Some(verifier)) => (api_key, verifier),
        _ => return VerifyOutcome::Skipped,
    };

    info!(contract = %record.name, address = %record.address, "verifying contract");
    match verifier.verify(api_key, &record.address, args) {
        Ok(()) => {
            info!(contract = %record.name, "contract verified");
            VerifyOutcome::Verified
        }
        Err(VerifyError::AlreadyVerified) => {
            info!(contract = %record.name, "contract already verified");
            VerifyOutcome::AlreadyVerified
        }
        Err(err) => {
            warn!(contract = %record.name, error = %err, "verification failed");
            VerifyOutcome::Failed(err)
        }
    }
}
