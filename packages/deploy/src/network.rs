use std::fmt;

use serde::{Deserialize, Serialize};

/// Network passphrase, the canonical chain identifier on Stellar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self(passphrase.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    /// Local network where external collaborators are replaced by mocks
    Development,
    Public,
}

/// The network a deploy run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub chain_id: ChainId,
    pub block_confirmations: Option<u32>,
    pub kind: NetworkKind,
}

impl Network {
    pub fn is_development(&self) -> bool {
        self.kind == NetworkKind::Development
    }

    /// Confirmations to wait for after each deployment. Unset or 0 means 1.
    pub fn confirmations(&self) -> u32 {
        self.block_confirmations
            .filter(|confirmations| *confirmations > 0)
            .unwrap_or(1)
    }
}
