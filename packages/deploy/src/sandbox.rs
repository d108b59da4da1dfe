//! In-process development network.
//!
//! The sandbox is a Soroban host with every authorization mocked, the way a
//! local node unlocks its dev accounts. It owns a native asset contract and a
//! set of pre-funded accounts; account 0 is the deployer.

use std::collections::BTreeMap;

use crowdfund_fund_me::FundMe;
use crowdfund_mock_price_feed::MockPriceFeed;
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, IntoVal, String as HostString, Symbol, TryFromVal, Val, Vec as HostVec,
};
use tracing::{debug, info};

use crate::config::SandboxSettings;
use crate::error::DeployError;
use crate::registry::{
    ChainAddress, ConstructorArg, DeployOptions, DeploymentRecord, DeploymentRegistry,
};
use crate::scripts::{FUND_ME, MOCK_PRICE_FEED, NATIVE_TOKEN};

/// Seconds between two closed sandbox ledgers.
pub const LEDGER_CLOSE_SECONDS: u64 = 5;

pub struct SandboxRegistry {
    env: Env,
    accounts: Vec<Address>,
    native_token: Address,
    deployments: BTreeMap<String, DeploymentRecord>,
}

impl SandboxRegistry {
    pub fn new(settings: &SandboxSettings) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let issuer = Address::generate(&env);
        let native_token = env
            .register_stellar_asset_contract_v2(issuer.clone())
            .address();

        let minter = StellarAssetClient::new(&env, &native_token);
        let accounts: Vec<Address> = (0..settings.accounts.max(1))
            .map(|_| {
                let account = Address::generate(&env);
                minter.mint(&account, &i128::from(settings.starting_balance));
                account
            })
            .collect();

        let mut registry = Self {
            env,
            accounts,
            native_token,
            deployments: BTreeMap::new(),
        };

        // the native asset is part of the network, not of any deploy script
        let record = DeploymentRecord {
            name: NATIVE_TOKEN.to_string(),
            address: registry.strkey(&registry.native_token),
            args: Vec::new(),
            deployer: registry.strkey(&issuer),
            ledger: registry.env.ledger().sequence(),
            logs: Vec::new(),
        };
        registry.deployments.insert(NATIVE_TOKEN.to_string(), record);

        debug!(
            accounts = registry.accounts.len(),
            "sandbox started with funded accounts"
        );
        registry
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }

    pub fn deployer(&self) -> &Address {
        &self.accounts[0]
    }

    pub fn native_token(&self) -> &Address {
        &self.native_token
    }

    /// Native asset balance of `address`, in stroops.
    pub fn balance(&self, address: &Address) -> i128 {
        TokenClient::new(&self.env, &self.native_token).balance(address)
    }

    /// Every recorded deployment, by name.
    pub fn records(&self) -> impl Iterator<Item = &DeploymentRecord> {
        self.deployments.values()
    }

    pub fn strkey(&self, address: &Address) -> ChainAddress {
        let strkey = address.to_string();
        let mut buf = vec![0u8; strkey.len() as usize];
        strkey.copy_into_slice(&mut buf);
        ChainAddress::new(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn address(&self, address: &ChainAddress) -> Address {
        Address::from_string(&HostString::from_str(&self.env, address.as_str()))
    }

    /// Closes `count` ledgers. Returns the sequence of the last one.
    pub fn close_ledgers(&self, count: u32) -> u32 {
        self.env.ledger().with_mut(|li| {
            li.sequence_number += count;
            li.timestamp += LEDGER_CLOSE_SECONDS * u64::from(count);
        });
        self.env.ledger().sequence()
    }

    fn constructor_args(
        &self,
        name: &str,
        args: &[ConstructorArg],
    ) -> Result<HostVec<Val>, DeployError> {
        let mut vals = HostVec::new(&self.env);
        for arg in args {
            let val: Val = match arg {
                ConstructorArg::Address(address) => {
                    if address.as_str().len() != 56 {
                        return Err(DeployError::InvalidArgument {
                            name: name.to_string(),
                            reason: format!("{address} is not a strkey"),
                        });
                    }
                    self.address(address).into_val(&self.env)
                }
                ConstructorArg::U32(value) => value.into_val(&self.env),
                ConstructorArg::I128(value) => value.into_val(&self.env),
            };
            vals.push_back(val);
        }
        Ok(vals)
    }

    fn creation_logs(&self, contract: &Address) -> Vec<String> {
        self.env
            .events()
            .all()
            .iter()
            .filter(|(emitter, _, _)| emitter == contract)
            .map(|(_, topics, data)| {
                format!("{} => {}", self.render(topics.to_val()), self.render(data))
            })
            .collect()
    }

    /// Host value as text. Objects are resolved, unknown types fall back to `Debug`.
    fn render(&self, val: Val) -> String {
        let env = &self.env;
        if let Ok(symbol) = Symbol::try_from_val(env, &val) {
            return symbol.to_string();
        }
        if let Ok(address) = Address::try_from_val(env, &val) {
            return self.strkey(&address).to_string();
        }
        if let Ok(items) = HostVec::<Val>::try_from_val(env, &val) {
            let items: Vec<String> = items.iter().map(|item| self.render(item)).collect();
            return format!("[{}]", items.join(", "));
        }
        if let Ok(value) = u32::try_from_val(env, &val) {
            return value.to_string();
        }
        if let Ok(value) = i128::try_from_val(env, &val) {
            return value.to_string();
        }
        format!("{val:?}")
    }
}

impl DeploymentRegistry for SandboxRegistry {
    fn deploy(
        &mut self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeploymentRecord, DeployError> {
        let args = self.constructor_args(name, &options.args)?;

        let start = self.env.ledger().sequence();
        if start.checked_add(options.wait_confirmations).is_none() {
            return Err(DeployError::Confirmation {
                name: name.to_string(),
                requested: options.wait_confirmations,
                reached: u32::MAX - start,
            });
        }

        let address = match name {
            FUND_ME => self.env.register(FundMe, args),
            MOCK_PRICE_FEED => self.env.register(MockPriceFeed, args),
            other => return Err(DeployError::UnknownContract(other.to_string())),
        };
        let logs = self.creation_logs(&address);
        let ledger = self.close_ledgers(options.wait_confirmations);

        let record = DeploymentRecord {
            name: name.to_string(),
            address: self.strkey(&address),
            args: options.args,
            deployer: options.from,
            ledger,
            logs,
        };
        info!(%record, confirmations = options.wait_confirmations);

        self.deployments.insert(name.to_string(), record.clone());
        Ok(record)
    }

    fn get(&self, name: &str) -> Result<DeploymentRecord, DeployError> {
        self.deployments
            .get(name)
            .cloned()
            .ok_or_else(|| DeployError::MissingDeployment(name.to_string()))
    }
}
