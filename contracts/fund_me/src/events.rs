use soroban_sdk::{Address, Env, Symbol};

pub struct FundMeEvents {}

impl FundMeEvents {
    /// Emitted when the contract is created
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[price_feed: Address, native_token: Address]`
    pub fn initialize(env: &Env, owner: Address, price_feed: Address, native_token: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, (price_feed, native_token));
    }

    /// Emitted when a funder contributes
    ///
    /// - topics - `["fund", funder: Address]`
    /// - data - `[amount: i128, amount_funded: i128]`
    pub fn fund(env: &Env, funder: Address, amount: i128, amount_funded: i128) {
        let topics = (Symbol::new(env, "fund"), funder);
        env.events().publish(topics, (amount, amount_funded));
    }

    /// Emitted when the owner withdraws
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `[amount: i128, funders: u32]`
    pub fn withdraw(env: &Env, owner: Address, amount: i128, funders: u32) {
        let topics = (Symbol::new(env, "withdraw"), owner);
        env.events().publish(topics, (amount, funders));
    }
}
