use soroban_sdk::{Address, Env};

use crate::errors::FundMeError;

pub trait FundMeTrait {
    /// Contributes `amount` of the native asset. The USD value of `amount`
    /// must reach `MINIMUM_USD` at the current price feed answer.
    fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError>;

    /// Sends the whole balance to the owner and resets every funder.
    fn withdraw(env: Env, sender: Address) -> Result<(), FundMeError>;

    /// Same outcome as `withdraw`, reading the funder list from storage once.
    fn cheaper_withdraw(env: Env, sender: Address) -> Result<(), FundMeError>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_address_to_amount_funded(env: Env, funder: Address) -> i128;

    fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError>;

    fn get_owner(env: Env) -> Address;

    fn get_price_feed(env: Env) -> Address;

    fn get_native_token(env: Env) -> Address;

    fn get_version(env: Env) -> u32;
}
