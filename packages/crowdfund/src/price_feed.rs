use soroban_sdk::{contractclient, contracttype, Env, String};

use crate::constants::USD_DECIMALS;
use crate::error::{CrowdfundResult, ErrorCode};
use crate::math::safe_math::SafeMath;
use crate::validate;

/// One aggregator round, as reported by a price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    /// Price with `decimals()` decimals
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Aggregator interface FundMe reads its conversion rate from.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;

    fn description(env: Env) -> String;

    fn version(env: Env) -> u32;

    fn latest_round_data(env: Env) -> RoundData;
}

/// Latest feed answer normalized to `USD_DECIMALS`.
pub fn get_price(env: &Env, price_feed: &PriceFeedClient<'_>) -> CrowdfundResult<i128> {
    let round = price_feed.latest_round_data();
    validate!(
        env,
        round.answer > 0,
        ErrorCode::OracleNonPositive,
        "Price Feed: get_price: answer must be positive"
    )?;

    let decimals = price_feed.decimals();
    validate!(
        env,
        decimals <= USD_DECIMALS,
        ErrorCode::InvalidOracleDecimals,
        "Price Feed: get_price: feed has more decimals than supported"
    )?;

    let scale = (10_i128).safe_pow(USD_DECIMALS - decimals, env)?;
    round.answer.safe_mul(scale, env)
}

/// Converts `amount` (with `amount_decimals` decimals) to USD with `USD_DECIMALS`.
pub fn get_conversion_rate(
    env: &Env,
    amount: i128,
    amount_decimals: u32,
    price_feed: &PriceFeedClient<'_>,
) -> CrowdfundResult<i128> {
    let price = get_price(env, price_feed)?;
    let unit = (10_i128).safe_pow(amount_decimals, env)?;

    price.safe_mul(amount, env)?.safe_div(unit, env)
}
