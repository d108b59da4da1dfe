use crowdfund::price_feed::{PriceFeedInterface, RoundData};
use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, Env, String};

use crate::{
    errors::MockPriceFeedError,
    storage::{
        get_decimals, get_latest_round, get_round, save_decimals, save_latest_round, save_round,
    },
};

contractmeta!(
    key = "Description",
    val = "Aggregator mock answering with a settable price"
);

const DESCRIPTION: &str = "crowdfund/mock_price_feed";
const VERSION: u32 = 0;

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        save_decimals(&env, decimals);
        Self::update_answer(env, initial_answer);
    }

    /// Opens a new round answered at the current ledger time.
    pub fn update_answer(env: Env, answer: i128) {
        let round_id = get_latest_round(&env) + 1;
        let now = env.ledger().timestamp();

        save_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
        save_latest_round(&env, round_id);

        log!(
            &env,
            "Mock Price Feed: update_answer: round {} answer {}",
            round_id,
            answer
        );
    }

    /// Overwrites `round_id` and makes it the latest round.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        timestamp: u64,
        started_at: u64,
    ) {
        save_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at,
                updated_at: timestamp,
                answered_in_round: round_id,
            },
        );
        save_latest_round(&env, round_id);
    }

    pub fn get_round_data(env: Env, round_id: u64) -> Result<RoundData, MockPriceFeedError> {
        get_round(&env, round_id).ok_or_else(|| {
            log!(&env, "Mock Price Feed: get_round_data: unknown round {}", round_id);
            MockPriceFeedError::RoundNotFound
        })
    }

    pub fn latest_answer(env: Env) -> i128 {
        Self::latest_round_data(env).answer
    }

    pub fn latest_timestamp(env: Env) -> u64 {
        Self::latest_round_data(env).updated_at
    }

    pub fn latest_round(env: Env) -> u64 {
        get_latest_round(&env)
    }
}

#[contractimpl]
impl PriceFeedInterface for MockPriceFeed {
    fn decimals(env: Env) -> u32 {
        get_decimals(&env)
    }

    fn description(env: Env) -> String {
        String::from_str(&env, DESCRIPTION)
    }

    fn version(_env: Env) -> u32 {
        VERSION
    }

    fn latest_round_data(env: Env) -> RoundData {
        let round_id = get_latest_round(&env);
        get_round(&env, round_id)
            .unwrap_or_else(|| panic_with_error!(&env, MockPriceFeedError::RoundNotFound))
    }
}
