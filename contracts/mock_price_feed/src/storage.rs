use crowdfund::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    price_feed::RoundData,
};
use soroban_sdk::{contracttype, Env};

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Decimals,
    LatestRound,
    Round(u64),
}

pub fn save_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_decimals(env: &Env) -> u32 {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    env.storage()
        .instance()
        .get(&DataKey::Decimals)
        .expect("Mock Price Feed: decimals not set")
}

pub fn get_latest_round(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .unwrap_or(0)
}

pub fn save_latest_round(env: &Env, round_id: u64) {
    env.storage().instance().set(&DataKey::LatestRound, &round_id);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_round(env: &Env, round_id: u64) -> Option<RoundData> {
    let key = DataKey::Round(round_id);
    let round = env.storage().persistent().get::<_, RoundData>(&key);

    if round.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    round
}

pub fn save_round(env: &Env, round: &RoundData) {
    let key = DataKey::Round(round.round_id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
