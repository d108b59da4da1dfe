use crowdfund::{
    constants::MINIMUM_USD,
    price_feed::{get_conversion_rate, PriceFeedClient},
    safe_increment, validate,
};
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

use crate::{
    errors::FundMeError,
    events::FundMeEvents,
    fund_me::FundMeTrait,
    storage::{
        get_amount_funded, get_config, get_funders, reset_amount_funded, save_amount_funded,
        save_config, save_funders, Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Crowdfunding contract accepting contributions above a USD minimum"
);

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, native_token: Address) {
        save_config(
            &env,
            &Config {
                owner: owner.clone(),
                price_feed: price_feed.clone(),
                native_token: native_token.clone(),
            },
        );
        save_funders(&env, &Vec::new(&env));

        FundMeEvents::initialize(&env, owner, price_feed, native_token);
    }
}

#[contractimpl]
impl FundMeTrait for FundMe {
    fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        funder.require_auth();

        let config = get_config(&env);
        let token_client = token::Client::new(&env, &config.native_token);
        let price_feed = PriceFeedClient::new(&env, &config.price_feed);

        let usd_value = get_conversion_rate(&env, amount, token_client.decimals(), &price_feed)?;
        validate!(
            &env,
            usd_value >= MINIMUM_USD,
            FundMeError::InsufficientFunding,
            "FundMe: Fund: You need to spend more ETH!"
        )?;

        token_client.transfer(&funder, &env.current_contract_address(), &amount);

        let mut amount_funded = get_amount_funded(&env, &funder);
        safe_increment!(&env, amount_funded, amount);
        save_amount_funded(&env, &funder, amount_funded);

        let mut funders = get_funders(&env);
        if !funders.contains(&funder) {
            funders.push_back(funder.clone());
            save_funders(&env, &funders);
        }

        FundMeEvents::fund(&env, funder, amount, amount_funded);

        Ok(())
    }

    fn withdraw(env: Env, sender: Address) -> Result<(), FundMeError> {
        sender.require_auth();

        let config = get_config(&env);
        only_owner(&env, &config, &sender)?;

        let mut index = 0;
        // the list is read back from storage on every step
        while index < get_funders(&env).len() {
            let funder = get_funders(&env).get_unchecked(index);
            reset_amount_funded(&env, &funder);
            index += 1;
        }
        save_funders(&env, &Vec::new(&env));

        send_balance_to_owner(&env, &config, index);

        Ok(())
    }

    fn cheaper_withdraw(env: Env, sender: Address) -> Result<(), FundMeError> {
        sender.require_auth();

        let config = get_config(&env);
        only_owner(&env, &config, &sender)?;

        let funders = get_funders(&env);
        for funder in funders.iter() {
            reset_amount_funded(&env, &funder);
        }
        save_funders(&env, &Vec::new(&env));

        send_balance_to_owner(&env, &config, funders.len());

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        get_amount_funded(&env, &funder)
    }

    fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        get_funders(&env).get(index).ok_or_else(|| {
            log!(&env, "FundMe: Get funder: no funder at index {}", index);
            FundMeError::FunderIndexOutOfRange
        })
    }

    fn get_owner(env: Env) -> Address {
        get_config(&env).owner
    }

    fn get_price_feed(env: Env) -> Address {
        get_config(&env).price_feed
    }

    fn get_native_token(env: Env) -> Address {
        get_config(&env).native_token
    }

    fn get_version(env: Env) -> u32 {
        PriceFeedClient::new(&env, &get_config(&env).price_feed).version()
    }
}

fn only_owner(env: &Env, config: &Config, sender: &Address) -> Result<(), FundMeError> {
    validate!(
        env,
        config.owner == *sender,
        FundMeError::NotOwner,
        "FundMe: Withdraw: You are not authorized!"
    )
}

fn send_balance_to_owner(env: &Env, config: &Config, funders: u32) {
    let token_client = token::Client::new(env, &config.native_token);
    let contract_address = env.current_contract_address();
    let balance = token_client.balance(&contract_address);

    if balance > 0 {
        token_client.transfer(&contract_address, &config.owner, &balance);
    }

    FundMeEvents::withdraw(env, config.owner.clone(), balance, funders);
}
