use crowdfund::constants::ONE_NATIVE;
use crowdfund_deploy::harness::{Harness, Receipt, RevertReason};
use crowdfund_deploy::DeploymentRegistry;
use pretty_assertions::assert_eq;
use soroban_sdk::Address;

const SEND_VALUE: i128 = ONE_NATIVE;

macro_rules! fixture {
    () => {
        match Harness::setup().unwrap() {
            Some(harness) => harness,
            None => return,
        }
    };
}

/// Funds `SEND_VALUE` from the deployer and from the next `count` accounts.
fn fund_from_accounts(harness: &Harness, count: usize) -> Vec<Address> {
    let funders: Vec<Address> = harness.accounts()[..=count].to_vec();
    for funder in &funders {
        harness.fund(funder, SEND_VALUE).unwrap();
    }
    funders
}

#[test]
fn constructor_sets_the_price_feed() {
    let harness = fixture!();

    let sandbox = harness.sandbox();
    let mock = sandbox.get("MockPriceFeed").unwrap();

    assert_eq!(
        harness.fund_me().get_price_feed(),
        sandbox.address(&mock.address)
    );
    assert_eq!(harness.price_feed().decimals(), 8);
    assert_eq!(harness.fund_me().get_owner(), *harness.deployer());
    assert_eq!(harness.fund_me().get_version(), 0);
}

#[test]
fn fixture_runs_every_script() {
    let harness = fixture!();

    let names: Vec<&str> = harness
        .records()
        .iter()
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(names, ["MockPriceFeed", "FundMe"]);
}

#[test]
fn fund_fails_without_enough_value() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();
    let starting_balance = harness.balance(&deployer);

    let result = harness.fund(&deployer, 0);

    assert_eq!(result, Err(RevertReason::InsufficientFunding));
    assert_eq!(
        result.unwrap_err().to_string(),
        "You need to spend more ETH!"
    );
    assert_eq!(harness.amount_funded(&deployer), 0);
    assert_eq!(harness.balance(&deployer), starting_balance);
    assert_eq!(harness.funder(0), Err(RevertReason::FunderIndexOutOfRange));
}

#[test]
fn fund_updates_the_amount_funded() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();

    let receipt = harness.fund(&deployer, SEND_VALUE).unwrap();

    assert_eq!(receipt.fee_charged, 0);
    assert_eq!(harness.amount_funded(&deployer), SEND_VALUE);
}

#[test]
fn fund_adds_the_funder_once() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();

    harness.fund(&deployer, SEND_VALUE).unwrap();
    harness.fund(&deployer, SEND_VALUE).unwrap();

    assert_eq!(harness.funder(0), Ok(deployer.clone()));
    assert_eq!(harness.funder(1), Err(RevertReason::FunderIndexOutOfRange));
    assert_eq!(harness.amount_funded(&deployer), 2 * SEND_VALUE);
}

#[test]
fn each_call_waits_for_one_confirmation() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();

    let Receipt { ledger: funded, .. } = harness.fund(&deployer, SEND_VALUE).unwrap();
    let Receipt { ledger: withdrawn, .. } = harness.withdraw(&deployer).unwrap();

    assert_eq!(withdrawn, funded + 1);
}

#[test]
fn withdraw_from_a_single_funder() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();
    let fund_me = harness.fund_me().address.clone();
    harness.fund(&deployer, SEND_VALUE).unwrap();

    let starting_fund_me_balance = harness.balance(&fund_me);
    let starting_deployer_balance = harness.balance(&deployer);

    let receipt = harness.withdraw(&deployer).unwrap();

    let ending_fund_me_balance = harness.balance(&fund_me);
    let ending_deployer_balance = harness.balance(&deployer);

    assert_eq!(ending_fund_me_balance, 0);
    assert_eq!(
        starting_fund_me_balance + starting_deployer_balance,
        ending_deployer_balance + receipt.fee_charged
    );
}

#[test]
fn withdraw_with_multiple_funders() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();
    let fund_me = harness.fund_me().address.clone();
    let funders = fund_from_accounts(&harness, 5);

    let starting_fund_me_balance = harness.balance(&fund_me);
    let starting_deployer_balance = harness.balance(&deployer);
    assert_eq!(starting_fund_me_balance, 6 * SEND_VALUE);

    let receipt = harness.withdraw(&deployer).unwrap();

    assert_eq!(harness.balance(&fund_me), 0);
    assert_eq!(
        starting_fund_me_balance + starting_deployer_balance,
        harness.balance(&deployer) + receipt.fee_charged
    );
    assert_eq!(harness.funder(0), Err(RevertReason::FunderIndexOutOfRange));
    for funder in &funders {
        assert_eq!(harness.amount_funded(funder), 0);
    }
}

#[test]
fn only_the_owner_can_withdraw() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();
    let attacker = harness.accounts()[1].clone();
    harness.fund(&deployer, SEND_VALUE).unwrap();

    let result = harness.withdraw(&attacker);

    assert_eq!(result, Err(RevertReason::NotOwner));
    assert_eq!(result.unwrap_err().to_string(), "FundMe__NotOwner");
    assert_eq!(harness.amount_funded(&deployer), SEND_VALUE);
    assert_eq!(harness.balance(&harness.fund_me().address), SEND_VALUE);
    assert_eq!(
        harness.cheaper_withdraw(&attacker),
        Err(RevertReason::NotOwner)
    );
}

#[test]
fn cheaper_withdraw_matches_withdraw() {
    let expensive = fixture!();
    let cheaper = fixture!();

    let expensive_funders = fund_from_accounts(&expensive, 5);
    let cheaper_funders = fund_from_accounts(&cheaper, 5);

    let expensive_owner = expensive.deployer().clone();
    let cheaper_owner = cheaper.deployer().clone();
    expensive.withdraw(&expensive_owner).unwrap();
    cheaper.cheaper_withdraw(&cheaper_owner).unwrap();

    assert_eq!(
        expensive.balance(&expensive_owner),
        cheaper.balance(&cheaper_owner)
    );
    assert_eq!(expensive.balance(&expensive.fund_me().address), 0);
    assert_eq!(cheaper.balance(&cheaper.fund_me().address), 0);
    assert_eq!(expensive.funder(0), Err(RevertReason::FunderIndexOutOfRange));
    assert_eq!(cheaper.funder(0), Err(RevertReason::FunderIndexOutOfRange));
    for (a, b) in expensive_funders.iter().zip(&cheaper_funders) {
        assert_eq!(expensive.amount_funded(a), 0);
        assert_eq!(cheaper.amount_funded(b), 0);
    }
}

#[test]
fn funding_starts_over_after_withdraw() {
    let harness = fixture!();
    let deployer = harness.deployer().clone();
    let funder = harness.accounts()[2].clone();
    harness.fund(&funder, SEND_VALUE).unwrap();
    harness.cheaper_withdraw(&deployer).unwrap();

    harness.fund(&funder, SEND_VALUE).unwrap();

    assert_eq!(harness.funder(0), Ok(funder.clone()));
    assert_eq!(harness.amount_funded(&funder), SEND_VALUE);
}
