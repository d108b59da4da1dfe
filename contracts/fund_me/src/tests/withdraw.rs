extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::Address;

use super::setup::{FundMeTest, SEND_VALUE};
use crate::errors::FundMeError;

fn fund_with_additional_accounts(test: &FundMeTest, count: usize) -> std::vec::Vec<Address> {
    let mut funders = std::vec![test.owner.clone()];
    for _ in 0..count {
        let account = test.funded_account();
        test.fund_me.fund(&account, &SEND_VALUE);
        funders.push(account);
    }
    funders
}

fn assert_reset(test: &FundMeTest, funders: &[Address]) {
    assert_eq!(
        test.fund_me.try_get_funder(&0),
        Err(Ok(FundMeError::FunderIndexOutOfRange))
    );
    for funder in funders {
        assert_eq!(test.fund_me.get_address_to_amount_funded(funder), 0);
    }
}

#[test]
fn withdraw_from_a_single_funder() {
    let test = FundMeTest::setup();
    test.fund_me.fund(&test.owner, &SEND_VALUE);

    let starting_fund_me_balance = test.token.balance(&test.fund_me.address);
    let starting_owner_balance = test.token.balance(&test.owner);

    test.fund_me.withdraw(&test.owner);

    let ending_fund_me_balance = test.token.balance(&test.fund_me.address);
    let ending_owner_balance = test.token.balance(&test.owner);

    assert_eq!(ending_fund_me_balance, 0);
    assert_eq!(
        starting_fund_me_balance + starting_owner_balance,
        ending_owner_balance
    );
    assert_reset(&test, &[test.owner.clone()]);
}

#[test]
fn withdraw_with_multiple_funders() {
    let test = FundMeTest::setup();
    test.fund_me.fund(&test.owner, &SEND_VALUE);
    let funders = fund_with_additional_accounts(&test, 5);

    let starting_fund_me_balance = test.token.balance(&test.fund_me.address);
    let starting_owner_balance = test.token.balance(&test.owner);
    assert_eq!(starting_fund_me_balance, 6 * SEND_VALUE);

    test.fund_me.withdraw(&test.owner);

    assert_eq!(test.token.balance(&test.fund_me.address), 0);
    assert_eq!(
        starting_fund_me_balance + starting_owner_balance,
        test.token.balance(&test.owner)
    );
    assert_reset(&test, &funders);
}

#[test]
fn cheaper_withdraw_with_multiple_funders() {
    let test = FundMeTest::setup();
    test.fund_me.fund(&test.owner, &SEND_VALUE);
    let funders = fund_with_additional_accounts(&test, 5);

    let starting_fund_me_balance = test.token.balance(&test.fund_me.address);
    let starting_owner_balance = test.token.balance(&test.owner);

    test.fund_me.cheaper_withdraw(&test.owner);

    assert_eq!(test.token.balance(&test.fund_me.address), 0);
    assert_eq!(
        starting_fund_me_balance + starting_owner_balance,
        test.token.balance(&test.owner)
    );
    assert_reset(&test, &funders);
}

#[test]
fn only_allows_the_owner_to_withdraw() {
    let test = FundMeTest::setup();
    test.fund_me.fund(&test.owner, &SEND_VALUE);
    let attacker = test.funded_account();

    assert_eq!(
        test.fund_me.try_withdraw(&attacker),
        Err(Ok(FundMeError::NotOwner))
    );
    assert_eq!(
        test.fund_me.try_cheaper_withdraw(&attacker),
        Err(Ok(FundMeError::NotOwner))
    );

    assert_eq!(test.token.balance(&test.fund_me.address), SEND_VALUE);
    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&test.owner),
        SEND_VALUE
    );
    assert_eq!(test.fund_me.get_funder(&0), test.owner);
}

#[test]
fn non_owner_is_rejected_without_any_funding() {
    let test = FundMeTest::setup();
    let attacker = test.funded_account();

    assert_eq!(
        test.fund_me.try_withdraw(&attacker),
        Err(Ok(FundMeError::NotOwner))
    );
}

#[test]
fn withdraw_with_nothing_funded() {
    let test = FundMeTest::setup();
    let starting_owner_balance = test.token.balance(&test.owner);

    test.fund_me.withdraw(&test.owner);

    assert_eq!(test.token.balance(&test.owner), starting_owner_balance);
    assert_eq!(test.token.balance(&test.fund_me.address), 0);
}

#[test]
fn funding_after_withdraw_starts_a_new_cycle() {
    let test = FundMeTest::setup();
    let funders = fund_with_additional_accounts(&test, 2);
    test.fund_me.cheaper_withdraw(&test.owner);

    test.fund_me.fund(&funders[2], &SEND_VALUE);

    assert_eq!(test.fund_me.get_funder(&0), funders[2]);
    assert_eq!(
        test.fund_me.try_get_funder(&1),
        Err(Ok(FundMeError::FunderIndexOutOfRange))
    );
    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&funders[1]),
        0
    );
    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&funders[2]),
        SEND_VALUE
    );
}
