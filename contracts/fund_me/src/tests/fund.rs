extern crate std;

use crowdfund::constants::ONE_NATIVE;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{AuthorizedFunction, AuthorizedInvocation},
    IntoVal, Symbol,
};

use super::setup::{FundMeTest, SEND_VALUE, STARTING_BALANCE};
use crate::errors::FundMeError;

/// 50 USD at the mock's 2000 USD answer.
const MINIMUM_NATIVE: i128 = ONE_NATIVE / 40;

#[test]
fn fails_if_you_dont_send_enough() {
    let test = FundMeTest::setup();

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &0),
        Err(Ok(FundMeError::InsufficientFunding))
    );

    assert_eq!(test.fund_me.get_address_to_amount_funded(&test.owner), 0);
    assert_eq!(
        test.fund_me.try_get_funder(&0),
        Err(Ok(FundMeError::FunderIndexOutOfRange))
    );
    assert_eq!(test.token.balance(&test.owner), STARTING_BALANCE);
    assert_eq!(test.token.balance(&test.fund_me.address), 0);
}

#[test]
fn minimum_is_inclusive() {
    let test = FundMeTest::setup();

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &(MINIMUM_NATIVE - 1)),
        Err(Ok(FundMeError::InsufficientFunding))
    );

    test.fund_me.fund(&test.owner, &MINIMUM_NATIVE);
    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&test.owner),
        MINIMUM_NATIVE
    );
}

#[test]
fn negative_amount_is_not_enough() {
    let test = FundMeTest::setup();

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &-SEND_VALUE),
        Err(Ok(FundMeError::InsufficientFunding))
    );
}

#[test]
fn updates_the_amount_funded_data_structure() {
    let test = FundMeTest::setup();

    test.fund_me.fund(&test.owner, &SEND_VALUE);

    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&test.owner),
        SEND_VALUE
    );
    assert_eq!(test.token.balance(&test.fund_me.address), SEND_VALUE);
    assert_eq!(
        test.token.balance(&test.owner),
        STARTING_BALANCE - SEND_VALUE
    );
}

#[test]
fn adds_funder_to_the_funder_list_once() {
    let test = FundMeTest::setup();
    let funder = test.funded_account();

    test.fund_me.fund(&funder, &SEND_VALUE);
    test.fund_me.fund(&funder, &SEND_VALUE);

    assert_eq!(test.fund_me.get_funder(&0), funder);
    assert_eq!(
        test.fund_me.try_get_funder(&1),
        Err(Ok(FundMeError::FunderIndexOutOfRange))
    );
    assert_eq!(
        test.fund_me.get_address_to_amount_funded(&funder),
        2 * SEND_VALUE
    );
}

#[test]
fn funders_are_listed_in_funding_order() {
    let test = FundMeTest::setup();
    let first = test.funded_account();
    let second = test.funded_account();

    test.fund_me.fund(&first, &SEND_VALUE);
    test.fund_me.fund(&second, &SEND_VALUE);
    test.fund_me.fund(&first, &SEND_VALUE);

    assert_eq!(test.fund_me.get_funder(&0), first);
    assert_eq!(test.fund_me.get_funder(&1), second);
}

#[test]
fn fund_requires_funder_auth() {
    let test = FundMeTest::setup();
    let funder = test.funded_account();

    test.fund_me.fund(&funder, &SEND_VALUE);

    assert_eq!(
        test.env.auths(),
        [(
            funder.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.fund_me.address.clone(),
                    Symbol::new(&test.env, "fund"),
                    (&funder, SEND_VALUE).into_val(&test.env),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        test.token.address.clone(),
                        symbol_short!("transfer"),
                        (&funder, &test.fund_me.address, SEND_VALUE).into_val(&test.env),
                    )),
                    sub_invocations: std::vec![],
                }],
            },
        ),]
    );
}

#[test]
fn minimum_follows_the_price_feed() {
    let test = FundMeTest::setup();

    // 1 USD per native unit
    test.price_feed.update_answer(&1_00000000);

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &SEND_VALUE),
        Err(Ok(FundMeError::InsufficientFunding))
    );
    test.fund_me.fund(&test.owner, &(50 * SEND_VALUE));
}

#[test]
fn non_positive_price_is_rejected() {
    let test = FundMeTest::setup();

    test.price_feed.update_answer(&0);

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &SEND_VALUE),
        Err(Ok(FundMeError::PriceFeedNonPositive))
    );
}

#[test]
fn overflowing_conversion_is_rejected() {
    let test = FundMeTest::setup();

    test.price_feed.update_answer(&i128::MAX);

    assert_eq!(
        test.fund_me.try_fund(&test.owner, &SEND_VALUE),
        Err(Ok(FundMeError::MathOverflow))
    );
    assert_eq!(test.fund_me.get_address_to_amount_funded(&test.owner), 0);
}
