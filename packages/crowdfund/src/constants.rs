// ################################################################
//                             Storage
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             Pricing
// ################################################################

/// Decimals every USD value is normalized to before comparison.
pub const USD_DECIMALS: u32 = 18;
pub const USD_PRECISION: i128 = 1_000_000_000_000_000_000; // expo = -18

/// Smallest contribution accepted by FundMe, in USD with `USD_DECIMALS`.
pub const MINIMUM_USD: i128 = 50 * USD_PRECISION;

/// Decimals of the native asset contract (1 XLM = 10^7 stroops).
pub const NATIVE_DECIMALS: u32 = 7;
pub const ONE_NATIVE: i128 = 10_000_000;

// ################################################################
//                             Mocks
// ################################################################

pub const MOCK_DECIMALS: u32 = 8;
pub const MOCK_INITIAL_ANSWER: i128 = 2_000_00000000; // 2000 USD, expo = -8
