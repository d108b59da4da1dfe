use crowdfund::error::ErrorCode;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    #[doc = "FundMe__NotOwner"]
    NotOwner = 1,
    #[doc = "You need to spend more ETH!"]
    InsufficientFunding = 2,
    #[doc = "Funder index is past the end of the funder list"]
    FunderIndexOutOfRange = 3,
    #[doc = "Price feed answered with a non-positive price"]
    PriceFeedNonPositive = 4,
    #[doc = "Price feed reports more decimals than USD values carry"]
    InvalidPriceFeedDecimals = 5,
    MathOverflow = 6,
}

impl From<ErrorCode> for FundMeError {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::OracleNonPositive => FundMeError::PriceFeedNonPositive,
            ErrorCode::InvalidOracleDecimals => FundMeError::InvalidPriceFeedDecimals,
            ErrorCode::MathError => FundMeError::MathOverflow,
        }
    }
}
