use soroban_sdk::contracterror;

pub type CrowdfundResult<T = ()> = Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 100,
    OracleNonPositive = 101,
    InvalidOracleDecimals = 102,
}
