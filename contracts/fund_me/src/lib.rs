#![no_std]

mod contract;
pub mod errors;
mod events;
mod fund_me;
mod storage;

pub use contract::{FundMe, FundMeClient};
pub use fund_me::FundMeTrait;
