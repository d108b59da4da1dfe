#![no_std]

mod contract;
pub mod errors;
mod storage;

pub use contract::{MockPriceFeed, MockPriceFeedClient};
