//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1";
pub const PRICE_DECIMALS: u32 = 2;
