//! Utility functions

use crate::constants::PRICE_DECIMALS;

/// Rounds a price to the listing precision (two decimal places).
pub fn round_price(price: f64) -> f64 {
    let factor = 10f64.powi(PRICE_DECIMALS as i32);
    (price * factor).round() / factor
}
