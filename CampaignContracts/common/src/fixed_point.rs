//! Fixed-point arithmetic over `i128` with an implicit scale of `10^18`.
//!
//! Every helper returns `None` on overflow so callers can map it to their own
//! contract error. Products are taken in `I256`, so only a quotient that does
//! not fit back into `i128` overflows.

use soroban_sdk::{Env, I256};

/// `1.0` in fixed point.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// `a * b / c`, truncated toward zero.
pub fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> Option<i128> {
    if c == 0 {
        return None;
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
}

/// Multiplies an amount by a fixed-point rate.
pub fn mul_scaled(env: &Env, amount: i128, rate: i128) -> Option<i128> {
    mul_div(env, amount, rate, SCALE)
}

/// Reward tokens bought by `value` at `price` (both scaled), after a bonus `rate`.
pub fn token_amount(env: &Env, value: i128, rate: i128, price: i128) -> Option<i128> {
    mul_div(env, value, rate, price)
}

/// Applies a discount to `price`.
///
/// A percentage discount takes `rate` off as a fraction of `price`; a flat one
/// subtracts `rate` and never goes below zero.
pub fn apply_discount(env: &Env, price: i128, rate: i128, is_percentage: bool) -> Option<i128> {
    if is_percentage {
        mul_scaled(env, price, SCALE.checked_sub(rate)?)
    } else {
        Some(price.checked_sub(rate)?.max(0))
    }
}

/// Smallest accepted contribution for a token of `decimals` sold at `price`.
pub fn min_contribution(price: i128, decimals: u32) -> i128 {
    match 10i128.checked_pow(decimals) {
        Some(unit) => (price / unit).max(1),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_contribution() {
        assert_eq!(min_contribution(3 * SCALE, 18), 3);
        assert_eq!(min_contribution(3 * SCALE / 10, 15), 300);
        assert_eq!(min_contribution(3 * SCALE / 10, 18), 1);
        assert_eq!(min_contribution(SCALE, 60), 1);
    }

    #[test]
    fn test_percentage_discount() {
        let env = Env::default();
        // 9.95 with 7 decimals, 10% off
        assert_eq!(apply_discount(&env, 99_500_000, SCALE / 10, true), Some(89_550_000));
        assert_eq!(apply_discount(&env, 1002, SCALE / 10, true), Some(901));
        assert_eq!(apply_discount(&env, 1000, SCALE / 10, true), Some(900));
        assert_eq!(apply_discount(&env, 1000, SCALE, true), Some(0));
    }

    #[test]
    fn test_flat_discount_floors_at_zero() {
        let env = Env::default();
        assert_eq!(apply_discount(&env, 1000, 900, false), Some(100));
        assert_eq!(apply_discount(&env, 1000, 1500, false), Some(0));
    }

    #[test]
    fn test_post_payment_rate() {
        let env = Env::default();
        let rate = SCALE / 100;
        assert_eq!(mul_scaled(&env, 100_100, rate), Some(1001));
        assert_eq!(mul_scaled(&env, 99_999, rate).map(|fee| fee.max(1000)), Some(1000));
    }

    #[test]
    fn test_partner_share() {
        let env = Env::default();
        assert_eq!(mul_scaled(&env, 900, SCALE / 50), Some(18));
        assert_eq!(mul_scaled(&env, 901, SCALE / 10), Some(90));
        assert_eq!(mul_scaled(&env, 100, SCALE / 10), Some(10));
    }

    #[test]
    fn test_token_amount() {
        let env = Env::default();
        // 2 units at a price of 0.5 with a 1.5x bonus
        assert_eq!(token_amount(&env, 2 * SCALE, 3 * SCALE / 2, SCALE / 2), Some(6 * SCALE));
        assert_eq!(token_amount(&env, i128::MAX, SCALE, 1), None);
        assert_eq!(token_amount(&env, SCALE, SCALE, 0), None);
    }

    #[test]
    fn test_eighteen_decimal_amounts() {
        let env = Env::default();
        // 200 units bought at 1.0 with no bonus: the product is 2 * 10^38
        assert_eq!(token_amount(&env, 200 * SCALE, SCALE, SCALE), Some(200 * SCALE));
        assert_eq!(
            token_amount(&env, 1_000_000 * SCALE, 3 * SCALE / 2, SCALE),
            Some(1_500_000 * SCALE)
        );
        // 1% of 20_000 units raised
        assert_eq!(mul_scaled(&env, 20_000 * SCALE, SCALE / 100), Some(200 * SCALE));
        assert_eq!(apply_discount(&env, 500 * SCALE, SCALE / 5, true), Some(400 * SCALE));
    }
}
