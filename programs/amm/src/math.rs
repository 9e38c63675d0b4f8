//! Checked integer arithmetic for reserve and share accounting.
//!
//! Amounts are `u128` in the smallest unit of each asset. Products of two
//! amounts are carried in [`U256`] so that `a * b / c` never overflows before
//! the division; only a quotient that does not fit back into `u128` is an
//! error. Every division floors.

use anchor_lang::prelude::*;

use crate::{constants::FEE_BASIS_POINTS, error::AmmError};

pub use wide::U256;

// kept apart from the anchor prelude, whose `Result` alias takes one parameter
mod wide {
    uint::construct_uint! {
        /// 256-bit unsigned integer for intermediate products.
        pub struct U256(4);
    }
}

/// Narrow a 256-bit intermediate back into an amount.
pub fn to_u128(value: U256) -> Result<u128> {
    require!(value <= U256::from(u128::MAX), AmmError::ArithmeticOverflow);
    Ok(value.low_u128())
}

/// `floor(a * b / c)`.
pub fn mul_div(a: u128, b: u128, c: u128) -> Result<u128> {
    require!(c != 0, AmmError::DivisionByZero);

    let quotient = product(a, b) / U256::from(c);
    to_u128(quotient)
}

/// Exact `a * b`, used for the constant-product invariant `k`.
pub fn product(a: u128, b: u128) -> U256 {
    // two u128 factors always fit in 256 bits
    U256::from(a) * U256::from(b)
}

/// `floor(sqrt(a * b))`, the geometric mean of two deposits.
pub fn sqrt_product(a: u128, b: u128) -> Result<u128> {
    to_u128(product(a, b).integer_sqrt())
}

pub fn checked_add(a: u128, b: u128) -> Result<u128> {
    Ok(a.checked_add(b).ok_or(AmmError::ArithmeticOverflow)?)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128> {
    Ok(a.checked_sub(b).ok_or(AmmError::ArithmeticUnderflow)?)
}

/// Discount `amount` by a fee in basis points, rounding the remainder down.
pub fn apply_fee(amount: u128, fee: u16) -> Result<u128> {
    require!(fee <= FEE_BASIS_POINTS, AmmError::InvalidFee);

    let keep = u128::from(FEE_BASIS_POINTS - fee);
    mul_div(amount, keep, u128::from(FEE_BASIS_POINTS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: anchor_lang::error::Error) -> Option<u32> {
        match err {
            anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
            _ => None,
        }
    }

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div(7, 3, 2).unwrap(), 10);
        assert_eq!(mul_div(20000, 20000, 20001).unwrap(), 19999);
        assert_eq!(mul_div(0, 5, 3).unwrap(), 0);
    }

    #[test]
    fn mul_div_keeps_full_width_intermediate() {
        // 1e22 * 1e22 overflows u128 but the quotient does not
        let ether = 10_000 * 10u128.pow(18);
        assert_eq!(mul_div(ether, ether, ether).unwrap(), ether);
        assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX).unwrap(), u128::MAX);
    }

    #[test]
    fn mul_div_rejects_zero_divisor() {
        let err = mul_div(1, 1, 0).unwrap_err();
        assert_eq!(code(err), Some(u32::from(AmmError::DivisionByZero)));
    }

    #[test]
    fn mul_div_rejects_wide_quotient() {
        let err = mul_div(u128::MAX, 2, 1).unwrap_err();
        assert_eq!(code(err), Some(u32::from(AmmError::ArithmeticOverflow)));
    }

    #[test]
    fn add_and_sub_are_checked() {
        assert_eq!(checked_add(1, 2).unwrap(), 3);
        assert_eq!(checked_sub(3, 2).unwrap(), 1);

        let err = checked_add(u128::MAX, 1).unwrap_err();
        assert_eq!(code(err), Some(u32::from(AmmError::ArithmeticOverflow)));
        let err = checked_sub(1, 2).unwrap_err();
        assert_eq!(code(err), Some(u32::from(AmmError::ArithmeticUnderflow)));
    }

    #[test]
    fn sqrt_product_is_floored_geometric_mean() {
        assert_eq!(sqrt_product(10000, 10000).unwrap(), 10000);
        assert_eq!(sqrt_product(2, 3).unwrap(), 2);
        assert_eq!(sqrt_product(1, 1).unwrap(), 1);
        assert_eq!(sqrt_product(u128::MAX, u128::MAX).unwrap(), u128::MAX);
    }

    #[test]
    fn fee_discount() {
        assert_eq!(apply_fee(10_000, 0).unwrap(), 10_000);
        assert_eq!(apply_fee(10_000, 30).unwrap(), 9_970);
        assert_eq!(apply_fee(1, 30).unwrap(), 0);
        assert!(apply_fee(1, FEE_BASIS_POINTS + 1).is_err());
    }
}
