use crate::{
    asset::Side,
    error::AmmError,
    instructions::Context,
    math::{self, U256},
    state::{PoolConfig, PoolState, ReservePair, SwapRounding},
};
use anchor_lang::prelude::*;

/// Validate swap parameters
pub fn validate(state: &PoolState, amount_in: u128) -> Result<()> {
    state.require_initialized()?;

    // check positive amounts
    require!(amount_in > 0, AmmError::ZeroAmount);

    Ok(())
}

/// Constant product pricing: returns amount_out for `amount_in` of the input side.
pub fn calculate_amount_out(
    config: &PoolConfig,
    reserve_in: u128,
    reserve_out: u128,
    amount_in: u128,
) -> Result<u128> {
    // pool must have liquidity on both sides
    require!(
        reserve_in > 0 && reserve_out > 0,
        AmmError::InsufficientLiquidity
    );

    let effective_in = math::apply_fee(amount_in, config.fee)?;
    let denominator = math::checked_add(reserve_in, effective_in)?;

    let amount_out = match config.rounding {
        SwapRounding::FloorReserve => {
            // reserve_out_new = floor(k / (reserve_in + effective_in))
            let reserve_out_new = math::mul_div(reserve_in, reserve_out, denominator)?;
            math::checked_sub(reserve_out, reserve_out_new)?
        }
        SwapRounding::FloorOutput => math::mul_div(reserve_out, effective_in, denominator)?,
    };

    require!(
        amount_out > 0 && amount_out < reserve_out,
        AmmError::InsufficientLiquidity
    );

    Ok(amount_out)
}

/// Price a swap against `state` without changing anything
pub fn quote(config: &PoolConfig, state: &PoolState, side_in: Side, amount_in: u128) -> Result<u128> {
    validate(state, amount_in)?;

    let (reserve_in, reserve_out) = state.reserves.oriented(side_in);
    calculate_amount_out(config, reserve_in, reserve_out, amount_in)
}

/// Post-condition on `k` after a swap.
///
/// `FloorOutput` never lets `k` fall. `FloorReserve` floors the new output
/// reserve, so `k` may fall by less than the divisor of that floor.
pub fn check_invariant(
    config: &PoolConfig,
    before: &ReservePair,
    after: &ReservePair,
    reserve_in: u128,
    amount_in: u128,
) -> Result<()> {
    let (k_before, k_after) = (before.k(), after.k());

    match config.rounding {
        SwapRounding::FloorOutput => {
            require!(k_after >= k_before, AmmError::InvariantViolation);
        }
        SwapRounding::FloorReserve => {
            let divisor = U256::from(reserve_in) + U256::from(math::apply_fee(amount_in, config.fee)?);
            require!(k_after + divisor > k_before, AmmError::InvariantViolation);
        }
    }

    Ok(())
}

pub fn swap_handler(ctx: &mut Context, side_in: Side, amount_in: u128, min_out: u128) -> Result<u128> {
    let caller = ctx.caller;
    let side_out = side_in.other();

    // calculate output amount
    let amount_out = quote(ctx.config, &ctx.state, side_in, amount_in)?;

    // slippage protection
    require!(amount_out >= min_out, AmmError::SlippageExceeded);

    let before = ctx.state.reserves;
    ctx.state.reserves.credit(side_in, amount_in)?;
    ctx.state.reserves.debit(side_out, amount_out)?;
    check_invariant(
        ctx.config,
        &before,
        &ctx.state.reserves,
        before.reserve(side_in),
        amount_in,
    )?;

    // 1. user -> pool (asset in)
    ctx.settlement.pull(side_in, caller, amount_in);
    // 2. pool -> user (asset out)
    ctx.settlement.push(side_out, caller, amount_out);

    msg!("Swapped {} {:?} for {} {:?}", amount_in, side_in, amount_out, side_out);

    Ok(amount_out)
}
