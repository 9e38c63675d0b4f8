use crate::{
    error::AmmError,
    instructions::{initialize, Context},
    math,
    state::ReservePair,
};
use anchor_lang::prelude::*;

/// Validate add liquidity parameters
pub fn validate(ctx: &Context, amount0: u128, amount1: u128) -> Result<()> {
    ctx.state.require_initialized()?;

    // check amounts are positive
    require!(amount0 > 0 && amount1 > 0, AmmError::ZeroAmount);

    Ok(())
}

/// Calculate shares for a deposit into a pool that already has holders.
///
/// Amounts are taken at face value; shares follow the smaller of the two
/// ratios, so any excess of an off-ratio deposit stays with the pool.
pub fn calculate_shares(
    reserves: &ReservePair,
    total_supply: u128,
    amount0: u128,
    amount1: u128,
) -> Result<u128> {
    let from0 = math::mul_div(total_supply, amount0, reserves.reserve0())?;
    let from1 = math::mul_div(total_supply, amount1, reserves.reserve1())?;

    // take the minimum to maintain pool ratio
    let shares = std::cmp::min(from0, from1);

    require!(shares > 0, AmmError::InsufficientLiquidityMinted);

    Ok(shares)
}

/// Handler function for adding liquidity to the pool
pub fn add_liquidity_handler(
    ctx: &mut Context,
    amount0: u128,
    amount1: u128,
    min_shares: u128,
) -> Result<u128> {
    // validate inputs
    validate(ctx, amount0, amount1)?;

    let total_supply = ctx.state.shares.total_supply();

    // calculate shares based on deposit type
    let shares = if total_supply == 0 {
        msg!("Drained pool detected, reseeding");
        initialize::calculate_seed_shares(amount0, amount1)?
    } else {
        calculate_shares(&ctx.state.reserves, total_supply, amount0, amount1)?
    };

    // check slippage protection
    require!(shares >= min_shares, AmmError::SlippageExceeded);

    initialize::seed(ctx, amount0, amount1, shares)?;

    Ok(shares)
}
