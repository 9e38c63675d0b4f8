use crate::{asset::Side, error::AmmError, instructions::Context, math};
use anchor_lang::prelude::*;

/// Validate the initialize parameters
pub fn validate(ctx: &Context, amount0: u128, amount1: u128) -> Result<()> {
    // a pool is seeded exactly once
    require!(!ctx.state.initialized, AmmError::AlreadyInitialized);

    // check amounts are positive
    require!(amount0 > 0 && amount1 > 0, AmmError::ZeroAmount);

    Ok(())
}

/// Calculate shares for a seeding deposit: `floor(sqrt(amount0 * amount1))`
pub fn calculate_seed_shares(amount0: u128, amount1: u128) -> Result<u128> {
    let shares = math::sqrt_product(amount0, amount1)?;

    require!(shares > 0, AmmError::InsufficientLiquidityMinted);

    Ok(shares)
}

/// Credit both reserves, mint `shares` and stage the inbound transfers.
pub(crate) fn seed(ctx: &mut Context, amount0: u128, amount1: u128, shares: u128) -> Result<()> {
    let caller = ctx.caller;

    ctx.state.reserves.credit(Side::Asset0, amount0)?;
    ctx.state.reserves.credit(Side::Asset1, amount1)?;
    ctx.state.shares.mint(&caller, shares)?;

    ctx.settlement.pull(Side::Asset0, caller, amount0);
    ctx.settlement.pull(Side::Asset1, caller, amount1);

    Ok(())
}

/// Handler function for seeding a new AMM pool
pub fn initialize_handler(ctx: &mut Context, amount0: u128, amount1: u128) -> Result<u128> {
    // validate inputs
    validate(ctx, amount0, amount1)?;

    let shares = calculate_seed_shares(amount0, amount1)?;

    seed(ctx, amount0, amount1, shares)?;
    ctx.state.initialized = true;

    msg!(
        "Pool initialized with reserves {} / {}, {} shares",
        amount0,
        amount1,
        shares
    );

    Ok(shares)
}
