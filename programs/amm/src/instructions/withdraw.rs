use crate::{asset::Side, error::AmmError, instructions::Context};
use anchor_lang::prelude::*;

/// Validate single-sided withdraw parameters
pub fn validate(ctx: &Context, side: Side, amount: u128) -> Result<()> {
    ctx.state.require_initialized()?;
    ctx.config.can_rebalance(&ctx.caller)?;

    require!(amount > 0, AmmError::ZeroAmount);

    // check pool holds enough of the asset
    require!(
        ctx.state.reserves.reserve(side) >= amount,
        AmmError::InsufficientReserve
    );

    Ok(())
}

/// Handler function for taking from one reserve without burning shares
pub fn withdraw_handler(ctx: &mut Context, side: Side, amount: u128) -> Result<()> {
    validate(ctx, side, amount)?;

    let caller = ctx.caller;
    ctx.state.reserves.debit(side, amount)?;
    ctx.settlement.push(side, caller, amount);

    msg!("Withdrew {} from reserve {:?}", amount, side);

    Ok(())
}
