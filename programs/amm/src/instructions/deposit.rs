use crate::{asset::Side, error::AmmError, instructions::Context};
use anchor_lang::prelude::*;

/// Validate single-sided deposit parameters
pub fn validate(ctx: &Context, amount: u128) -> Result<()> {
    ctx.state.require_initialized()?;
    ctx.config.can_rebalance(&ctx.caller)?;

    require!(amount > 0, AmmError::ZeroAmount);

    Ok(())
}

/// Handler function for adding to one reserve without issuing shares
pub fn deposit_handler(ctx: &mut Context, side: Side, amount: u128) -> Result<()> {
    validate(ctx, amount)?;

    let caller = ctx.caller;
    ctx.state.reserves.credit(side, amount)?;
    ctx.settlement.pull(side, caller, amount);

    msg!("Deposited {} into reserve {:?}", amount, side);

    Ok(())
}
