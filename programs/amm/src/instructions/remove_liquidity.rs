use crate::{
    asset::Side,
    error::AmmError,
    instructions::Context,
    math,
    state::ReservePair,
};
use anchor_lang::prelude::*;

/// Validate remove liquidity parameters
pub fn validate(ctx: &Context, shares: u128) -> Result<()> {
    ctx.state.require_initialized()?;

    // check share amount is positive
    require!(shares > 0, AmmError::ZeroAmount);

    // check caller holds enough shares
    require!(
        ctx.state.shares.balance_of(&ctx.caller) >= shares,
        AmmError::InsufficientShares
    );

    Ok(())
}

/// Calculate reserves released by burning `shares`
pub fn calculate_withdraw_amounts(
    reserves: &ReservePair,
    total_supply: u128,
    shares: u128,
) -> Result<(u128, u128)> {
    // calculate proportional amounts
    let amount0 = math::mul_div(reserves.reserve0(), shares, total_supply)?;
    let amount1 = math::mul_div(reserves.reserve1(), shares, total_supply)?;

    require!(
        amount0 > 0 && amount1 > 0,
        AmmError::InsufficientLiquidityBurned
    );

    Ok((amount0, amount1))
}

/// Handler function for removing liquidity from the pool
pub fn remove_liquidity_handler(
    ctx: &mut Context,
    shares: u128,
    min0: u128,
    min1: u128,
) -> Result<(u128, u128)> {
    // validate inputs
    validate(ctx, shares)?;

    let caller = ctx.caller;
    let total_supply = ctx.state.shares.total_supply();

    // calculate withdraw amounts
    let (amount0, amount1) =
        calculate_withdraw_amounts(&ctx.state.reserves, total_supply, shares)?;

    // check slippage protection
    require!(amount0 >= min0, AmmError::SlippageExceeded);
    require!(amount1 >= min1, AmmError::SlippageExceeded);

    // burn shares first
    ctx.state.shares.burn(&caller, shares)?;
    ctx.state.reserves.debit(Side::Asset0, amount0)?;
    ctx.state.reserves.debit(Side::Asset1, amount1)?;

    ctx.settlement.push(Side::Asset0, caller, amount0);
    ctx.settlement.push(Side::Asset1, caller, amount1);

    Ok((amount0, amount1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PoolConfig, PoolState};
    use anchor_lang::error::Error;

    fn state_with(holder: &Pubkey, reserve0: u128, reserve1: u128, supply: u128) -> PoolState {
        let mut state = PoolState {
            reserves: ReservePair::new(reserve0, reserve1),
            initialized: true,
            ..Default::default()
        };
        state.shares.mint(holder, supply).unwrap();
        state
    }

    fn config() -> PoolConfig {
        PoolConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        )
    }

    #[test]
    fn withdraw_amounts_floor() {
        let reserves = ReservePair::new(20_001, 19_999);
        assert_eq!(
            calculate_withdraw_amounts(&reserves, 20_000, 10_000).unwrap(),
            (10_000, 9_999)
        );
    }

    #[test]
    fn full_exit_drains_pool() {
        let config = config();
        let holder = Pubkey::new_unique();
        let mut ctx = Context::new(holder, &config, state_with(&holder, 500, 200, 316));

        assert_eq!(remove_liquidity_handler(&mut ctx, 316, 0, 0).unwrap(), (500, 200));
        assert!(ctx.state.reserves.is_empty());
        assert_eq!(ctx.state.shares.total_supply(), 0);
        assert!(ctx.state.initialized);
    }

    #[test]
    fn rejects_more_than_balance() {
        let config = config();
        let holder = Pubkey::new_unique();
        let mut ctx = Context::new(holder, &config, state_with(&holder, 500, 500, 500));

        assert_eq!(
            remove_liquidity_handler(&mut ctx, 501, 0, 0).unwrap_err(),
            Error::from(AmmError::InsufficientShares)
        );

        let stranger = Pubkey::new_unique();
        let mut ctx = Context::new(stranger, &config, state_with(&holder, 500, 500, 500));
        assert_eq!(
            remove_liquidity_handler(&mut ctx, 1, 0, 0).unwrap_err(),
            Error::from(AmmError::InsufficientShares)
        );
    }

    #[test]
    fn rejects_dust_burn() {
        let config = config();
        let holder = Pubkey::new_unique();
        let mut ctx = Context::new(holder, &config, state_with(&holder, 10, 1_000, 1_000));

        assert_eq!(
            remove_liquidity_handler(&mut ctx, 50, 0, 0).unwrap_err(),
            Error::from(AmmError::InsufficientLiquidityBurned)
        );
    }

    #[test]
    fn enforces_minimum_outputs() {
        let config = config();
        let holder = Pubkey::new_unique();
        let mut ctx = Context::new(holder, &config, state_with(&holder, 100, 100, 100));

        assert_eq!(
            remove_liquidity_handler(&mut ctx, 50, 50, 51).unwrap_err(),
            Error::from(AmmError::SlippageExceeded)
        );
    }
}
