use anchor_lang::prelude::*;

use crate::{
    asset::{FungibleAsset, Side},
    error::AmmError,
    instructions::{self, Context},
    state::{PoolConfig, PoolState},
};

/// Two-asset constant-product pool.
///
/// Every mutating operation runs as one transaction: the handler works on a
/// staged copy of [`PoolState`] and records its transfers, the transfers are
/// settled against the asset ledgers, and only then is the staged state
/// committed. An error at any step leaves the pool and both assets unchanged.
#[derive(Debug)]
pub struct Amm<A: FungibleAsset> {
    config: PoolConfig,
    assets: [A; 2],
    state: PoolState,
}

impl<A: FungibleAsset> Amm<A> {
    /// Create an uninitialized pool over `asset0` and `asset1`.
    pub fn new(config: PoolConfig, asset0: A, asset1: A) -> Result<Self> {
        config.validate()?;
        require!(asset0.id() == config.asset0, AmmError::AssetMismatch);
        require!(asset1.id() == config.asset1, AmmError::AssetMismatch);

        Ok(Self {
            config,
            assets: [asset0, asset1],
            state: PoolState::default(),
        })
    }

    /// Seed both reserves and mint the first shares to `caller`
    pub fn initialize(&mut self, caller: &Pubkey, amount0: u128, amount1: u128) -> Result<u128> {
        self.transact(caller, |ctx| {
            instructions::initialize_handler(ctx, amount0, amount1)
        })
    }

    /// Deposit both assets and mint proportional shares to `caller`
    pub fn add_liquidity(&mut self, caller: &Pubkey, amount0: u128, amount1: u128) -> Result<u128> {
        self.add_liquidity_with_limit(caller, amount0, amount1, 0)
    }

    pub fn add_liquidity_with_limit(
        &mut self,
        caller: &Pubkey,
        amount0: u128,
        amount1: u128,
        min_shares: u128,
    ) -> Result<u128> {
        self.transact(caller, |ctx| {
            instructions::add_liquidity_handler(ctx, amount0, amount1, min_shares)
        })
    }

    /// Burn `shares` of `caller` for their part of both reserves
    pub fn remove_liquidity(&mut self, caller: &Pubkey, shares: u128) -> Result<(u128, u128)> {
        self.remove_liquidity_with_limit(caller, shares, 0, 0)
    }

    pub fn remove_liquidity_with_limit(
        &mut self,
        caller: &Pubkey,
        shares: u128,
        min0: u128,
        min1: u128,
    ) -> Result<(u128, u128)> {
        self.transact(caller, |ctx| {
            instructions::remove_liquidity_handler(ctx, shares, min0, min1)
        })
    }

    /// Add `amount` of `asset` to its reserve without issuing shares
    pub fn deposit(&mut self, caller: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        let side = self.config.side_of(asset)?;
        self.transact(caller, |ctx| instructions::deposit_handler(ctx, side, amount))
    }

    /// Take `amount` of `asset` out of its reserve without burning shares
    pub fn withdraw(&mut self, caller: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        let side = self.config.side_of(asset)?;
        self.transact(caller, |ctx| instructions::withdraw_handler(ctx, side, amount))
    }

    /// Sell `amount_in` of `asset_in` for the other asset, returning the amount received
    pub fn swap(&mut self, caller: &Pubkey, asset_in: &Pubkey, amount_in: u128) -> Result<u128> {
        self.swap_with_limit(caller, asset_in, amount_in, 0)
    }

    pub fn swap_with_limit(
        &mut self,
        caller: &Pubkey,
        asset_in: &Pubkey,
        amount_in: u128,
        min_out: u128,
    ) -> Result<u128> {
        let side = self.config.side_of(asset_in)?;
        self.transact(caller, |ctx| {
            instructions::swap_handler(ctx, side, amount_in, min_out)
        })
    }

    /// Output `swap` would currently return for `amount_in` of `asset_in`
    pub fn quote_swap(&self, asset_in: &Pubkey, amount_in: u128) -> Result<u128> {
        let side = self.config.side_of(asset_in)?;
        instructions::swap::quote(&self.config, &self.state, side, amount_in)
    }

    /// Amounts `remove_liquidity` would currently release for `shares`
    pub fn quote_remove_liquidity(&self, shares: u128) -> Result<(u128, u128)> {
        self.state.require_initialized()?;
        require!(shares > 0, AmmError::ZeroAmount);
        require!(
            shares <= self.state.shares.total_supply(),
            AmmError::InsufficientShares
        );

        instructions::remove_liquidity::calculate_withdraw_amounts(
            &self.state.reserves,
            self.state.shares.total_supply(),
            shares,
        )
    }

    pub fn reserve0(&self) -> u128 {
        self.state.reserves.reserve0()
    }

    pub fn reserve1(&self) -> u128 {
        self.state.reserves.reserve1()
    }

    pub fn reserve(&self, side: Side) -> u128 {
        self.state.reserves.reserve(side)
    }

    pub fn balance_of(&self, holder: &Pubkey) -> u128 {
        self.state.shares.balance_of(holder)
    }

    pub fn total_supply(&self) -> u128 {
        self.state.shares.total_supply()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn address(&self) -> Pubkey {
        self.config.address
    }

    pub fn asset(&self, side: Side) -> &A {
        &self.assets[side.index()]
    }

    pub fn asset_by_id(&self, id: &Pubkey) -> Result<&A> {
        let side = self.config.side_of(id)?;
        Ok(self.asset(side))
    }

    /// Set how much of `holder`'s `asset` the pool may pull. Replaces any
    /// previous allowance.
    pub fn approve(&mut self, holder: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        let side = self.config.side_of(asset)?;
        let pool = self.config.address;
        self.assets[side.index()].approve(holder, &pool, amount)
    }

    fn transact<T>(
        &mut self,
        caller: &Pubkey,
        handler: impl FnOnce(&mut Context) -> Result<T>,
    ) -> Result<T> {
        let mut ctx = Context::new(*caller, &self.config, self.state.clone());
        let output = handler(&mut ctx)?;

        let Context {
            state, settlement, ..
        } = ctx;
        settlement.execute(&mut self.assets)?;

        self.state = state;
        Ok(output)
    }
}
