use anchor_lang::prelude::*;

use crate::{
    asset::Side,
    constants::{DEFAULT_FEE_BASIS_POINTS, MAX_FEE_BASIS_POINTS},
    error::AmmError,
};

/// How a swap's floored division is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapRounding {
    /// Floor the new output reserve, `amount_out = reserve_out - floor(k / reserve_in_new)`.
    /// Reproduces the outputs of deployed pools; `k` may drop by less than
    /// one unit of `reserve_in_new`.
    #[default]
    FloorReserve,
    /// Floor the output amount itself, so `k` never decreases.
    FloorOutput,
}

/// AMM Pool Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Identity the pool holds its reserves under on both asset ledgers
    pub address: Pubkey,

    /// First asset address
    pub asset0: Pubkey,

    /// Second asset address
    pub asset1: Pubkey,

    /// Trading fee in basis points (100 = 1%)
    pub fee: u16,

    /// Rounding policy for swap outputs
    pub rounding: SwapRounding,

    /// Optional authority allowed to rebalance reserves single-sidedly
    pub authority: Option<Pubkey>,
}

impl PoolConfig {
    pub fn new(address: Pubkey, asset0: Pubkey, asset1: Pubkey) -> Self {
        Self {
            address,
            asset0,
            asset1,
            fee: DEFAULT_FEE_BASIS_POINTS,
            rounding: SwapRounding::default(),
            authority: None,
        }
    }

    pub fn with_fee(mut self, fee: u16) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_rounding(mut self, rounding: SwapRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    /// Validate the pool parameters
    pub fn validate(&self) -> Result<()> {
        // validate fee is within acceptable range
        require!(self.fee <= MAX_FEE_BASIS_POINTS, AmmError::InvalidFee);

        // ensure asset 0 and 1 are different
        require!(self.asset0 != self.asset1, AmmError::IdenticalAssets);

        Ok(())
    }

    /// Resolve an asset address to its side of the pool
    pub fn side_of(&self, asset: &Pubkey) -> Result<Side> {
        if *asset == self.asset0 {
            Ok(Side::Asset0)
        } else if *asset == self.asset1 {
            Ok(Side::Asset1)
        } else {
            err!(AmmError::UnknownAsset)
        }
    }

    pub fn asset(&self, side: Side) -> Pubkey {
        match side {
            Side::Asset0 => self.asset0,
            Side::Asset1 => self.asset1,
        }
    }

    /// Check if the caller may use the single-sided rebalancing primitives
    pub fn can_rebalance(&self, caller: &Pubkey) -> Result<()> {
        if let Some(authority) = self.authority {
            require!(authority == *caller, AmmError::Unauthorized);
        }
        Ok(())
    }
}
