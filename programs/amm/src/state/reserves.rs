use anchor_lang::prelude::*;

use crate::{
    asset::Side,
    error::AmmError,
    math::{self, U256},
};

/// Pool balances of the two assets, in each asset's smallest unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservePair {
    reserve0: u128,
    reserve1: u128,
}

impl ReservePair {
    pub fn new(reserve0: u128, reserve1: u128) -> Self {
        Self { reserve0, reserve1 }
    }

    pub fn reserve0(&self) -> u128 {
        self.reserve0
    }

    pub fn reserve1(&self) -> u128 {
        self.reserve1
    }

    pub fn reserve(&self, side: Side) -> u128 {
        match side {
            Side::Asset0 => self.reserve0,
            Side::Asset1 => self.reserve1,
        }
    }

    /// Read reserves based on direction, input side first
    pub fn oriented(&self, side_in: Side) -> (u128, u128) {
        (self.reserve(side_in), self.reserve(side_in.other()))
    }

    /// The constant-product invariant `k`.
    pub fn k(&self) -> U256 {
        math::product(self.reserve0, self.reserve1)
    }

    pub fn is_empty(&self) -> bool {
        self.reserve0 == 0 && self.reserve1 == 0
    }

    pub(crate) fn credit(&mut self, side: Side, amount: u128) -> Result<()> {
        let reserve = self.slot(side);
        *reserve = math::checked_add(*reserve, amount)?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, side: Side, amount: u128) -> Result<()> {
        let reserve = self.slot(side);
        require!(amount <= *reserve, AmmError::InsufficientReserve);
        *reserve -= amount;
        Ok(())
    }

    fn slot(&mut self, side: Side) -> &mut u128 {
        match side {
            Side::Asset0 => &mut self.reserve0,
            Side::Asset1 => &mut self.reserve1,
        }
    }
}
