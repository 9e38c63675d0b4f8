use std::sync::{Arc, RwLock};

use anchor_lang::prelude::*;

use crate::{amm::Amm, asset::FungibleAsset, error::AmmError};

/// Cloneable handle to a pool shared between threads.
///
/// Mutating calls hold the write lock for the whole operation, transfers
/// included, so no reader ever sees reserves and shares out of step. Queries
/// share the read lock.
pub struct SharedAmm<A: FungibleAsset> {
    inner: Arc<RwLock<Amm<A>>>,
}

impl<A: FungibleAsset> Clone for SharedAmm<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: FungibleAsset> SharedAmm<A> {
    pub fn new(amm: Amm<A>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(amm)),
        }
    }

    /// Run a query under the read lock
    pub fn read<T>(&self, query: impl FnOnce(&Amm<A>) -> T) -> Result<T> {
        let guard = self.inner.read().map_err(|_| AmmError::LedgerPoisoned)?;
        Ok(query(&guard))
    }

    /// Run an operation under the write lock
    pub fn write<T>(&self, operation: impl FnOnce(&mut Amm<A>) -> Result<T>) -> Result<T> {
        let mut guard = self.inner.write().map_err(|_| AmmError::LedgerPoisoned)?;
        operation(&mut guard)
    }

    pub fn initialize(&self, caller: &Pubkey, amount0: u128, amount1: u128) -> Result<u128> {
        self.write(|amm| amm.initialize(caller, amount0, amount1))
    }

    pub fn add_liquidity(&self, caller: &Pubkey, amount0: u128, amount1: u128) -> Result<u128> {
        self.write(|amm| amm.add_liquidity(caller, amount0, amount1))
    }

    pub fn remove_liquidity(&self, caller: &Pubkey, shares: u128) -> Result<(u128, u128)> {
        self.write(|amm| amm.remove_liquidity(caller, shares))
    }

    pub fn deposit(&self, caller: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        self.write(|amm| amm.deposit(caller, asset, amount))
    }

    pub fn withdraw(&self, caller: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        self.write(|amm| amm.withdraw(caller, asset, amount))
    }

    pub fn swap(&self, caller: &Pubkey, asset_in: &Pubkey, amount_in: u128) -> Result<u128> {
        self.write(|amm| amm.swap(caller, asset_in, amount_in))
    }

    pub fn approve(&self, holder: &Pubkey, asset: &Pubkey, amount: u128) -> Result<()> {
        self.write(|amm| amm.approve(holder, asset, amount))
    }

    pub fn reserve0(&self) -> Result<u128> {
        self.read(|amm| amm.reserve0())
    }

    pub fn reserve1(&self) -> Result<u128> {
        self.read(|amm| amm.reserve1())
    }

    pub fn reserves(&self) -> Result<(u128, u128)> {
        self.read(|amm| (amm.reserve0(), amm.reserve1()))
    }

    pub fn balance_of(&self, holder: &Pubkey) -> Result<u128> {
        self.read(|amm| amm.balance_of(holder))
    }

    pub fn total_supply(&self) -> Result<u128> {
        self.read(|amm| amm.total_supply())
    }
}
