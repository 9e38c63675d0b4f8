use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::{error::AmmError, math};

/// Liquidity share balances issued by the pool.
///
/// `total_supply` always equals the sum of all balances; holders whose
/// balance reaches zero are dropped from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<Pubkey, u128>,
    total_supply: u128,
}

impl ShareLedger {
    pub fn balance_of(&self, holder: &Pubkey) -> u128 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, &u128)> {
        self.balances.iter()
    }

    pub(crate) fn mint(&mut self, holder: &Pubkey, amount: u128) -> Result<()> {
        let supply = math::checked_add(self.total_supply, amount)?;
        let balance = math::checked_add(self.balance_of(holder), amount)?;

        self.total_supply = supply;
        if balance > 0 {
            self.balances.insert(*holder, balance);
        }
        Ok(())
    }

    pub(crate) fn burn(&mut self, holder: &Pubkey, amount: u128) -> Result<()> {
        let balance = self.balance_of(holder);
        require!(amount <= balance, AmmError::InsufficientShares);
        let supply = math::checked_sub(self.total_supply, amount)?;

        self.total_supply = supply;
        match balance - amount {
            0 => {
                self.balances.remove(holder);
            }
            rest => {
                self.balances.insert(*holder, rest);
            }
        }
        Ok(())
    }
}
