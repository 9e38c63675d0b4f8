//! Staged external transfers for one pool operation.
//!
//! Handlers record legs while they compute the new pool state; nothing moves
//! until [`Settlement::execute`] runs them. Pulls run before pushes so the
//! pool never pays out before it has been paid. Both ledgers are snapshotted
//! before the first leg; if any leg fails they are restored from it and the
//! operation fails as a whole.

use anchor_lang::prelude::*;

use crate::{
    asset::{FungibleAsset, Side},
    error::AmmError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// `transfer_from(from -> pool)`, spending the pool's allowance
    Pull { side: Side, from: Pubkey, amount: u128 },
    /// `transfer(pool -> to)`
    Push { side: Side, to: Pubkey, amount: u128 },
}

impl Leg {
    fn side(&self) -> Side {
        match self {
            Leg::Pull { side, .. } | Leg::Push { side, .. } => *side,
        }
    }

    fn is_pull(&self) -> bool {
        matches!(self, Leg::Pull { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Settlement {
    pool: Pubkey,
    legs: Vec<Leg>,
}

impl Settlement {
    pub fn new(pool: Pubkey) -> Self {
        Self {
            pool,
            legs: Vec::new(),
        }
    }

    pub fn pull(&mut self, side: Side, from: Pubkey, amount: u128) {
        if amount > 0 {
            self.legs.push(Leg::Pull { side, from, amount });
        }
    }

    pub fn push(&mut self, side: Side, to: Pubkey, amount: u128) {
        if amount > 0 {
            self.legs.push(Leg::Push { side, to, amount });
        }
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Run every leg against the asset ledgers, all or nothing.
    pub fn execute<A: FungibleAsset>(self, assets: &mut [A; 2]) -> Result<()> {
        let mut ordered = self.legs;
        ordered.sort_by_key(|leg| !leg.is_pull());

        let snapshot = assets.clone();
        for leg in &ordered {
            let asset = &mut assets[leg.side().index()];
            if let Err(error) = run(asset, &self.pool, leg) {
                msg!("Transfer failed, restoring ledgers: {:?}: {}", leg, error);
                *assets = snapshot;
                return err!(AmmError::ExternalTransferFailed);
            }
        }

        Ok(())
    }
}

fn run<A: FungibleAsset>(asset: &mut A, pool: &Pubkey, leg: &Leg) -> Result<()> {
    match *leg {
        Leg::Pull { from, amount, .. } => asset.transfer_from(pool, &from, pool, amount),
        Leg::Push { to, amount, .. } => asset.transfer(pool, &to, amount),
    }
}
