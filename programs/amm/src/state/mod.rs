pub mod config;
pub mod reserves;
pub mod shares;

use anchor_lang::prelude::*;

pub use config::*;
pub use reserves::*;
pub use shares::*;

use crate::error::AmmError;

/// Mutable pool state. Operations work on a staged clone and the result only
/// replaces the live value once every transfer has settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolState {
    pub reserves: ReservePair,
    pub shares: ShareLedger,
    pub initialized: bool,
}

impl PoolState {
    pub fn require_initialized(&self) -> Result<()> {
        require!(self.initialized, AmmError::NotInitialized);
        Ok(())
    }
}
