pub mod add_liquidity;
pub mod deposit;
pub mod initialize;
pub mod remove_liquidity;
pub mod swap;
pub mod withdraw;

pub use add_liquidity::add_liquidity_handler;
pub use deposit::deposit_handler;
pub use initialize::initialize_handler;
pub use remove_liquidity::remove_liquidity_handler;
pub use swap::swap_handler;
pub use withdraw::withdraw_handler;

use anchor_lang::prelude::Pubkey;

use crate::{
    settlement::Settlement,
    state::{PoolConfig, PoolState},
};

/// Everything a handler may touch while executing one operation.
///
/// `state` is a staged copy of the pool; transfers are only recorded in
/// `settlement`. The dispatcher commits both once the handler returns `Ok`.
pub struct Context<'a> {
    pub caller: Pubkey,
    pub config: &'a PoolConfig,
    pub state: PoolState,
    pub settlement: Settlement,
}

impl<'a> Context<'a> {
    pub fn new(caller: Pubkey, config: &'a PoolConfig, state: PoolState) -> Self {
        Self {
            caller,
            config,
            state,
            settlement: Settlement::new(config.address),
        }
    }
}
