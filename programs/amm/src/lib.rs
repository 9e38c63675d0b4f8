#![allow(unexpected_cfgs)]

pub mod amm;
pub mod asset;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod settlement;
pub mod shared;
pub mod state;
pub mod token;

pub use amm::Amm;
pub use asset::{FungibleAsset, Side};
pub use constants::*;
pub use error::AmmError;
pub use shared::SharedAmm;
pub use state::*;
pub use token::{TokenError, TokenLedger};
