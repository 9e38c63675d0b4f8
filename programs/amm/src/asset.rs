use anchor_lang::prelude::*;

/// Which of the two pool assets an amount refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Asset0,
    Asset1,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Asset0, Side::Asset1];

    /// The opposite asset, i.e. the output side of a swap.
    pub fn other(self) -> Side {
        match self {
            Side::Asset0 => Side::Asset1,
            Side::Asset1 => Side::Asset0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Asset0 => 0,
            Side::Asset1 => 1,
        }
    }
}

/// External fungible asset the pool trades.
///
/// Implementations own the balance bookkeeping; the pool only moves amounts
/// through `transfer` (out of its own balance) and `transfer_from` (out of a
/// caller's balance, spending an allowance granted to the pool). Any `Err`
/// aborts the pool operation that issued the call.
///
/// A clone must carry every balance and allowance: settlement restores one
/// when a transfer fails partway.
pub trait FungibleAsset: Clone {
    /// Identifier the pool was configured with.
    fn id(&self) -> Pubkey;

    fn balance_of(&self, holder: &Pubkey) -> u128;

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128;

    /// Let `spender` move up to `amount` of `owner`'s balance. Replaces any
    /// previous allowance.
    fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()>;

    /// Move `amount` from `from` to `to`, authorised by `from` itself.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()>;

    /// Move `amount` from `from` to `to`, authorised by `spender`'s allowance.
    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()>;
}
