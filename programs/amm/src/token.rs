use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::asset::FungibleAsset;

#[error_code(offset = 7000)]
pub enum TokenError {
    #[msg("Insufficient funds for transfer.")]
    InsufficientFunds,
    #[msg("Transfer exceeds the approved allowance.")]
    InsufficientAllowance,
    #[msg("Token supply overflow.")]
    SupplyOverflow,
}

/// In-memory fungible token with ERC20-style allowances.
#[derive(Debug, Clone, Default)]
pub struct TokenLedger {
    id: Pubkey,
    balances: BTreeMap<Pubkey, u128>,
    allowances: BTreeMap<(Pubkey, Pubkey), u128>,
    supply: u128,
}

impl TokenLedger {
    pub fn new(id: Pubkey) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Create `amount` new tokens for `holder`.
    pub fn mint_to(&mut self, holder: &Pubkey, amount: u128) -> Result<()> {
        self.supply = self
            .supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyOverflow)?;
        *self.balances.entry(*holder).or_default() += amount;
        Ok(())
    }

    pub fn total_supply(&self) -> u128 {
        self.supply
    }

    fn move_balance(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        let available = self.balance_of(from);
        require!(available >= amount, TokenError::InsufficientFunds);

        self.balances.insert(*from, available - amount);
        // supply bounds every balance, so the credit cannot overflow
        *self.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

impl FungibleAsset for TokenLedger {
    fn id(&self) -> Pubkey {
        self.id
    }

    fn balance_of(&self, holder: &Pubkey) -> u128 {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, amount: u128) -> Result<()> {
        self.allowances.insert((*owner, *spender), amount);
        Ok(())
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: &Pubkey,
        from: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        let allowance = self.allowance(from, spender);
        require!(allowance >= amount, TokenError::InsufficientAllowance);

        self.move_balance(from, to, amount)?;
        self.allowances.insert((*from, *spender), allowance - amount);
        Ok(())
    }
}
