#![allow(dead_code)]

use amm_ledger::{Amm, FungibleAsset, PoolConfig, Side, TokenLedger};
use anchor_lang::{error::Error, prelude::Pubkey, Result};

pub const ETHER: u128 = 10u128.pow(18);
pub const SUPPLY: u128 = 1_000_000 * ETHER;

/// Pool over two fresh tokens, with `owner` holding the whole supply of both.
pub struct Harness {
    pub amm: Amm<TokenLedger>,
    pub owner: Pubkey,
    pub token0: Pubkey,
    pub token1: Pubkey,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(|config| config, &[])
    }

    pub fn with_config(tune: impl FnOnce(PoolConfig) -> PoolConfig) -> Self {
        Self::build(tune, &[])
    }

    /// Harness where each `(holder, amount0, amount1)` starts with those balances.
    pub fn with_accounts(accounts: &[(Pubkey, u128, u128)]) -> Self {
        Self::build(|config| config, accounts)
    }

    pub fn build(
        tune: impl FnOnce(PoolConfig) -> PoolConfig,
        accounts: &[(Pubkey, u128, u128)],
    ) -> Self {
        let owner = Pubkey::new_unique();
        let config = tune(PoolConfig::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ));
        let (token0, token1) = (config.asset0, config.asset1);

        // balances are set here; once the pool owns the ledgers only approvals go through it
        let mut asset0 = TokenLedger::new(token0);
        let mut asset1 = TokenLedger::new(token1);
        asset0.mint_to(&owner, SUPPLY).unwrap();
        asset1.mint_to(&owner, SUPPLY).unwrap();
        for (holder, amount0, amount1) in accounts {
            asset0.mint_to(holder, *amount0).unwrap();
            asset1.mint_to(holder, *amount1).unwrap();
        }

        let amm = Amm::new(config, asset0, asset1).unwrap();
        Self {
            amm,
            owner,
            token0,
            token1,
        }
    }

    /// `initialize` from the owner after approving both amounts.
    pub fn initialized(amount0: u128, amount1: u128) -> Self {
        let mut harness = Self::new();
        harness.seed(amount0, amount1);
        harness
    }

    pub fn seed(&mut self, amount0: u128, amount1: u128) {
        let owner = self.owner;
        self.approve(&owner, Side::Asset0, amount0);
        self.approve(&owner, Side::Asset1, amount1);
        self.amm.initialize(&owner, amount0, amount1).unwrap();
    }

    pub fn token(&self, side: Side) -> Pubkey {
        match side {
            Side::Asset0 => self.token0,
            Side::Asset1 => self.token1,
        }
    }

    /// Raise the pool's allowance over `holder`'s balance by `amount`.
    pub fn approve(&mut self, holder: &Pubkey, side: Side, amount: u128) {
        let current = self.amm.asset(side).allowance(holder, &self.amm.address());
        let token = self.token(side);
        self.amm.approve(holder, &token, current + amount).unwrap();
    }

    pub fn balance(&self, side: Side, holder: &Pubkey) -> u128 {
        self.amm.asset(side).balance_of(holder)
    }

    /// Pool balances on the asset ledgers always match the recorded reserves.
    pub fn assert_reserves_backed(&self) {
        let pool = self.amm.address();
        assert_eq!(self.balance(Side::Asset0, &pool), self.amm.reserve0());
        assert_eq!(self.balance(Side::Asset1, &pool), self.amm.reserve1());
    }

    pub fn share_sum(&self) -> u128 {
        self.amm
            .state()
            .shares
            .holders()
            .map(|(_, balance)| *balance)
            .sum()
    }
}

pub fn assert_err<T: std::fmt::Debug>(result: Result<T>, expected: impl Into<Error>) {
    assert_eq!(result.unwrap_err(), expected.into());
}
