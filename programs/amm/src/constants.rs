use anchor_lang::prelude::*;

// Fee Constants - swap fee is expressed in basis points of the input amount
#[constant]
pub const FEE_BASIS_POINTS: u16 = 10000; // 100%

#[constant]
pub const DEFAULT_FEE_BASIS_POINTS: u16 = 0; // observed pools charge no fee

#[constant]
pub const MAX_FEE_BASIS_POINTS: u16 = 500; // 5%
