use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Lifecycle Errors
    #[msg("Pool has not been initialized.")]
    NotInitialized,
    #[msg("Pool is already initialized.")]
    AlreadyInitialized,

    // Input Errors
    #[msg("Amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Asset is not one of the pool assets.")]
    UnknownAsset,

    // Liquidity Errors
    #[msg("Amount exceeds the pool reserve.")]
    InsufficientReserve,
    #[msg("Insufficient liquidity shares for operation.")]
    InsufficientShares,
    #[msg("Deposit is too small to mint any liquidity shares.")]
    InsufficientLiquidityMinted,
    #[msg("Share amount is too small to redeem any reserves.")]
    InsufficientLiquidityBurned,
    #[msg("Insufficient liquidity for this swap.")]
    InsufficientLiquidity,

    // Math Errors
    #[msg("Mathematical overflow detected.")]
    ArithmeticOverflow,
    #[msg("Mathematical underflow detected.")]
    ArithmeticUnderflow,
    #[msg("Division by zero.")]
    DivisionByZero,

    // Collaborator Errors
    #[msg("External asset transfer failed.")]
    ExternalTransferFailed,

    // Trading Errors
    #[msg("Slippage tolerance exceed.")]
    SlippageExceeded,
    #[msg("Constant product invariant violated.")]
    InvariantViolation,

    // Configuration Errors
    #[msg("Fee exceeds maximum allowed.")]
    InvalidFee,
    #[msg("Pool assets must be different.")]
    IdenticalAssets,
    #[msg("Asset handle does not match the configured asset.")]
    AssetMismatch,

    // Authorization Errors
    #[msg("Unauthorized access attempt")]
    Unauthorized,

    // Concurrency Errors
    #[msg("Ledger lock poisoned by a panicked writer.")]
    LedgerPoisoned,
}
