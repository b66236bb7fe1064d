use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: only the beneficiary or the owner may release")]
    UnauthorizedReleaser,

    #[msg("Invalid schedule parameters")]
    InvalidScheduleParams,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Allocation exceeds withdrawable funds")]
    InsufficientFunds,

    #[msg("Vesting schedule not found")]
    ScheduleNotFound,

    #[msg("Amount exceeds the releasable amount")]
    ExceedsReleasable,

    #[msg("Schedule is not revocable")]
    NotRevocable,

    #[msg("Schedule is already revoked")]
    AlreadyRevoked,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Internal invariant violation")]
    InvariantViolation,
}
