use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("He9EkKyHDdcC2err4j7sNhVfCVNSZTiM2F8i9ao5zvvt");

#[program]
pub mod token_vesting {
    use super::*;

    /// Creates the config and vault for a mint; the signer becomes the
    /// funding authority.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize_handler(ctx)
    }

    /// Moves tokens from the owner into the vault, growing the
    /// withdrawable pool schedules are funded from.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens_handler(ctx, amount)
    }

    /// Creates a vesting schedule for a beneficiary. `cliff_duration`,
    /// `duration` and `slice_period` are in seconds; the cliff is stored
    /// as the absolute timestamp `start + cliff_duration`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        beneficiary: Pubkey,
        start: i64,
        cliff_duration: i64,
        duration: i64,
        slice_period: i64,
        revocable: bool,
        amount: u64,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule_handler(
            ctx,
            beneficiary,
            start,
            cliff_duration,
            duration,
            slice_period,
            revocable,
            amount,
        )
    }

    /// Pays out `amount` of the schedule's releasable balance to the
    /// beneficiary. The beneficiary or the owner may sign.
    pub fn release(ctx: Context<Release>, amount: u64) -> Result<()> {
        instructions::release::release_handler(ctx, amount)
    }

    /// Stops further accrual on a revocable schedule: pays out what has
    /// vested, returns the rest to the withdrawable pool.
    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke::revoke_handler(ctx)
    }

    /// Owner withdrawal of funds not committed to any active schedule.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw_handler(ctx, amount)
    }

    /// Emits a vesting quote event for the schedule with the given id at
    /// the current ledger time.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, id: [u8; 32]) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote_handler(ctx, id)
    }
}
