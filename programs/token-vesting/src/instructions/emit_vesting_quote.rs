use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::error::VestingError;
use crate::state::{ScheduleStatus, VestingSchedule};
use crate::utils::vesting;

/// Read-only view: emits the schedule's vested/releasable amounts at the
/// current ledger time for off-chain consumers. Callers look schedules up
/// by id; a mismatch between the id they derived and the account they
/// passed is a failed lookup.
pub fn emit_vesting_quote_handler(ctx: Context<EmitVestingQuote>, id: [u8; 32]) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    require!(schedule.id == id, VestingError::ScheduleNotFound);

    let now = Clock::get()?.unix_timestamp;

    let vested = vesting::vested_amount(schedule, now)?;
    let releasable = vesting::releasable_amount(schedule, now)?;
    let status = vesting::schedule_status(schedule, now);

    emit!(VestingQuote {
        id: schedule.id,
        beneficiary: schedule.beneficiary,
        vested,
        released: schedule.released,
        releasable,
        status,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [
            SCHEDULE_SEED,
            schedule.beneficiary.as_ref(),
            &schedule.holder_index.to_le_bytes()
        ],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub released: u64,
    pub releasable: u64,
    pub status: ScheduleStatus,
}
