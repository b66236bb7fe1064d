use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{CONFIG_SEED, HOLDER_SEED, INDEX_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{HolderVesting, ScheduleIndex, VestingConfig, VestingSchedule};
use crate::utils::{id, vesting};

#[allow(clippy::too_many_arguments)]
pub fn create_schedule_handler(
    ctx: Context<CreateSchedule>,
    beneficiary: Pubkey,
    start: i64,
    cliff_duration: i64,
    duration: i64,
    slice_period: i64,
    revocable: bool,
    amount: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        config.owner,
        VestingError::UnauthorizedOwner
    );
    require!(beneficiary != Pubkey::default(), VestingError::InvalidScheduleParams);

    vesting::validate_schedule_params(cliff_duration, duration, slice_period, amount)?;
    let cliff = start
        .checked_add(cliff_duration)
        .ok_or(VestingError::MathOverflow)?;
    // The calculator relies on `start + duration` being representable.
    start
        .checked_add(duration)
        .ok_or(VestingError::MathOverflow)?;

    // The allocation must fit into funds not already earmarked. The config
    // account is writable here, so concurrent creates serialize on it and
    // cannot jointly overcommit the vault.
    let withdrawable = config.withdrawable_amount(ctx.accounts.vault.amount)?;
    require!(amount <= withdrawable, VestingError::InsufficientFunds);

    let holder = &mut ctx.accounts.holder_vesting;
    let holder_index = holder.count;
    let global_index = config.schedules_count;

    let schedule = &mut ctx.accounts.schedule;
    schedule.id = id::schedule_id(&beneficiary, holder_index);
    schedule.beneficiary = beneficiary;
    schedule.start = start;
    schedule.cliff = cliff;
    schedule.duration = duration;
    schedule.slice_period = slice_period;
    schedule.revocable = revocable;
    schedule.amount_total = amount;
    schedule.released = 0;
    schedule.revoked = false;
    schedule.revoked_at = 0;
    schedule.holder_index = holder_index;
    schedule.bump = ctx.bumps.schedule;

    ctx.accounts.schedule_index.schedule = schedule.key();

    holder.count = holder
        .count
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;
    config.schedules_count = config
        .schedules_count
        .checked_add(1)
        .ok_or(VestingError::MathOverflow)?;
    config.schedules_total_amount = config
        .schedules_total_amount
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(ScheduleCreated {
        id: schedule.id,
        beneficiary,
        start,
        cliff,
        duration,
        slice_period,
        revocable,
        amount,
        holder_index,
        global_index,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + HolderVesting::SIZE,
        seeds = [HOLDER_SEED, beneficiary.as_ref()],
        bump
    )]
    pub holder_vesting: Account<'info, HolderVesting>,

    #[account(
        init,
        payer = owner,
        space = 8 + VestingSchedule::SIZE,
        seeds = [
            SCHEDULE_SEED,
            beneficiary.as_ref(),
            &holder_vesting.count.to_le_bytes()
        ],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = owner,
        space = 8 + ScheduleIndex::SIZE,
        seeds = [INDEX_SEED, &config.schedules_count.to_le_bytes()],
        bump
    )]
    pub schedule_index: Account<'info, ScheduleIndex>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub start: i64,
    pub cliff: i64,
    pub duration: i64,
    pub slice_period: i64,
    pub revocable: bool,
    pub amount: u64,
    pub holder_index: u64,
    pub global_index: u64,
}
