use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};
use crate::utils::vesting;

pub fn revoke_handler(ctx: Context<Revoke>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    require_keys_eq!(
        ctx.accounts.owner.key(),
        ctx.accounts.config.owner,
        VestingError::UnauthorizedOwner
    );

    let schedule = &ctx.accounts.schedule;
    require!(schedule.revocable, VestingError::NotRevocable);
    require!(!schedule.revoked, VestingError::AlreadyRevoked);

    let now = Clock::get()?.unix_timestamp;
    let split = vesting::revoke_split(schedule, now)?;

    // Vested-but-unreleased funds are paid out to the beneficiary as part
    // of the revocation; the unvested remainder stays in the vault and
    // rejoins the withdrawable pool.
    if split.releasable > 0 {
        require!(
            ctx.accounts.vault.amount >= split.releasable,
            VestingError::InsufficientVaultBalance
        );
        let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[config_bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: config_ai,
                },
                signer_seeds,
            ),
            split.releasable,
        )?;
    }

    let uncommitted = split
        .releasable
        .checked_add(split.refund)
        .ok_or(VestingError::MathOverflow)?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.released = schedule
        .released
        .checked_add(split.releasable)
        .ok_or(VestingError::MathOverflow)?;
    schedule.revoked = true;
    schedule.revoked_at = now;

    let config = &mut ctx.accounts.config;
    config.schedules_total_amount = config
        .schedules_total_amount
        .checked_sub(uncommitted)
        .ok_or(VestingError::InvariantViolation)?;
    config.total_released = config
        .total_released
        .checked_add(split.releasable)
        .ok_or(VestingError::MathOverflow)?;

    emit!(ScheduleRevoked {
        id: schedule.id,
        beneficiary: schedule.beneficiary,
        vested: split.vested,
        auto_released: split.releasable,
        refunded: split.refund,
        revoked_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [
            SCHEDULE_SEED,
            schedule.beneficiary.as_ref(),
            &schedule.holder_index.to_le_bytes()
        ],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == config.mint
            @ VestingError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == schedule.beneficiary
            @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleRevoked {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub auto_released: u64,
    pub refunded: u64,
    pub revoked_at: i64,
}
