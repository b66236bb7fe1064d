use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{VestingConfig, VestingSchedule};
use crate::utils::vesting;

pub fn release_handler(ctx: Context<Release>, amount: u64) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    require!(amount > 0, VestingError::InvalidAmount);

    let releaser = ctx.accounts.releaser.key();
    require!(
        releaser == ctx.accounts.schedule.beneficiary
            || releaser == ctx.accounts.config.owner,
        VestingError::UnauthorizedReleaser
    );

    // Eligibility is the calculator's call; a failed check changes nothing.
    let now = Clock::get()?.unix_timestamp;
    let releasable = vesting::releasable_amount(&ctx.accounts.schedule, now)?;
    require!(amount <= releasable, VestingError::ExceedsReleasable);

    require!(
        ctx.accounts.vault.amount >= amount,
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
        amount,
    )?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.released = schedule
        .released
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    let config = &mut ctx.accounts.config;
    config.schedules_total_amount = config
        .schedules_total_amount
        .checked_sub(amount)
        .ok_or(VestingError::InvariantViolation)?;
    config.total_released = config
        .total_released
        .checked_add(amount)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensReleased {
        id: schedule.id,
        beneficiary: schedule.beneficiary,
        amount,
        released_total: schedule.released,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
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

    pub releaser: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub id: [u8; 32],
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
