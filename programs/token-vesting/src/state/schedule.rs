use anchor_lang::prelude::*;

/// One vesting schedule: a single allocation of tokens to a single
/// beneficiary. Created once, mutated only by `release` and `revoke`,
/// never deleted.
#[account]
#[derive(Debug)]
pub struct VestingSchedule {
    /// Stable identifier derived from (beneficiary, holder_index);
    /// never reused.
    pub id: [u8; 32],
    /// Address entitled to released funds.
    pub beneficiary: Pubkey,
    /// Vesting timeline start (Unix seconds).
    pub start: i64,
    /// Absolute cliff timestamp (`cliff >= start`); nothing is releasable
    /// before it.
    pub cliff: i64,
    /// Total vesting period length, measured from `start`.
    pub duration: i64,
    /// Time quantum at which partial vesting becomes releasable.
    pub slice_period: i64,
    /// Whether the owner may revoke before full vesting.
    pub revocable: bool,
    /// Total tokens allocated; fixed at creation.
    pub amount_total: u64,
    /// Cumulative tokens already paid out; `released <= amount_total`.
    pub released: u64,
    /// Terminal flag; one-way false -> true.
    pub revoked: bool,
    /// Instant accrual froze; only meaningful once `revoked`.
    pub revoked_at: i64,
    /// Insertion-order index within the beneficiary's schedules.
    pub holder_index: u64,
    /// PDA bump.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // id
        32 + // beneficiary
        8 +  // start
        8 +  // cliff
        8 +  // duration
        8 +  // slice_period
        1 +  // revocable
        8 +  // amount_total
        8 +  // released
        1 +  // revoked
        8 +  // revoked_at
        8 +  // holder_index
        1;   // bump
}

/// Lifecycle position of a schedule at a point in time. Computed from the
/// schedule and a timestamp, never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// Before the cliff; nothing releasable yet.
    Pending,
    /// Cliff passed, duration not yet elapsed; releasable grows stepwise.
    Vesting,
    /// Duration elapsed; releasable caps at the unreleased remainder.
    FullyVested,
    /// Terminal; vested amount frozen at the revocation instant.
    Revoked,
}
