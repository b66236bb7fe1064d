use anchor_lang::prelude::*;

/// Per-beneficiary schedule counter. Schedule PDAs are addressed by
/// (beneficiary, index), so the counter doubles as the holder's
/// insertion-ordered schedule list: indices 0..count are always valid and
/// re-readable against current state.
#[account]
pub struct HolderVesting {
    pub count: u64,
}

impl HolderVesting {
    pub const SIZE: usize = 8; // count
}

/// Global position -> schedule mapping, one entry per created schedule.
#[account]
pub struct ScheduleIndex {
    pub schedule: Pubkey,
}

impl ScheduleIndex {
    pub const SIZE: usize = 32; // schedule
}
