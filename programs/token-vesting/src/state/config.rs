use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Singleton config PDA: funding authority, vault and aggregate accounting.
#[account]
pub struct VestingConfig {
    /// Funding authority; may create schedules, revoke and withdraw.
    pub owner: Pubkey,
    /// Token mint under vesting.
    pub mint: Pubkey,
    /// Vault token account holding deposited funds (authority = this PDA).
    pub vault: Pubkey,
    /// Funds committed to active schedules. Grows on create, shrinks on
    /// release and on the unvested refund at revocation.
    pub schedules_total_amount: u64,
    /// Lifetime total released across all schedules.
    pub total_released: u64,
    /// Global schedule count; also the next global index.
    pub schedules_count: u64,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // vault
        8 +  // schedules_total_amount
        8 +  // total_released
        8;   // schedules_count

    /// Vault funds not earmarked for any active schedule. The committed
    /// total can never exceed the vault balance; an underflow here means
    /// the books are broken.
    pub fn withdrawable_amount(&self, vault_balance: u64) -> Result<u64> {
        let free = vault_balance
            .checked_sub(self.schedules_total_amount)
            .ok_or(VestingError::InvariantViolation)?;
        Ok(free)
    }
}
