//! Pure vesting arithmetic. Handlers read the ledger clock and pass `now`
//! in; nothing here touches accounts, sysvars or wall-clock time.
//!
//! Vesting is a staircase over complete slice periods, truncating toward
//! zero in integer arithmetic: zero before the cliff, the full allocation
//! once the duration has elapsed, and in between
//! `amount_total * elapsed_slices / total_slices`.

use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{ScheduleStatus, VestingSchedule};

/// Amounts a revocation settles: what has vested so far, the vested but
/// unreleased part paid out at revocation, and the unvested remainder
/// returned to the withdrawable pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevokeSplit {
    pub vested: u64,
    pub releasable: u64,
    pub refund: u64,
}

/// Schedule creation preconditions, checked before any state is touched.
pub fn validate_schedule_params(
    cliff_duration: i64,
    duration: i64,
    slice_period: i64,
    amount: u64,
) -> Result<()> {
    require!(duration > 0, VestingError::InvalidScheduleParams);
    require!(slice_period > 0, VestingError::InvalidScheduleParams);
    require!(cliff_duration >= 0, VestingError::InvalidScheduleParams);
    require!(cliff_duration <= duration, VestingError::InvalidScheduleParams);
    require!(amount > 0, VestingError::InvalidScheduleParams);
    Ok(())
}

/// Tokens vested as of `now`.
///
/// Once revoked, accrual is frozen at `revoked_at`; the vested amount never
/// moves again no matter how late `now` is.
pub fn vested_amount(schedule: &VestingSchedule, now: i64) -> Result<u64> {
    // A stored schedule always has a positive slice period; anything else
    // is corrupted state, not caller error.
    require!(
        schedule.slice_period > 0,
        VestingError::InvariantViolation
    );

    let now = if schedule.revoked {
        now.min(schedule.revoked_at)
    } else {
        now
    };

    if now < schedule.cliff {
        return Ok(0);
    }
    let end = schedule
        .start
        .checked_add(schedule.duration)
        .ok_or(VestingError::MathOverflow)?;
    if now >= end {
        return Ok(schedule.amount_total);
    }

    let elapsed = now
        .checked_sub(schedule.start)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < 0 {
        // Malformed schedule (cliff before start); treat as not started.
        return Ok(0);
    }
    let elapsed_slices = elapsed / schedule.slice_period;
    let total_slices = schedule.duration / schedule.slice_period;
    if total_slices == 0 {
        // Slice period longer than the whole duration: nothing vests until
        // the terminal clause above.
        return Ok(0);
    }

    // `now < end` bounds elapsed_slices <= total_slices, so the quotient
    // never exceeds amount_total.
    let vested = (schedule.amount_total as u128)
        .checked_mul(elapsed_slices as u128)
        .ok_or(VestingError::MathOverflow)?
        / (total_slices as u128);
    Ok(u64::try_from(vested).map_err(|_| VestingError::MathOverflow)?)
}

/// Vested amount not yet paid out.
///
/// `released` can never run ahead of `vested` through this program's state
/// transitions; if it does anyway, the result is clamped to zero and logged
/// instead of surfacing an error to the caller.
pub fn releasable_amount(schedule: &VestingSchedule, now: i64) -> Result<u64> {
    let vested = vested_amount(schedule, now)?;
    if vested < schedule.released {
        msg!(
            "invariant violation: released {} exceeds vested {} for schedule {:?}",
            schedule.released,
            vested,
            schedule.id
        );
        return Ok(0);
    }
    Ok(vested - schedule.released)
}

/// Lifecycle position of a schedule at `now`.
pub fn schedule_status(schedule: &VestingSchedule, now: i64) -> ScheduleStatus {
    if schedule.revoked {
        return ScheduleStatus::Revoked;
    }
    if now < schedule.cliff {
        return ScheduleStatus::Pending;
    }
    match schedule.start.checked_add(schedule.duration) {
        Some(end) if now >= end => ScheduleStatus::FullyVested,
        _ => ScheduleStatus::Vesting,
    }
}

/// Settlement amounts for revoking at `now`.
pub fn revoke_split(schedule: &VestingSchedule, now: i64) -> Result<RevokeSplit> {
    let vested = vested_amount(schedule, now)?;
    let releasable = vested.saturating_sub(schedule.released);
    let refund = schedule
        .amount_total
        .checked_sub(vested)
        .ok_or(VestingError::InvariantViolation)?;
    Ok(RevokeSplit {
        vested,
        releasable,
        refund,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    /// 3600 tokens over 360 days in 30-day slices, no cliff offset.
    fn schedule() -> VestingSchedule {
        VestingSchedule {
            id: [7u8; 32],
            beneficiary: Pubkey::new_unique(),
            start: 0,
            cliff: 0,
            duration: 360 * DAY,
            slice_period: 30 * DAY,
            revocable: true,
            amount_total: 3600,
            released: 0,
            revoked: false,
            revoked_at: 0,
            holder_index: 0,
            bump: 255,
        }
    }

    #[test]
    fn nothing_vests_before_first_slice_boundary() {
        let s = schedule();
        assert_eq!(vested_amount(&s, 29 * DAY).unwrap(), 0);
        assert_eq!(releasable_amount(&s, 29 * DAY).unwrap(), 0);
    }

    #[test]
    fn one_slice_vests_one_twelfth() {
        let s = schedule();
        assert_eq!(vested_amount(&s, 30 * DAY).unwrap(), 300);
        assert_eq!(releasable_amount(&s, 30 * DAY).unwrap(), 300);
    }

    #[test]
    fn vesting_steps_only_at_slice_boundaries() {
        let s = schedule();
        assert_eq!(vested_amount(&s, 30 * DAY).unwrap(), 300);
        assert_eq!(vested_amount(&s, 59 * DAY).unwrap(), 300);
        assert_eq!(vested_amount(&s, 60 * DAY).unwrap(), 600);
    }

    #[test]
    fn fully_vested_at_and_after_duration() {
        let s = schedule();
        assert_eq!(vested_amount(&s, 360 * DAY).unwrap(), 3600);
        assert_eq!(vested_amount(&s, 365 * DAY).unwrap(), 3600);
        assert_eq!(releasable_amount(&s, 365 * DAY).unwrap(), 3600);
    }

    #[test]
    fn cliff_gates_everything_before_it() {
        let mut s = schedule();
        s.cliff = 90 * DAY;
        assert_eq!(vested_amount(&s, 89 * DAY).unwrap(), 0);
        // Once past the cliff, slices count from `start`, not from the cliff.
        assert_eq!(vested_amount(&s, 90 * DAY).unwrap(), 900);
    }

    #[test]
    fn nothing_vests_before_start() {
        let mut s = schedule();
        s.start = 100 * DAY;
        s.cliff = 100 * DAY;
        assert_eq!(vested_amount(&s, 0).unwrap(), 0);
        assert_eq!(vested_amount(&s, 99 * DAY).unwrap(), 0);
    }

    #[test]
    fn released_is_subtracted() {
        let mut s = schedule();
        s.released = 200;
        assert_eq!(releasable_amount(&s, 30 * DAY).unwrap(), 100);
    }

    #[test]
    fn releasable_clamps_when_released_exceeds_vested() {
        let mut s = schedule();
        s.released = 500;
        assert_eq!(releasable_amount(&s, 30 * DAY).unwrap(), 0);
    }

    #[test]
    fn revocation_freezes_accrual() {
        let mut s = schedule();
        s.revoked = true;
        s.revoked_at = 90 * DAY;
        assert_eq!(vested_amount(&s, 90 * DAY).unwrap(), 900);
        assert_eq!(vested_amount(&s, 365 * DAY).unwrap(), 900);
        assert_eq!(vested_amount(&s, i64::MAX - DAY).unwrap(), 900);
    }

    #[test]
    fn revoke_split_partitions_the_allocation() {
        let mut s = schedule();
        s.released = 300;
        let split = revoke_split(&s, 90 * DAY).unwrap();
        assert_eq!(split.vested, 900);
        assert_eq!(split.releasable, 600);
        assert_eq!(split.refund, 2700);
        assert_eq!(split.releasable + split.refund + s.released, s.amount_total);
    }

    #[test]
    fn non_dividing_slice_truncates_the_final_slice() {
        let mut s = schedule();
        s.duration = 100;
        s.slice_period = 30;
        s.amount_total = 300;
        // total_slices = 3: the last 10 seconds belong to no complete slice.
        assert_eq!(vested_amount(&s, 29).unwrap(), 0);
        assert_eq!(vested_amount(&s, 30).unwrap(), 100);
        assert_eq!(vested_amount(&s, 89).unwrap(), 200);
        assert_eq!(vested_amount(&s, 90).unwrap(), 300);
        assert_eq!(vested_amount(&s, 100).unwrap(), 300);
    }

    #[test]
    fn slice_longer_than_duration_vests_only_at_the_end() {
        let mut s = schedule();
        s.duration = 100;
        s.slice_period = 150;
        assert_eq!(vested_amount(&s, 99).unwrap(), 0);
        assert_eq!(vested_amount(&s, 100).unwrap(), s.amount_total);
    }

    #[test]
    fn truncation_never_leaks_tokens() {
        let mut s = schedule();
        s.amount_total = 1000;
        s.duration = 7 * DAY;
        s.slice_period = 2 * DAY;
        // 3 complete slices; each step is floor(1000 * k / 3).
        assert_eq!(vested_amount(&s, 2 * DAY).unwrap(), 333);
        assert_eq!(vested_amount(&s, 4 * DAY).unwrap(), 666);
        assert_eq!(vested_amount(&s, 6 * DAY).unwrap(), 1000);
        assert_eq!(vested_amount(&s, 7 * DAY).unwrap(), 1000);
    }

    #[test]
    fn revocation_returns_unvested_to_withdrawable_pool() {
        // Vault funded with 3600, all of it committed to one schedule.
        let mut vault = 3600u64;
        let mut committed = 3600u64;
        let mut s = schedule();

        let split = revoke_split(&s, 90 * DAY).unwrap();
        vault -= split.releasable; // auto-release pays out of the vault
        s.released += split.releasable;
        committed -= split.releasable + split.refund;

        assert_eq!(s.released, 900);
        assert_eq!(committed, 0);
        // The unvested 2700 is withdrawable again.
        assert_eq!(vault - committed, 2700);
    }

    #[test]
    fn status_walks_the_lifecycle() {
        let mut s = schedule();
        s.cliff = 30 * DAY;
        assert_eq!(schedule_status(&s, 29 * DAY), ScheduleStatus::Pending);
        assert_eq!(schedule_status(&s, 30 * DAY), ScheduleStatus::Vesting);
        assert_eq!(schedule_status(&s, 360 * DAY), ScheduleStatus::FullyVested);
        s.revoked = true;
        s.revoked_at = 60 * DAY;
        assert_eq!(schedule_status(&s, 360 * DAY), ScheduleStatus::Revoked);
    }

    #[test]
    fn params_validation_rejects_bad_inputs() {
        assert!(validate_schedule_params(0, 0, 1, 1).is_err());
        assert!(validate_schedule_params(0, 100, 0, 1).is_err());
        assert!(validate_schedule_params(-1, 100, 1, 1).is_err());
        assert!(validate_schedule_params(101, 100, 1, 1).is_err());
        assert!(validate_schedule_params(0, 100, 1, 0).is_err());
        assert!(validate_schedule_params(100, 100, 7, 1).is_ok());
        assert!(validate_schedule_params(0, 100, 150, 1).is_ok());
    }

    #[test]
    fn huge_amounts_do_not_overflow() {
        let mut s = schedule();
        s.amount_total = u64::MAX;
        assert_eq!(vested_amount(&s, 30 * DAY).unwrap(), u64::MAX / 12);
        assert_eq!(vested_amount(&s, 360 * DAY).unwrap(), u64::MAX);
    }
}
