//! Deterministic schedule id derivation.

use anchor_lang::prelude::*;

/// Schedule id for a holder and per-holder index: blake3 over the
/// beneficiary key and the little-endian index. Reproducible off-chain,
/// collision-free across holders and indices, stable for the schedule's
/// lifetime.
pub fn schedule_id(beneficiary: &Pubkey, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(beneficiary.as_ref());
    hasher.update(&index.to_le_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_deterministic() {
        let holder = Pubkey::new_unique();
        assert_eq!(schedule_id(&holder, 3), schedule_id(&holder, 3));
    }

    #[test]
    fn id_differs_by_index_and_holder() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(schedule_id(&a, 0), schedule_id(&a, 1));
        assert_ne!(schedule_id(&a, 0), schedule_id(&b, 0));
    }
}
