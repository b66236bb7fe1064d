//! Program-wide constants.

/// Seed prefix for the singleton config PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for the vault token account PDA.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for per-schedule PDAs: `[SCHEDULE_SEED, beneficiary, index_le]`.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix for per-beneficiary schedule counters.
pub const HOLDER_SEED: &[u8] = b"holder";

/// Seed prefix for the global position -> schedule registry entries.
pub const INDEX_SEED: &[u8] = b"schedule-index";
