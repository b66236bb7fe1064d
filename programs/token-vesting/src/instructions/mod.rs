pub mod initialize;
pub mod deposit_tokens;
pub mod create_schedule;
pub mod release;
pub mod revoke;
pub mod withdraw;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use deposit_tokens::*;
pub use create_schedule::*;
pub use release::*;
pub use revoke::*;
pub use withdraw::*;
pub use emit_vesting_quote::*;
