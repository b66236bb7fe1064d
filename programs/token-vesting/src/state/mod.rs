pub mod config;
pub mod registry;
pub mod schedule;

pub use config::*;
pub use registry::*;
pub use schedule::*;
