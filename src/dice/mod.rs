pub mod die;
pub use die::*;

pub mod face;
pub use face::*;

pub mod loaded;
pub use loaded::*;

/// Seed for the table die. The same seed rolls the same match.
pub const SEED: u64 = 0;
