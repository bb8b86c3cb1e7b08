pub mod choice;
pub use choice::*;

pub mod engine;
pub use engine::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod seat;
pub use seat::*;

pub mod turn;
pub use turn::*;

use crate::Points;
use std::time::Duration;

/// Seats at the table. Pig is a duel.
pub const N: usize = 2;
/// The first seat to bank this many points wins on the spot.
pub const GOAL: Points = 100;
/// Robots bank at this stake, or sooner once the goal is within reach.
pub const HOLD_AT: Points = 25;
/// Timed tables stop at the first turn boundary past this deadline.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);
