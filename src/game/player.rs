use super::choice::Choice;
use crate::Points;
use std::fmt::Debug;

/// A seat's brain. Given the stake riding on the turn and the banked
/// score, pick between another roll and a hold. Implementations see only
/// what is on the table, so the engine never cares who is deciding.
pub trait Player: Debug {
    fn decide(&self, stake: Points, score: Points) -> Choice;
}
