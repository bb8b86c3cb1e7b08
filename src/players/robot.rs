/// Plays the textbook line: hold once the stake reaches 25, or sooner once
/// the stake is enough to reach the goal.
pub struct Robot;

impl Player for Robot {
    fn decide(&self, stake: Points, score: Points) -> Choice {
        match stake >= HOLD_AT.min(GOAL.saturating_sub(score)) {
            true => Choice::Hold,
            false => Choice::Roll,
        }
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

use crate::game::choice::Choice;
use crate::game::player::Player;
use crate::game::GOAL;
use crate::game::HOLD_AT;
use crate::Points;
use std::fmt::Debug;
