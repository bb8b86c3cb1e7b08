use super::choice::Choice;
use super::player::Player;
use crate::dice::face::Face;
use crate::Points;
use colored::Colorize;

/// A competitor at the table: a name, a banked score, and the stake riding
/// on the current turn. The score moves only through `hold`, so whatever
/// the die does mid-turn, banked points are safe.
#[derive(Debug)]
pub struct Seat {
    name: String,
    score: Points,
    stake: Points,
    actor: Box<dyn Player>,
}

impl Seat {
    pub fn new(name: &str, actor: Box<dyn Player>) -> Seat {
        Seat {
            name: name.to_string(),
            score: 0,
            stake: 0,
            actor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn stake(&self) -> Points {
        self.stake
    }

    /// Apply one roll of the die. A one wipes the stake and ends the turn;
    /// any other face rides. Returns whether the turn may continue.
    pub fn roll(&mut self, face: Face) -> bool {
        match face.is_bust() {
            true => {
                self.stake = 0;
                false
            }
            false => {
                self.stake += face.pips();
                true
            }
        }
    }

    /// Bank the stake into the score and clear it, in one move.
    pub fn hold(&mut self) {
        self.score += self.stake;
        self.stake = 0;
    }

    /// Ask the seat's occupant what to do with the stake on the table.
    pub fn decide(&self) -> Choice {
        self.actor.decide(self.stake, self.score)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10} {}", self.name, format!("{:>3}", self.score).green())
    }
}
