pub mod human;
pub use human::*;

pub mod robot;
pub use robot::*;

use crate::game::player::Player;
use clap::ValueEnum;

/// Who can occupy a seat, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Human,
    Computer,
}

impl From<Kind> for Box<dyn Player> {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Human => Box::new(Human),
            Kind::Computer => Box::new(Robot),
        }
    }
}
