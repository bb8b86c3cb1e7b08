use super::face::Face;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// A source of die faces, one per call. The table die is one; tests and
/// rigged demos substitute a loaded die with a scripted sequence.
pub trait Dice {
    fn roll(&mut self) -> Face;
}

/// A fair six-sided die. Seeded, so the same seed rolls the same match
/// every run.
#[derive(Debug, Clone)]
pub struct Die(SmallRng);

impl Die {
    pub fn with_seed(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Dice for Die {
    fn roll(&mut self) -> Face {
        Face::from(self.0.random_range(1..=6u8))
    }
}
