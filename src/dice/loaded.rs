use super::die::Dice;
use super::face::Face;
use std::collections::VecDeque;

/// A loaded die: rolls a scripted sequence in order and nothing after it.
/// Rolling past the end of the script is a bug in the caller, so it panics
/// rather than improvise.
#[derive(Debug, Clone)]
pub struct Loaded(VecDeque<Face>);

impl From<Vec<u8>> for Loaded {
    fn from(faces: Vec<u8>) -> Self {
        Self(faces.into_iter().map(Face::from).collect())
    }
}

impl Dice for Loaded {
    fn roll(&mut self) -> Face {
        self.0.pop_front().expect("the script ran out of faces")
    }
}
