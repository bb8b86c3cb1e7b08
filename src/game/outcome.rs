use crate::Position;

/// How a match ends: one seat wins, or the clock runs out on a dead heat.
/// Ties only happen on timed tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Position),
    Tie,
}
