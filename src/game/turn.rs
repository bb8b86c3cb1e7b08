/// A turn in flight. It keeps Rolling until the die busts it or the seat
/// banks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Rolling,
    Busted,
    Held,
}
