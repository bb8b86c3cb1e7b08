/// What a seat may do with the stake on the table: press on or bank it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Roll,
    Hold,
}

impl TryFrom<&str> for Choice {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "r" | "R" => Ok(Choice::Roll),
            "h" | "H" => Ok(Choice::Hold),
            _ => Err("enter 'r' to roll or 'h' to hold"),
        }
    }
}
