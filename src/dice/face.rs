use crate::Points;

/// One face of a six-sided die. The single pip busts: it wipes whatever
/// stake was riding on the turn.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Face {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Face {
    pub fn pips(self) -> Points {
        u8::from(self) as Points
    }
    pub fn is_bust(self) -> bool {
        self == Face::One
    }
}

impl From<u8> for Face {
    fn from(n: u8) -> Face {
        match n {
            1 => Face::One,
            2 => Face::Two,
            3 => Face::Three,
            4 => Face::Four,
            5 => Face::Five,
            6 => Face::Six,
            _ => panic!("Invalid face"),
        }
    }
}

impl From<Face> for u8 {
    fn from(f: Face) -> u8 {
        f as u8
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::One => "⚀ 1",
                Face::Two => "⚁ 2",
                Face::Three => "⚂ 3",
                Face::Four => "⚃ 4",
                Face::Five => "⚄ 5",
                Face::Six => "⚅ 6",
            }
        )
    }
}
