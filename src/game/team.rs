use crate::Position;

/// Seats 0 and 2 partner as Team One, seats 1 and 3 as Team Two.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn of(seat: Position) -> Self {
        match seat % 2 {
            0 => Team::One,
            _ => Team::Two,
        }
    }
    pub fn other(&self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
    pub fn index(&self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Team::One => write!(f, "team 1"),
            Team::Two => write!(f, "team 2"),
        }
    }
}
