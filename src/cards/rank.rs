#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Four = 0,
    Five = 1,
    Six = 2,
    Seven = 3,
    Queen = 4,
    Jack = 5,
    King = 6,
    Ace = 7,
    Two = 8,
    Three = 9,
}

impl Rank {
    pub const COUNT: usize = 10;

    /// the rank immediately above this one in Truco order, wrapping at the top.
    /// the trump rank of a hand is the next() of the turned card's rank.
    pub fn next(&self) -> Self {
        Self::from((u8::from(*self) + 1) % Self::COUNT as u8)
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Four,
            1 => Rank::Five,
            2 => Rank::Six,
            3 => Rank::Seven,
            4 => Rank::Queen,
            5 => Rank::Jack,
            6 => Rank::King,
            7 => Rank::Ace,
            8 => Rank::Two,
            9 => Rank::Three,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        match s {
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            _ => panic!("Invalid rank str: {}", s),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Queen => "Q",
                Rank::Jack => "J",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
            }
        )
    }
}
