/// Suits are enumerated in descending trump precedence:
/// among the four trumps of a hand, Clubs beats Hearts beats
/// Spades beats Diamonds. Natural (non-trump) cards ignore suit.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Heart = 1,
    Spade = 2,
    Diamond = 3,
}

impl Suit {
    pub const COUNT: usize = 4;
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Heart,
            2 => Suit::Spade,
            3 => Suit::Diamond,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "c" => Suit::Club,
            "h" => Suit::Heart,
            "s" => Suit::Spade,
            "d" => Suit::Diamond,
            _ => panic!("Invalid suit str: {}", s),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Heart => "h",
                Suit::Spade => "s",
                Suit::Diamond => "d",
            }
        )
    }
}
