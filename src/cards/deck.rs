use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends Hand with the ability to draw cards at random. All
/// randomness flows through the caller's generator, so shuffles are
/// reproducible under a fixed seed.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::empty().complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a uniformly random card from the deck
    pub fn draw(&mut self, rng: &mut impl Rng) -> Card {
        assert!(self.0.size() > 0, "deck exhausted");
        let i = rng.random_range(0..self.0.size());
        let mut scan = self.0;
        let card = scan.nth(i).expect("index within deck");
        self.0.remove(card);
        card
    }

    /// remove n uniformly random cards from the deck
    pub fn deal(&mut self, n: usize, rng: &mut impl Rng) -> Hand {
        let mut hand = Hand::empty();
        for _ in 0..n {
            hand.insert(self.draw(rng));
        }
        hand
    }
}
