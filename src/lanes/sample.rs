use crate::HAND;
use crate::N;
use crate::game::game::Game;
use crate::game::showdown::VACANT;

/// The bridge format between the determinizer and the batched engine:
/// one determinized hand flattened to a fixed-shape seat-by-slot grid
/// of card codes, VACANT where a seat holds fewer than three cards.
/// Every lane carries the same fixed-width layout.
pub type Grid = [[i8; HAND]; N];

/// flatten one position's hands into a lane grid
pub fn encode(game: &Game) -> Grid {
    let mut grid = [[VACANT; HAND]; N];
    for seat in 0..N {
        for (slot, card) in game.hand(seat).into_iter().enumerate() {
            grid[seat][slot] = i8::from(card);
        }
    }
    grid
}
