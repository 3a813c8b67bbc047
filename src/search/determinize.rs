use crate::N;
use crate::Position;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::game::game::Game;
use crate::lanes::sample::Grid;
use crate::lanes::sample::encode;
use rand::Rng;

/// Everything `seat` can see: its own cards, the trick in progress,
/// the turned card, and every card gone to a resolved trick. The
/// unions are disjoint by the rules, so overlap fails fast.
fn known(game: &Game, seat: Position) -> Hand {
    let mut known = game.hand(seat);
    for card in game.table().iter().flatten() {
        known = Hand::add(known, Hand::from(u64::from(*card)));
    }
    if let Some(vira) = game.vira() {
        known = Hand::add(known, Hand::from(u64::from(vira)));
    }
    Hand::add(known, game.gone())
}

/// Sample one fully observed position consistent with what `seat`
/// knows: every other seat's hidden cards are replaced by a uniform
/// without-replacement draw from the unseen remainder of the deck,
/// preserving how many cards each seat has already played. The acting
/// seat's own hand is never altered.
pub fn determinize(game: &Game, seat: Position, rng: &mut impl Rng) -> Game {
    let mut sample = *game;
    let mut unseen = Deck::from(known(game, seat).complement());
    for other in (0..N).filter(|s| *s != seat) {
        let hidden = game.hand(other).size();
        assert!(unseen.size() >= hidden, "unseen pool exhausted");
        sample.redeal(other, unseen.deal(hidden, rng));
    }
    sample
}

/// Flatten `n` independent determinizations into fixed-shape lane
/// grids for the batched engine, with the per-lane leading seat. Cards
/// sitting on the table are omitted from every grid: lanes restart the
/// trick in progress from the seat to move.
pub fn flatten(
    game: &Game,
    seat: Position,
    n: usize,
    rng: &mut impl Rng,
) -> (Vec<Grid>, Vec<Position>) {
    let grids = (0..n)
        .map(|_| encode(&determinize(game, seat, rng)))
        .collect();
    let leaders = vec![game.ticker(); n];
    (grids, leaders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DECK;
    use crate::cards::card::Card;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn midgame() -> Game {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let mut game = Game::new();
        game.begin(rng);
        // play one full trick so the gone pile is non-empty
        for _ in 0..N {
            let seat = game.ticker();
            let card = game.hand(seat).into_iter().next().expect("card");
            game.apply(seat, card);
        }
        // and leave two cards on the table mid-trick
        for _ in 0..2 {
            let seat = game.ticker();
            let card = game.hand(seat).into_iter().next().expect("card");
            game.apply(seat, card);
        }
        game
    }

    #[test]
    fn acting_hand_is_untouched() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        let game = midgame();
        let seat = game.ticker();
        for _ in 0..32 {
            let sample = determinize(&game, seat, rng);
            assert_eq!(sample.hand(seat), game.hand(seat));
        }
    }

    #[test]
    fn sample_partitions_the_deck() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        let game = midgame();
        let seat = game.ticker();
        for _ in 0..32 {
            let sample = determinize(&game, seat, rng);
            // every card lives in exactly one place
            let mut seen = sample.gone();
            for other in 0..N {
                seen = Hand::add(seen, sample.hand(other));
            }
            for card in sample.table().iter().flatten() {
                seen = Hand::add(seen, Hand::from(u64::from(*card)));
            }
            let vira = sample.vira().expect("turned card");
            seen = Hand::add(seen, Hand::from(u64::from(vira)));
            assert!(seen.size() <= DECK);
            // hand sizes and public state are preserved
            for other in 0..N {
                assert_eq!(sample.hand(other).size(), game.hand(other).size());
            }
            assert_eq!(sample.table(), game.table());
            assert_eq!(sample.vira(), game.vira());
            assert_eq!(sample.gone(), game.gone());
        }
    }

    #[test]
    fn samples_vary() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        let game = midgame();
        let seat = game.ticker();
        let others: Vec<[Hand; N]> = (0..16)
            .map(|_| std::array::from_fn(|s| determinize(&game, seat, rng).hand(s)))
            .collect();
        assert!(others.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn flattened_lanes_start_at_the_ticker() {
        let ref mut rng = SmallRng::seed_from_u64(99);
        let game = midgame();
        let seat = game.ticker();
        let (grids, leaders) = flatten(&game, seat, 8, rng);
        assert_eq!(grids.len(), 8);
        assert!(leaders.iter().all(|l| *l == game.ticker()));
        // the acting seat's lane cards are exactly its real hand
        for grid in grids {
            let held: Vec<Card> = grid[seat]
                .iter()
                .filter(|c| **c >= 0)
                .map(|c| Card::from(*c as u8))
                .collect();
            assert_eq!(Hand::from(held), game.hand(seat));
        }
    }
}
