use super::budget::Budget;
use super::mcts::Decision;
use super::mcts::Search;
use crate::Position;
use crate::cards::card::Card;
use crate::game::game::Game;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The fan-out orchestrator: K sequential drivers run to completion on
/// their own copies of the root position and their own pseudorandom
/// streams, sharing nothing; the fan-in is a sequential plurality vote
/// over their recommendations. No locks, no cancellation.
pub struct Pool {
    seat: Position,
    budget: Budget,
    workers: usize,
    lanes: Option<usize>,
    seed: u64,
}

impl Pool {
    pub fn new(seat: Position, budget: Budget, seed: u64) -> Self {
        Self {
            seat,
            budget,
            workers: num_cpus::get(),
            lanes: None,
            seed,
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// workers score leaves with the batched lane engine
    pub fn batched(mut self, lanes: usize) -> Self {
        self.lanes = Some(lanes);
        self
    }

    pub fn decide(&self, game: &Game) -> Decision {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let share = self.budget.split(self.workers);
        let votes = (0..self.workers)
            .into_par_iter()
            .map(|worker| {
                let root = *game;
                let mut search = Search::new(self.seat, share, crate::stream(self.seed, worker));
                if let Some(lanes) = self.lanes {
                    search = search.batched(lanes);
                }
                search.decide(&root)
            })
            .collect::<Vec<_>>();
        log::debug!("seat {} collected {} worker votes", self.seat, votes.len());
        self.tally(game, &votes)
    }

    /// plurality vote over worker recommendations, ties broken by the
    /// first worker to reach the winning count; the estimate comes from
    /// the first worker that recommended the winning card
    fn tally(&self, game: &Game, votes: &[Decision]) -> Decision {
        let mut counts: Vec<(Card, usize)> = Vec::new();
        for vote in votes {
            if let Some(card) = vote.action {
                match counts.iter_mut().find(|(c, _)| *c == card) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((card, 1)),
                }
            }
        }
        let winner = counts
            .iter()
            .fold(None, |best: Option<(Card, usize)>, &(card, n)| match best {
                Some((_, top)) if n <= top => best,
                _ => Some((card, n)),
            });
        match winner {
            Some((card, _)) => Decision {
                action: Some(card),
                estimate: votes
                    .iter()
                    .find(|vote| vote.action == Some(card))
                    .expect("winning card was voted for")
                    .estimate,
            },
            // no worker produced a recommendation: degrade to a
            // uniform pick so the game loop keeps moving
            None => {
                let moves = game.legal();
                let ref mut rng = SmallRng::seed_from_u64(crate::stream(self.seed, self.workers));
                Decision {
                    action: match moves.len() {
                        0 => None,
                        n => Some(moves[rng.random_range(0..n)]),
                    },
                    estimate: 0.5,
                }
            }
        }
    }
}
