use super::budget::Budget;
use super::determinize::determinize;
use super::determinize::flatten;
use super::rollout::rollout;
use super::tree::Tree;
use crate::Position;
use crate::Probability;
use crate::Utility;
use crate::cards::card::Card;
use crate::game::game::Game;
use crate::game::phase::Phase;
use crate::game::team::Team;
use crate::lanes::engine::batched_rollout;
use crate::lanes::engine::mean;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

/// What one decision call reports back to the game loop: the card to
/// play, if any, and the searcher's estimate of its team's chance of
/// taking the hand. An absent action means the seat had nothing to
/// play; the estimate is then no prediction at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Option<Card>,
    pub estimate: Probability,
}

/// How a tree leaf is scored: one determinized scalar rollout, or the
/// batched lane engine averaging thousands of determinized rollouts
/// into a single low-variance estimate per backpropagation.
#[derive(Debug, Clone, Copy)]
pub enum Leaf {
    Rollout,
    Batched(usize),
}

/// The sequential driver: one tree, one thread, select → expand →
/// evaluate → backpropagate until the budget runs out. The budget is
/// polled at the top of each iteration; an iteration in progress
/// always completes.
pub struct Search {
    seat: Position,
    budget: Budget,
    leaf: Leaf,
    rng: SmallRng,
}

impl Search {
    pub fn new(seat: Position, budget: Budget, seed: u64) -> Self {
        Self {
            seat,
            budget,
            leaf: Leaf::Rollout,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// score leaves with the batched lane engine instead
    pub fn batched(mut self, lanes: usize) -> Self {
        self.leaf = Leaf::Batched(lanes);
        self
    }

    pub fn decide(&mut self, game: &Game) -> Decision {
        if game.hand(self.seat).size() == 0 {
            return Decision {
                action: None,
                estimate: 0.5,
            };
        }
        let tree = self.explore(game);
        self.conclude(game, tree)
    }

    fn explore(&mut self, game: &Game) -> Tree {
        let start = Instant::now();
        let mut tree = Tree::new(*game);
        let mut iterations = 0;
        while !self.budget.exhausted(iterations, start) {
            let head = tree.descend(tree.root());
            let head = match tree.data(head).untried() {
                0 => head,
                _ => tree.expand(head),
            };
            let result = self.evaluate(tree.data(head).game());
            tree.backpropagate(head, result);
            iterations += 1;
        }
        log::debug!(
            "seat {} searched {} nodes over {} iterations in {:?}",
            self.seat,
            tree.size(),
            iterations,
            start.elapsed()
        );
        tree
    }

    fn conclude(&mut self, game: &Game, tree: Tree) -> Decision {
        match tree.best() {
            Some((action, estimate)) => Decision {
                action: Some(action),
                estimate,
            },
            // a root that produced no children degrades to a uniform
            // pick from the hand so the game loop never stalls on the agent
            None => {
                let held = Vec::from(game.hand(self.seat));
                Decision {
                    action: Some(held[self.rng.random_range(0..held.len())]),
                    estimate: 0.5,
                }
            }
        }
    }

    /// score a leaf from the searching team's point of view. terminal
    /// positions read their recorded outcome; open positions are
    /// determinized freshly and rolled out.
    fn evaluate(&mut self, game: &Game) -> Utility {
        let team = Team::of(self.seat);
        if game.phase() != Phase::InProgress {
            return match game.winner() {
                Some(winner) if winner == team => 1.,
                _ => 0.,
            };
        }
        match self.leaf {
            Leaf::Rollout => {
                let sample = determinize(game, self.seat, &mut self.rng);
                rollout(&sample, team, &mut self.rng)
            }
            Leaf::Batched(lanes) => {
                let (grids, leaders) = flatten(game, self.seat, lanes, &mut self.rng);
                let seed = self.rng.random::<u64>();
                let wins = batched_rollout(&grids, &leaders, game.trump(), seed);
                match team {
                    Team::One => mean(&wins),
                    Team::Two => 1. - mean(&wins),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn rigged() -> Game {
        let hands = [
            Hand::from("Qc 4c 5c"),
            Hand::from("4h 5h 6h"),
            Hand::from("4s 5s 6s"),
            Hand::from("4d 5d 6d"),
        ];
        Game::rig(hands, Card::from("Jh"), 0)
    }

    #[test]
    fn visits_are_conserved() {
        let mut search = Search::new(0, Budget::Simulations(57), 1);
        let tree = search.explore(&rigged());
        assert_eq!(tree.data(tree.root()).visits(), 57);
    }

    #[test]
    fn decisions_are_deterministic_under_a_fixed_seed() {
        let game = rigged();
        let a = Search::new(0, Budget::Simulations(200), 7).decide(&game);
        let b = Search::new(0, Budget::Simulations(200), 7).decide(&game);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_hand_short_circuits() {
        let hands = [
            Hand::empty(),
            Hand::from("4h 5h 6h"),
            Hand::from("4s 5s 6s"),
            Hand::from("4d 5d 6d"),
        ];
        let game = Game::rig(hands, Card::from("Jh"), 0);
        let decision = Search::new(0, Budget::Simulations(10), 0).decide(&game);
        assert_eq!(decision.action, None);
    }

    #[test]
    fn search_finds_the_forced_win() {
        // holding three trumps, any card wins the hand; the estimate
        // should reflect near-certainty
        let hands = [
            Hand::from("Qc Qh Qs"),
            Hand::from("4h 5h 3h"),
            Hand::from("4s 5s 3s"),
            Hand::from("4d 5d 3d"),
        ];
        let game = Game::rig(hands, Card::from("Jh"), 0);
        let decision = Search::new(0, Budget::Simulations(300), 3).decide(&game);
        assert!(decision.action.is_some());
        assert!(decision.estimate > 0.9);
    }

    #[test]
    fn deadline_budgets_terminate() {
        use std::time::Duration;
        let game = rigged();
        let budget = Budget::Deadline(Duration::from_millis(20));
        let decision = Search::new(0, budget, 11).decide(&game);
        assert!(decision.action.is_some());
    }
}
