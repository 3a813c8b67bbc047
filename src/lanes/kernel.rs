use super::rng::Stream;
use super::sample::Grid;
use crate::HAND;
use crate::N;
use crate::Position;
use crate::TRICKS;
use crate::cards::rank::Rank;
use crate::game::showdown;
use crate::game::showdown::VACANT;
use crate::game::showdown::Verdict;
use crate::game::team::Team;

/// One lane's whole rollout: up to three tricks of four uniform-random
/// plays over the lane's private grid, settled with the rules engine's
/// precedence after every trick so the outcome distribution matches
/// the scalar rollout policy exactly. Control flow is uniform across
/// lanes: every lane walks all three trick slots, with settled lanes
/// idling through the remainder. Nothing is read or written outside
/// the lane's own arguments, so the function is shareable verbatim
/// between the host path and an accelerator lane.
///
/// Returns 1 iff team 1 takes the hand; the caller inverts when it is
/// evaluating team 2.
pub fn hand_impl(grid: &mut Grid, leader: Position, trump: Rank, rng: &mut Stream) -> u8 {
    let mut tricks = [None::<Team>; TRICKS];
    let mut played = 0;
    let mut leader = leader;
    let mut verdict = Verdict::Open;
    for _ in 0..TRICKS {
        if verdict != Verdict::Open {
            continue;
        }
        let mut plays = [VACANT; N];
        for turn in 0..N {
            let seat = (leader + turn) % N;
            let remaining = grid[seat].iter().filter(|c| **c >= 0).count();
            if remaining == 0 {
                continue; // out of cards: the slot stays vacant
            }
            let choice = rng.below(remaining);
            let mut seen = 0;
            for slot in 0..HAND {
                if grid[seat][slot] >= 0 {
                    if seen == choice {
                        plays[seat] = grid[seat][slot];
                        grid[seat][slot] = VACANT;
                        break;
                    }
                    seen += 1;
                }
            }
        }
        match showdown::trick(plays, trump) {
            Some(winner) => {
                tricks[played] = Some(Team::of(winner));
                leader = winner;
            }
            None => tricks[played] = None, // tied trick keeps the leader
        }
        played += 1;
        verdict = showdown::settle(&tricks[..played]);
    }
    (verdict == Verdict::Won(Team::One)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::hand::Hand;
    use crate::game::game::Game;
    use crate::lanes::sample::encode;

    fn grid(hands: [Hand; N]) -> Grid {
        encode(&Game::rig(hands, Card::from("Jh"), 0))
    }

    #[test]
    fn lone_trumps_sweep_the_lane() {
        let hands = [
            Hand::from("Qc Qh Qs"),
            Hand::from("4h 5h 3h"),
            Hand::from("4s 5s 3s"),
            Hand::from("4d 5d 3d"),
        ];
        for lane in 0..256 {
            let mut lane_grid = grid(hands);
            let mut rng = Stream::new(8, lane);
            assert_eq!(hand_impl(&mut lane_grid, 0, Rank::Queen, &mut rng), 1);
        }
    }

    #[test]
    fn opponent_trumps_lose_the_lane() {
        let hands = [
            Hand::from("4h 5h 3h"),
            Hand::from("Qc Qh Qs"),
            Hand::from("4s 5s 3s"),
            Hand::from("4d 5d 3d"),
        ];
        for lane in 0..256 {
            let mut lane_grid = grid(hands);
            let mut rng = Stream::new(8, lane);
            assert_eq!(hand_impl(&mut lane_grid, 0, Rank::Queen, &mut rng), 0);
        }
    }

    #[test]
    fn mirrored_singletons_draw_the_lane() {
        // one equal-rank natural each: trick one ties, the vacant
        // remainder ties, and a fully tied hand is drawn
        let hands = [
            Hand::from("Kc"),
            Hand::from("Kh"),
            Hand::from("Ks"),
            Hand::from("Kd"),
        ];
        let mut lane_grid = grid(hands);
        let mut rng = Stream::new(0, 0);
        assert_eq!(hand_impl(&mut lane_grid, 0, Rank::Queen, &mut rng), 0);
    }

    #[test]
    fn settled_lanes_idle_through_the_rest() {
        // all-trump seat 0 wins the first two tricks whatever it draws,
        // so the hand settles early and the third trick never runs
        let hands = [
            Hand::from("Qc Qh Qs"),
            Hand::from("4h 5h 3h"),
            Hand::from("4s 5s 3s"),
            Hand::from("4d 5d 3d"),
        ];
        for lane in 0..64 {
            let mut lane_grid = grid(hands);
            let mut rng = Stream::new(5, lane);
            assert_eq!(hand_impl(&mut lane_grid, 0, Rank::Queen, &mut rng), 1);
            let remaining = lane_grid.iter().flatten().filter(|c| **c >= 0).count();
            assert_eq!(remaining, N);
        }
    }
}
