use crate::Utility;
use crate::game::game::Game;
use crate::game::phase::Phase;
use crate::game::team::Team;
use rand::Rng;

/// Play a fully observed hand to termination with every seat choosing
/// uniformly at random among its legal cards. A seat to move with no
/// cards left forces a hand-outcome check instead of faulting. Returns
/// 1 iff `team` took the hand; draws score zero for both teams.
pub fn rollout(game: &Game, team: Team, rng: &mut impl Rng) -> Utility {
    let mut game = *game;
    while game.phase() == Phase::InProgress {
        let moves = game.legal();
        if moves.is_empty() {
            game.showdown();
            continue;
        }
        let card = moves[rng.random_range(0..moves.len())];
        game.apply(game.ticker(), card);
    }
    match game.winner() {
        Some(winner) if winner == team => 1.,
        _ => 0.,
    }
}
