use anyhow::Result;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use trucarlo::Probability;
use trucarlo::game::game::Game;
use trucarlo::game::phase::Phase;
use trucarlo::game::team::Team;
use trucarlo::search::budget::Budget;
use trucarlo::search::eleven;
use trucarlo::search::ledger::Ledger;
use trucarlo::search::parallel::Pool;

/// Play one full game of Truco 2v2 with seat 0 driven by Monte Carlo
/// tree search and every other seat playing uniformly at random, then
/// report the final score and the searcher's prediction accuracy.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// search iterations per decision
    #[arg(long, default_value_t = 20_000)]
    simulations: usize,
    /// wall-clock budget per decision in milliseconds, overriding --simulations
    #[arg(long)]
    millis: Option<u64>,
    /// independent search workers, 0 meaning one per core
    #[arg(long, default_value_t = 0)]
    workers: usize,
    /// score tree leaves with the batched lane engine
    #[arg(long)]
    batched: bool,
    /// lanes per batched leaf evaluation
    #[arg(long, default_value_t = trucarlo::LANES)]
    lanes: usize,
    /// base seed for every pseudorandom stream
    #[arg(long, default_value_t = 2486)]
    seed: u64,
    /// full-game samples per eleven-hand decision
    #[arg(long, default_value_t = 200)]
    eleven: usize,
}

impl Args {
    /// per-decision budget. batched runs spend iterations on whole
    /// batches, so a simulation count converts to batch count.
    fn budget(&self) -> Budget {
        match self.millis {
            Some(ms) => Budget::Deadline(Duration::from_millis(ms)),
            None => match self.batched {
                true => Budget::Simulations(1.max(self.simulations / self.lanes)),
                false => Budget::Simulations(self.simulations),
            },
        }
    }

    fn pool(&self, decisions: usize) -> Pool {
        let pool = Pool::new(HERO, self.budget(), trucarlo::stream(self.seed, decisions));
        let pool = match self.workers {
            0 => pool,
            k => pool.workers(k),
        };
        match self.batched {
            true => pool.batched(self.lanes),
            false => pool,
        }
    }
}

/// the searching seat; its partner sits across at seat 2
const HERO: usize = 0;

fn main() -> Result<()> {
    trucarlo::log();
    let args = Args::parse();
    let team = Team::of(HERO);
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let mut game = Game::new();
    let mut ledger = Ledger::default();
    let mut pending: Option<Probability> = None;
    let mut decisions = 0;
    while game.phase() != Phase::GameFinished {
        match game.phase() {
            Phase::NewHand | Phase::HandFinished => {
                if game.phase() == Phase::HandFinished {
                    ledger.record(pending.take(), game.winner() == Some(team));
                }
                game.begin(rng);
            }
            Phase::ElevenHand => {
                let risk = game.at_risk().expect("eleven-hand armed");
                game.deal(rng);
                let plays = match risk == team {
                    true => eleven::accept(&game, HERO, args.eleven, rng),
                    false => rng.random_bool(0.5),
                };
                if !plays {
                    log::info!("{} runs from the eleven-hand", risk);
                    game.concede(risk);
                }
            }
            Phase::InProgress => {
                let seat = game.ticker();
                let moves = game.legal();
                if moves.is_empty() {
                    game.showdown();
                    continue;
                }
                let card = match seat {
                    HERO => {
                        let decision = args.pool(decisions).decide(&game);
                        decisions += 1;
                        match decision.action {
                            Some(card) => {
                                pending = Some(decision.estimate);
                                log::info!(
                                    "hand {:>2}: seat {} plays {} expecting {:.2}",
                                    game.dealt(),
                                    seat,
                                    card,
                                    decision.estimate
                                );
                                card
                            }
                            None => moves[rng.random_range(0..moves.len())],
                        }
                    }
                    _ => moves[rng.random_range(0..moves.len())],
                };
                game.apply(seat, card);
            }
            Phase::GameFinished => unreachable!(),
        }
    }
    ledger.record(pending.take(), game.winner() == Some(team));
    log::info!(
        "final: team 1 {} x {} team 2 over {} hands",
        game.score(Team::One),
        game.score(Team::Two),
        game.dealt(),
    );
    log::info!(
        "accuracy: {:.4} mse over {} predictions",
        ledger.mean_squared_error(),
        ledger.len(),
    );
    Ok(())
}
