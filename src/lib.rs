pub mod cards;
pub mod game;
pub mod lanes;
pub mod search;

/// Strategy weights, win rates, and Monte Carlo estimates.
pub type Probability = f32;
/// Rollout scores and backpropagated win mass.
pub type Utility = f32;
/// Seat index around the table. Teams alternate by parity.
pub type Position = usize;

/// players at the table
pub const N: usize = 4;
/// cards dealt to each seat at hand start
pub const HAND: usize = 3;
/// tricks per hand
pub const TRICKS: usize = 3;
/// distinct cards in the Truco deck
pub const DECK: usize = 40;
/// points that end the game
pub const GAME: u8 = 12;
/// score that arms the eleven-hand decision
pub const ELEVEN: u8 = 11;
/// UCB1 exploration constant
pub const EXPLORATION: f32 = std::f32::consts::SQRT_2;
/// additive epsilon keeping zero-visit children finite under UCB1
pub const UCB_EPSILON: f32 = 1e-6;
/// lanes per batched leaf evaluation
pub const LANES: usize = 4096;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Derive a decorrelated seed for a worker or lane from a base seed
/// and a task index. Every concurrent unit of work gets its own stream.
pub fn stream(seed: u64, index: usize) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hash;
    use std::hash::Hasher;
    let ref mut hasher = DefaultHasher::new();
    seed.hash(hasher);
    index.hash(hasher);
    hasher.finish()
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
/// Binaries call this once; the library itself never initializes logging.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
