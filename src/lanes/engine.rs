use super::kernel;
use super::rng::Stream;
use super::sample::Grid;
use crate::Position;
use crate::Probability;
use crate::cards::rank::Rank;

/// One synchronous data-parallel dispatch: every lane owns a private
/// copy of its grid, a private pseudorandom stream, and exactly one
/// disjoint slot of the output buffer; nothing else is shared, and the
/// call does not return until every lane has completed. The per-lane
/// work is `kernel::hand_impl`, shared as-is with any accelerator
/// device path; this host path spreads the lanes across cores.
pub fn batched_rollout(
    grids: &[Grid],
    leaders: &[Position],
    trump: Rank,
    seed: u64,
) -> Vec<u8> {
    use rayon::iter::IndexedParallelIterator;
    use rayon::iter::IntoParallelRefMutIterator;
    use rayon::iter::ParallelIterator;
    assert!(grids.len() == leaders.len(), "one leader per lane");
    let mut wins = vec![0u8; grids.len()];
    wins.par_iter_mut().enumerate().for_each(|(lane, slot)| {
        let mut grid = grids[lane];
        let mut rng = Stream::new(seed, lane);
        *slot = kernel::hand_impl(&mut grid, leaders[lane], trump, &mut rng);
    });
    wins
}

/// batch-mean win indicator, the scalar fed to backpropagation
pub fn mean(wins: &[u8]) -> Probability {
    match wins.len() {
        0 => 0.,
        n => wins.iter().map(|w| *w as Probability).sum::<Probability>() / n as Probability,
    }
}
