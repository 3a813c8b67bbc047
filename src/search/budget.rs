use std::time::Duration;
use std::time::Instant;

/// How much search one decision is allowed: a fixed number of
/// iterations, or a wall-clock allowance. The allowance is polled at
/// the top of every iteration and never preempts one in progress.
#[derive(Debug, Clone, Copy)]
pub enum Budget {
    Simulations(usize),
    Deadline(Duration),
}

impl Budget {
    pub fn exhausted(&self, iterations: usize, start: Instant) -> bool {
        match self {
            Budget::Simulations(n) => iterations >= *n,
            Budget::Deadline(allowance) => start.elapsed() >= *allowance,
        }
    }

    /// split across independent workers: simulation counts divide into
    /// roughly equal shares of at least one each, deadlines are granted
    /// to every worker in full
    pub fn split(&self, workers: usize) -> Budget {
        match self {
            Budget::Simulations(n) => Budget::Simulations(1.max(n / workers.max(1))),
            Budget::Deadline(allowance) => Budget::Deadline(*allowance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulations_count_down() {
        let budget = Budget::Simulations(3);
        let start = Instant::now();
        assert!(!budget.exhausted(2, start));
        assert!(budget.exhausted(3, start));
    }

    #[test]
    fn split_keeps_at_least_one() {
        match Budget::Simulations(10).split(4) {
            Budget::Simulations(n) => assert_eq!(n, 2),
            _ => unreachable!(),
        }
        match Budget::Simulations(2).split(8) {
            Budget::Simulations(n) => assert_eq!(n, 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn deadline_granted_in_full() {
        match Budget::Deadline(Duration::from_millis(50)).split(4) {
            Budget::Deadline(d) => assert_eq!(d, Duration::from_millis(50)),
            _ => unreachable!(),
        }
    }
}
