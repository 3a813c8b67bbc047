use crate::Probability;

/// Longitudinal accuracy bookkeeping, owned by the caller and written
/// between decisions: each record pairs the win probability the search
/// reported with what actually happened. Decisions that produced no
/// prediction are skipped. Pure bookkeeping; never consulted by the
/// search itself.
#[derive(Debug, Default)]
pub struct Ledger(Vec<(Probability, Probability)>);

impl Ledger {
    pub fn record(&mut self, estimate: Option<Probability>, won: bool) {
        if let Some(estimate) = estimate {
            self.0.push((estimate, if won { 1. } else { 0. }));
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// mean of squared residuals over all records, zero when empty
    pub fn mean_squared_error(&self) -> Probability {
        if self.0.is_empty() {
            return 0.;
        }
        self.0
            .iter()
            .map(|(estimate, outcome)| (estimate - outcome) * (estimate - outcome))
            .sum::<Probability>()
            / self.0.len() as Probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_of_the_worked_example() {
        let mut ledger = Ledger::default();
        ledger.record(Some(0.8), true);
        ledger.record(Some(0.2), false);
        ledger.record(Some(0.5), true);
        let expected = (0.2f32 * 0.2 + 0.2 * 0.2 + 0.25 * 0.25) / 3.;
        assert!((ledger.mean_squared_error() - expected).abs() < 1e-6);
    }

    #[test]
    fn empty_ledger_scores_zero() {
        assert_eq!(Ledger::default().mean_squared_error(), 0.);
    }

    #[test]
    fn undefined_predictions_are_skipped() {
        let mut ledger = Ledger::default();
        ledger.record(None, true);
        ledger.record(None, false);
        assert!(ledger.is_empty());
        ledger.record(Some(1.), true);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.mean_squared_error(), 0.);
    }
}
