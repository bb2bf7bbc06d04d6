//! Parallel evaluation of schedule populations.

use rayon::prelude::*;
use tracing::info;

use shiftforge_core::{Result, Schedule};

use crate::evaluator::{ConstraintEvaluator, Evaluation};

impl ConstraintEvaluator<'_> {
    /// Evaluates every schedule on the rayon pool.
    ///
    /// Results are in input order and identical to evaluating each schedule
    /// on its own. Fails if any schedule does not fit the catalog.
    pub fn evaluate_batch(&self, schedules: &[Schedule]) -> Result<Vec<Evaluation>> {
        let evaluations: Vec<Evaluation> = schedules
            .par_iter()
            .map(|s| self.evaluate(s))
            .collect::<Result<_>>()?;

        if let Some(best) = evaluations.iter().map(|e| e.total).min() {
            info!(
                event = "evaluate_batch",
                schedules = schedules.len(),
                best_total = best,
            );
        }
        Ok(evaluations)
    }
}

#[cfg(test)]
mod tests {
    use shiftforge_core::Schedule;
    use shiftforge_test::{cycle_catalog, reference_catalog};

    use crate::evaluator::ConstraintEvaluator;

    #[test]
    fn test_batch_matches_sequential() {
        let catalog = reference_catalog();
        let population: Vec<Schedule> = (0..16)
            .map(|k| {
                let cells = (0..catalog.n_conditions()).map(|i| (i * k + k) % 4).collect();
                Schedule::from_flat(&catalog, cells).unwrap()
            })
            .collect();
        let evaluator = ConstraintEvaluator::new(&catalog);

        let batch = evaluator.evaluate_batch(&population).unwrap();
        let sequential: Vec<_> = population
            .iter()
            .map(|s| evaluator.evaluate(s).unwrap())
            .collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn test_empty_batch() {
        let catalog = reference_catalog();
        let batch = ConstraintEvaluator::new(&catalog).evaluate_batch(&[]).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_batch_rejects_schedule_of_another_catalog() {
        let catalog = reference_catalog();
        let other = cycle_catalog(2, 5, 14);
        let population = vec![
            Schedule::from_flat(&catalog, vec![1; catalog.n_conditions()]).unwrap(),
            Schedule::from_flat(&other, vec![1; other.n_conditions()]).unwrap(),
        ];

        let err = ConstraintEvaluator::new(&catalog)
            .evaluate_batch(&population)
            .unwrap_err();
        assert!(err.is_input_error());
    }
}
