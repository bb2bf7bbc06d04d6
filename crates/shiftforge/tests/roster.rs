//! End-to-end tests: configuration to seed to evaluation.

use shiftforge::prelude::*;
use shiftforge::{seeded_rng, ShiftForgeError};

fn repo_config() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../shiftforge.toml").to_string()
}

#[test]
fn test_repo_config_is_the_reference_roster() {
    let loaded = RosterProblem::load(repo_config()).unwrap();
    let reference = RosterProblem::reference().unwrap();

    assert_eq!(loaded.catalog(), reference.catalog());
    assert_eq!(loaded.weights(), reference.weights());
    assert_eq!(loaded.schedule_len(), 9 * 14);
}

#[test]
fn test_reference_catalog_introspection() {
    let problem = RosterProblem::reference().unwrap();
    let catalog = problem.catalog();

    let ids: Vec<_> = catalog.shifts().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["O", "D", "N", "S"]);
    assert_eq!(catalog.days()[0].to_string(), "Day_2024/04/01");
    assert!(catalog.days()[13].is_final_day());

    for (index, employee) in catalog.employees().iter().enumerate() {
        assert_eq!(employee.index(), index);
        assert_eq!(catalog.employee(index).unwrap(), employee);
        assert_eq!(employee.work_cycle().n_work_days(), 5);
    }
}

#[test]
fn test_seed_scores_zero_under_reference_weights() {
    let problem = RosterProblem::reference().unwrap();

    for seed in 0..10 {
        let cells = problem.generate_seed(&mut seeded_rng(Some(seed))).unwrap();
        let evaluation = problem.evaluate(&cells).unwrap();

        assert_eq!(evaluation.penalty(PenaltyKind::OffOnWorkDay), 0);
        assert_eq!(evaluation.penalty(PenaltyKind::ShiftOnRestDay), 0);
        assert_eq!(evaluation.penalty(PenaltyKind::CycleUniformity), 0);
        assert_eq!(evaluation.total, 0);
        assert_eq!(evaluation.score(), SimpleScore::ZERO);
    }
}

#[test]
fn test_configured_seed_is_reproducible() {
    let config = ShiftForgeConfig::reference().with_random_seed(2024);
    let problem = RosterProblem::from_config(config).unwrap();

    let first = problem.generate_seed(&mut problem.rng()).unwrap();
    let second = problem.generate_seed(&mut problem.rng()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_explain_agrees_with_evaluate() {
    let problem = RosterProblem::reference().unwrap();
    let cells = problem
        .random_schedule(&mut seeded_rng(Some(9)))
        .unwrap();

    let evaluation = problem.evaluate(&cells).unwrap();
    let explanation = problem.explain(&cells).unwrap();
    assert_eq!(explanation.evaluation, evaluation);

    let per_employee: u64 = explanation
        .employee_indictments
        .iter()
        .map(|i| i.match_count())
        .sum();
    let per_day: u64 = explanation
        .day_indictments
        .iter()
        .map(|i| i.match_count())
        .sum();
    assert_eq!(per_employee + per_day, evaluation.penalties.sum());
}

#[test]
fn test_custom_weights_from_config() {
    let config = ShiftForgeConfig::reference()
        .with_weight(PenaltyKind::HeadcountMismatch, 3)
        .with_weight(PenaltyKind::CycleUniformity, 0);
    let problem = RosterProblem::from_config(config).unwrap();
    let cells = problem.generate_seed(&mut seeded_rng(Some(1))).unwrap();
    let evaluation = problem.evaluate(&cells).unwrap();

    assert_eq!(
        evaluation.total,
        3 * evaluation.penalty(PenaltyKind::HeadcountMismatch) as i64
    );
}

#[test]
fn test_batch_evaluation() {
    let problem = RosterProblem::reference().unwrap();
    let mut rng = seeded_rng(Some(77));
    let population: Vec<Vec<usize>> = (0..8)
        .map(|_| problem.random_schedule(&mut rng).unwrap())
        .collect();

    let batch = problem.evaluate_batch(&population).unwrap();
    for (cells, evaluation) in population.iter().zip(&batch) {
        assert_eq!(&problem.evaluate(cells).unwrap(), evaluation);
    }
}

#[test]
fn test_malformed_input_is_rejected() {
    let problem = RosterProblem::reference().unwrap();

    let err = problem.evaluate(&[0; 10]).unwrap_err();
    assert_eq!(
        err,
        ShiftForgeError::LengthMismatch {
            expected: 126,
            actual: 10
        }
    );

    let mut cells = vec![1; 126];
    cells[0] = 9;
    assert!(problem.evaluate(&cells).unwrap_err().is_input_error());
    assert!(problem.evaluate_batch(&[cells]).is_err());
}
