//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use thiserror::Error;

use shiftforge::{ConfigError, PenaltyKind, RosterProblem, ShiftForgeError};

use crate::input::{format_schedule, parse_schedules, read_input};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Roster(#[from] ShiftForgeError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: '{token}' is not a shift index")]
    Parse { line: usize, token: String },

    #[error("no schedule in input")]
    EmptyInput,
}

pub fn load_problem(config: Option<&Path>) -> Result<RosterProblem, CliError> {
    Ok(match config {
        Some(path) => RosterProblem::load(path)?,
        None => RosterProblem::reference()?,
    })
}

pub fn seed(
    problem: &RosterProblem,
    seed: Option<u64>,
    count: usize,
    uniform: bool,
    out: Option<&Path>,
) -> Result<(), CliError> {
    let mut rng = match seed {
        Some(seed) => shiftforge::seeded_rng(Some(seed)),
        None => problem.rng(),
    };

    let mut writer: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    for _ in 0..count {
        let cells = if uniform {
            problem.random_schedule(&mut rng)?
        } else {
            problem.generate_seed(&mut rng)?
        };
        writeln!(writer, "{}", format_schedule(&cells))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn evaluate(problem: &RosterProblem, file: Option<&Path>) -> Result<(), CliError> {
    let population = parse_schedules(&read_input(file)?)?;
    if population.is_empty() {
        return Err(CliError::EmptyInput);
    }

    let evaluations = problem.evaluate_batch(&population)?;

    let header: Vec<String> = PenaltyKind::ALL
        .iter()
        .map(|k| format!("p{}", k.number()))
        .collect();
    println!("{}\ttotal", header.join("\t").bold());

    for evaluation in evaluations {
        let counts: Vec<String> = evaluation
            .penalties
            .as_array()
            .iter()
            .map(|c| c.to_string())
            .collect();
        let total = if evaluation.total == 0 {
            evaluation.total.to_string().bright_green().to_string()
        } else {
            evaluation.total.to_string().bright_red().to_string()
        };
        println!("{}\t{}", counts.join("\t"), total);
    }
    Ok(())
}

pub fn explain(problem: &RosterProblem, file: Option<&Path>) -> Result<(), CliError> {
    let population = parse_schedules(&read_input(file)?)?;
    let cells = population.first().ok_or(CliError::EmptyInput)?;

    print!("{}", problem.explain(cells)?);
    Ok(())
}

pub fn check(problem: &RosterProblem) -> Result<(), CliError> {
    let catalog = problem.catalog();
    problem.seed_generator().validate()?;

    let horizon = catalog.horizon();
    println!(
        "{} {} days from {} ({} to {})",
        "Horizon:".bold(),
        catalog.n_days(),
        horizon.start(),
        catalog.days()[0].weekday_label(),
        horizon.final_day().weekday_label()
    );

    println!("{}", "Shifts:".bold());
    for shift in catalog.shifts() {
        let kind = if shift.is_rest() { "rest" } else { "work" };
        println!(
            "  {} {:<3} {:<8} {} headcount {}..={}",
            shift.index(),
            shift.id(),
            shift.label(),
            kind,
            shift.min_headcount(),
            shift.max_headcount()
        );
    }
    for transition in catalog.shift_catalog().forbidden_transitions() {
        println!(
            "  forbidden {} -> {}",
            catalog.shifts()[transition.previous].id(),
            catalog.shifts()[transition.current].id()
        );
    }

    println!("{}", "Employees:".bold());
    for employee in catalog.employees() {
        let allowed: Vec<&str> = catalog
            .allowed_shifts(employee)
            .into_iter()
            .map(|s| catalog.shifts()[s].id())
            .collect();
        println!(
            "  {} {:<3} {}-on/{}-off from {}, allowed [{}], {} holiday(s)",
            employee.index(),
            employee.id(),
            employee.work_cycle().n_work_days(),
            employee.work_cycle().n_rest_days(),
            employee.work_cycle().cycle_start(),
            allowed.join(","),
            employee.holidays().len()
        );
    }

    println!("{}", "Weights:".bold());
    for (kind, weight) in problem.weights().iter().filter(|(_, w)| *w != 0) {
        println!("  p{} {} = {}", kind.number(), kind.name(), weight);
    }

    println!("{}", "ok".bright_green().bold());
    Ok(())
}
