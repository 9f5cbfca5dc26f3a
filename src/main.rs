use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::{Command, ProblemArgs};
use crate::problem::Problem;
use crate::solver::Solver;

mod cli;
mod demo;
mod problem;
mod repl;
mod report;
mod solver;
mod telemetry;

fn main() -> Result<()> {
    let cli = cli::parse();
    telemetry::init();

    match cli.command {
        Command::Solve { problem, budget } => {
            let problem = read_problem(problem)?;
            let solver = match budget {
                Some(steps) => Solver::new().with_budget(steps),
                None => Solver::new(),
            };
            run(&problem, &solver)?;
        }
        Command::Demo => {
            let problem = Problem {
                values: demo::VALUES.to_vec(),
                target: demo::TARGET,
                k: demo::COUNT as i64,
            };
            run(&problem, &Solver::new())?;
        }
        Command::Repl => {
            repl::start(Vec::new())?;
        }
    }

    Ok(())
}

fn read_problem(args: ProblemArgs) -> Result<Problem> {
    if let Some(path) = args.input {
        return problem::load(&path).with_context(|| format!("load problem {}", path.display()));
    }

    // clap guarantees both are present without --input
    Ok(Problem {
        values: args.values,
        target: args.target.unwrap_or_default(),
        k: args.k.unwrap_or_default(),
    })
}

fn run(problem: &Problem, solver: &Solver) -> Result<()> {
    info!(
        len = problem.values.len(),
        target = problem.target,
        k = problem.k,
        "solving"
    );

    let started = Instant::now();
    let result = problem.solve(solver);
    let elapsed = started.elapsed();
    debug_assert!(result.as_ref().is_none_or(|indices| solver::verify(
        &problem.values,
        problem.target,
        problem.count(),
        indices
    )));

    report::write_result(
        &mut std::io::stdout(),
        &problem.values,
        problem.target,
        result.as_deref(),
        elapsed,
    )
}
