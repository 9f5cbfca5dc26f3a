use std::{
    io::{BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{problem, report, solver::Solver};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replace the loaded values
    Values {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Load values from a JSON problem file
    Load {
        /// Problem file
        path: PathBuf,
    },
    /// Display the loaded values
    Show,
    /// Find k values summing to target
    Solve {
        #[arg(allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        k: i64,
        /// Give up after examining this many candidate extensions
        #[arg(short, long)]
        budget: Option<u64>,
    },
    Exit,
    Quit,
}

pub fn start(values: Vec<i64>) -> Result<()> {
    let mut repl = Repl {
        values,
        out: std::io::stdout(),
    };
    let mut input = std::io::stdin().lock();
    loop {
        let Some(line) = repl.readline(&mut input)? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match repl.respond(line) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                if err.downcast_ref::<clap::Error>().is_some() {
                    writeln!(repl.out, "  {err:?}")?;
                } else {
                    writeln!(repl.out, "  error: {err:?}")?;
                }
                repl.out.flush()?;
            }
        }
    }

    Ok(())
}

struct Repl<W> {
    values: Vec<i64>,
    out: W,
}

impl<W: Write> Repl<W> {
    fn respond(&mut self, line: &str) -> Result<bool> {
        let args = line.split_whitespace();
        let cli = Cli::try_parse_from(args)?;

        match cli.command {
            Command::Values { values } => {
                self.values = values;
                writeln!(self.out, "  Loaded {} values", self.values.len())?;
            }
            Command::Load { path } => {
                let p = problem::load(&path)
                    .with_context(|| format!("load problem {}", path.display()))?;
                info!(path = %path.display(), len = p.values.len(), "problem loaded");
                self.values = p.values;
                writeln!(
                    self.out,
                    "  Loaded {} values (file target: {}, k: {})",
                    self.values.len(),
                    p.target,
                    p.k
                )?;
            }
            Command::Show => {
                writeln!(self.out, "  Values: {:?}", self.values)?;
            }
            Command::Solve { target, k, budget } => {
                let solver = match budget {
                    Some(steps) => Solver::new().with_budget(steps),
                    None => Solver::new(),
                };
                let k = usize::try_from(k).unwrap_or(0);

                let started = Instant::now();
                let result = solver.solve(&self.values, target, k);
                report::write_result(
                    &mut self.out,
                    &self.values,
                    target,
                    result.as_deref(),
                    started.elapsed(),
                )?;
            }
            Command::Exit | Command::Quit => {
                return Ok(true);
            }
        }
        self.out.flush()?;

        Ok(false)
    }

    fn readline(&mut self, input: &mut impl BufRead) -> Result<Option<String>> {
        write!(self.out, "ksum> ")?;
        self.out.flush()?;
        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}
