use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Solve a K-Sum problem
    Solve {
        #[command(flatten)]
        problem: ProblemArgs,
        /// Give up after examining this many candidate extensions
        #[arg(short, long)]
        budget: Option<u64>,
    },
    /// Run the bundled 100-value sample
    Demo,
    /// Start an interactive session
    Repl,
}

#[derive(Args)]
pub struct ProblemArgs {
    /// Read values, target and k from a JSON file
    #[arg(short, long, conflicts_with_all = ["target", "k", "values"])]
    pub input: Option<PathBuf>,
    /// Sum the selected values must reach
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "input")]
    pub target: Option<i64>,
    /// Number of indices to select
    #[arg(short, long, allow_negative_numbers = true, required_unless_present = "input")]
    pub k: Option<i64>,
    /// Input values
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
