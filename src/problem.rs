use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::solver::Solver;

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("open file {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed problem")]
    Malformed(#[from] serde_json::Error),
}

/// A K-Sum instance: pick `k` distinct indices of `values` summing to `target`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Problem {
    pub values: Vec<i64>,
    pub target: i64,
    pub k: i64,
}

impl Problem {
    /// Count usable by the solver. Non-positive counts become 0, which has no
    /// solution.
    pub fn count(&self) -> usize {
        usize::try_from(self.k).unwrap_or(0)
    }

    pub fn solve(&self, solver: &Solver) -> Option<Vec<usize>> {
        solver.solve(&self.values, self.target, self.count())
    }
}

pub fn load(path: &Path) -> Result<Problem, ProblemError> {
    let s = std::fs::read_to_string(path).map_err(|source| ProblemError::Open {
        path: path.display().to_string(),
        source,
    })?;

    parse(&s)
}

pub fn parse(s: &str) -> Result<Problem, ProblemError> {
    Ok(serde_json::from_str(s)?)
}
