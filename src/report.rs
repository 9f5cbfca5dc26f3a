use std::{io::Write, time::Duration};

use anyhow::Result;

use crate::solver;

/// Prints the selected indices and their sum, or that nothing was found.
pub fn write_result(
    out: &mut impl Write,
    values: &[i64],
    target: i64,
    result: Option<&[usize]>,
    elapsed: Duration,
) -> Result<()> {
    match result {
        Some(indices) => {
            let list = indices
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "Indices: {list}")?;
            writeln!(
                out,
                "Computed Sum: {} (Target: {})",
                solver::selected_sum(values, indices),
                target
            )?;
        }
        None => writeln!(out, "No solution found (Target: {target})")?,
    }
    writeln!(out, "Execution Time: {:.3} ms", elapsed.as_secs_f64() * 1e3)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_found() {
        let mut out = Vec::new();
        write_result(&mut out, &[2, 7, 11, 15], 9, Some(&[0, 1]), Duration::ZERO).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Indices: 0, 1\nComputed Sum: 9 (Target: 9)\nExecution Time: 0.000 ms\n"
        );
    }

    #[test]
    fn test_write_not_found() {
        let mut out = Vec::new();
        write_result(&mut out, &[1, 2], 100, None, Duration::from_millis(2)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No solution found (Target: 100)\nExecution Time: 2.000 ms\n"
        );
    }
}
