//! Day 1: Sonar Sweep

use crate::utils::parse_lines;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["2021", "easy"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sliding window size must be at least 1")]
pub struct EmptyWindow;

/// Count how often the sum of a sliding window grows from one position to the next
///
/// Comparing window sums reduces to comparing the values that enter and
/// leave the window, so no sums are built.
pub fn count_window_increases(depths: &[u32], window: usize) -> Result<usize, EmptyWindow> {
    if window == 0 {
        return Err(EmptyWindow);
    }
    Ok(depths
        .iter()
        .zip(depths.iter().skip(window))
        .filter(|(leaving, entering)| entering > leaving)
        .count())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| Ok(line.trim().parse::<u32>()?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_window_increases(depths, 1)
            .map(|count| count.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        count_window_increases(depths, 3)
            .map(|count| count.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_example() {
        let mut depths = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut depths, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut depths, 2).unwrap(), "5");
    }

    #[test]
    fn test_window_edge_cases() {
        assert_eq!(count_window_increases(&[1, 2, 3], 0), Err(EmptyWindow));
        assert_eq!(count_window_increases(&[1, 2, 3], 3), Ok(0));
        assert_eq!(count_window_increases(&[1, 2, 3], 7), Ok(0));
        assert_eq!(count_window_increases(&[], 1), Ok(0));
    }

    #[test]
    fn test_parse_rejects_negative_depth() {
        assert!(matches!(
            Solver::parse("10\n-4\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
    }
}
