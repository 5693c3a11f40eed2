//! Day 10: Syntax Scoring

use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["2021", "stack"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    Complete,
    /// First closer that does not match the innermost opener
    Corrupted(char),
    /// Closers that would complete the line, innermost first
    Incomplete(Vec<char>),
}

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}' | '>')
}

pub fn analyze(line: &str) -> anyhow::Result<LineStatus> {
    let mut expected = Vec::new();
    for c in line.chars() {
        if let Some(closer) = closer_for(c) {
            expected.push(closer);
        } else if is_closer(c) {
            match expected.pop() {
                Some(closer) if closer == c => {}
                Some(_) => return Ok(LineStatus::Corrupted(c)),
                None => return Err(anyhow!("'{}' closes nothing", c)),
            }
        } else {
            return Err(anyhow!("unknown character '{}'", c));
        }
    }

    if expected.is_empty() {
        Ok(LineStatus::Complete)
    } else {
        expected.reverse();
        Ok(LineStatus::Incomplete(expected))
    }
}

fn corruption_score(c: char) -> u64 {
    match c {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        '>' => 25137,
        _ => 0,
    }
}

/// Completion score, or `None` once it no longer fits in a `u64`
fn completion_score(closers: &[char]) -> Option<u64> {
    closers.iter().try_fold(0u64, |score, c| {
        let points = match c {
            ')' => 1,
            ']' => 2,
            '}' => 3,
            '>' => 4,
            _ => 0,
        };
        score.checked_mul(5)?.checked_add(points)
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<LineStatus>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| analyze(line.trim()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(statuses: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = statuses
            .iter()
            .filter_map(|status| match status {
                LineStatus::Corrupted(c) => Some(corruption_score(*c)),
                _ => None,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(statuses: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores = statuses
            .iter()
            .filter_map(|status| match status {
                LineStatus::Incomplete(closers) => Some(closers),
                _ => None,
            })
            .map(|closers| {
                completion_score(closers).ok_or_else(|| {
                    SolveError::SolveFailed(
                        format!("completion score of {} closers overflows", closers.len())
                            .into(),
                    )
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;
        if scores.is_empty() {
            return Err(SolveError::SolveFailed("no incomplete lines".into()));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}
