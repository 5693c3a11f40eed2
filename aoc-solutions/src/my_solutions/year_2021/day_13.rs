//! Day 13: Transparent Origami

use crate::utils::parse_lines_with_offset;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["2021", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Fold the right half onto the left along `x = n`
    Left(u32),
    /// Fold the bottom half onto the top along `y = n`
    Up(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoldError {
    #[error("dot at ({0}, {1}) lands beyond the paper edge")]
    OffPaper(u32, u32),
    #[error("no fold instructions")]
    NoFolds,
}

/// Set of dots as `(x, y)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paper {
    dots: BTreeSet<(u32, u32)>,
}

fn mirror(value: u32, line: u32) -> Option<u32> {
    if value <= line {
        Some(value)
    } else {
        line.checked_mul(2)?.checked_sub(value)
    }
}

impl Paper {
    /// Dots on the fold line stay where they are
    pub fn fold(&self, fold: Fold) -> Result<Paper, FoldError> {
        let dots = self
            .dots
            .iter()
            .map(|&(x, y)| {
                let folded = match fold {
                    Fold::Left(line) => mirror(x, line).map(|x| (x, y)),
                    Fold::Up(line) => mirror(y, line).map(|y| (x, y)),
                };
                folded.ok_or(FoldError::OffPaper(x, y))
            })
            .collect::<Result<_, _>>()?;
        Ok(Paper { dots })
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Draw the dots as `#` on a `.` background, one line per row
    pub fn render(&self) -> String {
        let width = self.dots.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.dots.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| if self.dots.contains(&(x, y)) { '#' } else { '.' })
                    .collect::<String>()
            })
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct Manual {
    paper: Paper,
    folds: Vec<Fold>,
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.trim().replace("\r\n", "\n");
        let (dots_block, folds_block) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("fold instructions".to_string()))?;

        let dots = parse_lines_with_offset(dots_block, 0, |line| {
            let (x, y) = line
                .trim()
                .split_once(',')
                .ok_or_else(|| anyhow!("expected 'x,y'"))?;
            Ok((x.parse::<u32>()?, y.parse::<u32>()?))
        })?;

        let pattern = Regex::new(r"^fold along ([xy])=(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let offset = dots.len() + 1;
        let folds = parse_lines_with_offset(folds_block, offset, |line| {
            let caps = pattern
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected 'fold along x=N' or 'fold along y=N'"))?;
            let at: u32 = caps[2].parse()?;
            Ok(if &caps[1] == "x" {
                Fold::Left(at)
            } else {
                Fold::Up(at)
            })
        })?;

        Ok(Manual {
            paper: Paper {
                dots: dots.into_iter().collect(),
            },
            folds,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = *manual
            .folds
            .first()
            .ok_or_else(|| SolveError::SolveFailed(FoldError::NoFolds.into()))?;
        let folded = manual
            .paper
            .fold(first)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok(folded.dot_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(manual: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let folded = manual
            .folds
            .iter()
            .try_fold(manual.paper.clone(), |paper, &fold| paper.fold(fold))
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok(folded.render())
    }
}
