//! Day 8: Seven Segment Search

use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["2021", "deduction"])]
pub struct Solver;

/// Lit segments `a` through `g` as bits 0 through 6
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern(u8);

impl Pattern {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        anyhow::ensure!(!s.is_empty(), "empty segment pattern");
        s.bytes().try_fold(Pattern(0), |Pattern(bits), b| match b {
            b'a'..=b'g' => Ok(Pattern(bits | (1 << (b - b'a')))),
            _ => Err(anyhow!("invalid segment '{}'", b as char)),
        })
    }

    pub fn segment_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn contains(self, other: Pattern) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Digits 1, 7, 4 and 8 are the only ones with 2, 3, 4 and 7 segments
    pub fn has_unique_length(self) -> bool {
        matches!(self.segment_count(), 2 | 3 | 4 | 7)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no pattern with {0} segments for digit {1}")]
    MissingDigit(u32, u8),
    #[error("digit {0} could not be deduced")]
    Undeduced(u8),
    #[error("pattern {0:#09b} matches no digit")]
    UnknownPattern(u8),
    #[error("pattern {0:#09b} is ambiguous")]
    Ambiguous(u8),
}

#[derive(Debug, Clone)]
pub struct Entry {
    signals: [Pattern; 10],
    outputs: [Pattern; 4],
}

impl Entry {
    /// Work out which pattern shows which digit
    pub fn wiring(&self) -> Result<[Pattern; 10], DecodeError> {
        let unique = |len: u32, digit: u8| {
            self.signals
                .iter()
                .copied()
                .find(|p| p.segment_count() == len)
                .ok_or(DecodeError::MissingDigit(len, digit))
        };
        let one = unique(2, 1)?;
        let four = unique(4, 4)?;
        let seven = unique(3, 7)?;
        let eight = unique(7, 8)?;

        let mut digits: [Option<Pattern>; 10] = [None; 10];
        digits[1] = Some(one);
        digits[4] = Some(four);
        digits[7] = Some(seven);
        digits[8] = Some(eight);

        for &pattern in &self.signals {
            let digit = match pattern.segment_count() {
                5 if pattern.contains(one) => 3,
                5 if (pattern.0 & four.0).count_ones() == 3 => 5,
                5 => 2,
                6 if pattern.contains(four) => 9,
                6 if pattern.contains(one) => 0,
                6 => 6,
                _ => continue,
            };
            if digits[digit].is_some_and(|known| known != pattern) {
                return Err(DecodeError::Ambiguous(pattern.0));
            }
            digits[digit] = Some(pattern);
        }

        let mut wiring = [Pattern(0); 10];
        for (digit, pattern) in digits.into_iter().enumerate() {
            wiring[digit] = pattern.ok_or(DecodeError::Undeduced(digit as u8))?;
        }
        Ok(wiring)
    }

    pub fn decode_output(&self) -> Result<u32, DecodeError> {
        let wiring = self.wiring()?;
        self.outputs.iter().try_fold(0, |value, output| {
            let digit = wiring
                .iter()
                .position(|&pattern| pattern == *output)
                .ok_or(DecodeError::UnknownPattern(output.0))?;
            Ok(value * 10 + digit as u32)
        })
    }
}

fn parse_patterns<const N: usize>(s: &str) -> anyhow::Result<[Pattern; N]> {
    let patterns = s
        .split_whitespace()
        .map(Pattern::parse)
        .collect::<anyhow::Result<Vec<_>>>()?;
    <[Pattern; N]>::try_from(patterns)
        .map_err(|found| anyhow!("expected {} patterns, found {}", N, found.len()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            let (signals, outputs) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("missing '|' separator"))?;
            Ok(Entry {
                signals: parse_patterns(signals)?,
                outputs: parse_patterns(outputs)?,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(entries: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = entries
            .iter()
            .flat_map(|entry| entry.outputs)
            .filter(|output| output.has_unique_length())
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(entries: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        entries
            .iter()
            .enumerate()
            .try_fold(0u64, |sum, (idx, entry)| {
                entry
                    .decode_output()
                    .map(|value| sum + u64::from(value))
                    .map_err(|e| {
                        SolveError::SolveFailed(format!("entry {}: {}", idx + 1, e).into())
                    })
            })
            .map(|sum| sum.to_string())
    }
}
