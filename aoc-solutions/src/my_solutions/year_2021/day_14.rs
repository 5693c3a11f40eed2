//! Day 14: Extended Polymerization

use crate::utils::parse_lines_with_offset;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 14, tags = ["2021", "counting"])]
pub struct Solver;

/// Polymer tracked as counts of adjacent element pairs
#[derive(Debug, Clone)]
pub struct Polymer {
    pairs: HashMap<(u8, u8), u64>,
    last: u8,
    rules: HashMap<(u8, u8), u8>,
}

impl Polymer {
    pub fn new(template: &[u8], rules: HashMap<(u8, u8), u8>) -> Option<Self> {
        let &last = template.last()?;
        let mut pairs = HashMap::new();
        for (&a, &b) in template.iter().tuple_windows() {
            *pairs.entry((a, b)).or_insert(0) += 1;
        }
        Some(Polymer { pairs, last, rules })
    }

    pub fn step(&mut self) {
        let mut next = HashMap::with_capacity(self.pairs.len() * 2);
        for (&(a, b), &count) in &self.pairs {
            match self.rules.get(&(a, b)) {
                Some(&inserted) => {
                    *next.entry((a, inserted)).or_insert(0) += count;
                    *next.entry((inserted, b)).or_insert(0) += count;
                }
                None => *next.entry((a, b)).or_insert(0) += count,
            }
        }
        self.pairs = next;
    }

    /// Every element is the first of exactly one pair, except the final one
    pub fn element_counts(&self) -> HashMap<u8, u64> {
        let mut counts = HashMap::from([(self.last, 1)]);
        for (&(a, _), &count) in &self.pairs {
            *counts.entry(a).or_insert(0) += count;
        }
        counts
    }

    pub fn spread(&self) -> u64 {
        match self.element_counts().into_values().minmax() {
            MinMaxResult::MinMax(min, max) => max - min,
            MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0,
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.trim().replace("\r\n", "\n");
        let (template, rules_block) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("insertion rules".to_string()))?;
        let template = template.trim();
        if !template.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "(line 1) invalid template '{}'",
                template
            )));
        }

        let pattern = Regex::new(r"^([A-Z])([A-Z])\s*->\s*([A-Z])$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        let rules = parse_lines_with_offset(rules_block, 2, |line| {
            let caps = pattern
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected 'AB -> C'"))?;
            let element = |idx: usize| caps[idx].as_bytes()[0];
            Ok(((element(1), element(2)), element(3)))
        })?;

        Polymer::new(template.as_bytes(), rules.into_iter().collect())
            .ok_or_else(|| ParseError::MissingData("polymer template".to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut polymer = polymer.clone();
        (0..10).for_each(|_| polymer.step());
        Ok(polymer.spread().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(polymer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut polymer = polymer.clone();
        (0..40).for_each(|_| polymer.step());
        Ok(polymer.spread().to_string())
    }
}
