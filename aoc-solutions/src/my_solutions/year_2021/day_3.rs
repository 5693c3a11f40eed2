//! Day 3: Binary Diagnostic

use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["2021", "bits"])]
pub struct Solver;

/// Equal-width binary entries, most significant bit first
#[derive(Debug, Clone)]
pub struct Report {
    width: usize,
    entries: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitCriteria {
    MostCommon,
    LeastCommon,
}

impl Report {
    pub fn new(lines: &[&str]) -> anyhow::Result<Self> {
        let width = lines
            .first()
            .map(|line| line.len())
            .ok_or_else(|| anyhow!("diagnostic report is empty"))?;
        anyhow::ensure!(
            (1..=32).contains(&width),
            "entries must be 1 to 32 bits wide"
        );

        let entries = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                anyhow::ensure!(
                    line.len() == width,
                    "(line {}) expected {} bits, found {}",
                    idx + 1,
                    width,
                    line.len()
                );
                u32::from_str_radix(line, 2)
                    .map_err(|_| anyhow!("(line {}) '{}' is not a binary number", idx + 1, line))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Report { width, entries })
    }

    fn ones_at(entries: &[u32], bit: usize) -> usize {
        entries.iter().filter(|&&entry| (entry >> bit) & 1 == 1).count()
    }

    pub fn gamma_rate(&self) -> u32 {
        (0..self.width)
            .filter(|&bit| 2 * Self::ones_at(&self.entries, bit) > self.entries.len())
            .fold(0, |gamma, bit| gamma | (1 << bit))
    }

    pub fn epsilon_rate(&self) -> u32 {
        let mask = u32::MAX >> (32 - self.width);
        !self.gamma_rate() & mask
    }

    pub fn oxygen_rating(&self) -> u32 {
        self.rating(BitCriteria::MostCommon)
    }

    pub fn co2_rating(&self) -> u32 {
        self.rating(BitCriteria::LeastCommon)
    }

    fn rating(&self, criteria: BitCriteria) -> u32 {
        let mut candidates = self.entries.clone();
        for bit in (0..self.width).rev() {
            if candidates.len() <= 1 {
                break;
            }
            let ones = Self::ones_at(&candidates, bit);
            let zeros = candidates.len() - ones;
            if ones == 0 || zeros == 0 {
                continue;
            }
            let keep = match criteria {
                BitCriteria::MostCommon => u32::from(ones >= zeros),
                BitCriteria::LeastCommon => u32::from(ones < zeros),
            };
            candidates.retain(|&entry| (entry >> bit) & 1 == keep);
        }
        candidates[0]
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines = parse_lines(input, |line| Ok(line.trim()))?;
        Report::new(&lines).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let power = u64::from(report.gamma_rate()) * u64::from(report.epsilon_rate());
        Ok(power.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(report: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let life_support = u64::from(report.oxygen_rating()) * u64::from(report.co2_rating());
        Ok(life_support.to_string())
    }
}
