//! Day 7: The Treachery of Whales

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["2021", "math"])]
pub struct Solver;

/// Crab positions, kept sorted
#[derive(Debug, Clone)]
pub struct Fleet {
    positions: Vec<i64>,
}

impl Fleet {
    pub fn new(mut positions: Vec<i64>) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }
        positions.sort_unstable();
        Some(Fleet { positions })
    }

    fn fuel_to(&self, target: i64, cost: impl Fn(i64) -> i64) -> i64 {
        self.positions.iter().map(|&p| cost((p - target).abs())).sum()
    }

    /// Each step costs one unit, so the median is optimal
    pub fn min_linear_fuel(&self) -> i64 {
        let median = self.positions[self.positions.len() / 2];
        self.fuel_to(median, |distance| distance)
    }

    /// The n-th step costs n units; the optimum lies within half a step of the mean
    pub fn min_triangular_fuel(&self) -> i64 {
        let sum: i64 = self.positions.iter().sum();
        let mean_floor = sum.div_euclid(self.positions.len() as i64);
        [mean_floor, mean_floor + 1]
            .into_iter()
            .map(|target| self.fuel_to(target, |d| d * (d + 1) / 2))
            .fold(i64::MAX, i64::min)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Fleet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let positions = input
            .trim()
            .split(',')
            .map(|value| {
                value.trim().parse::<i64>().map_err(|e| {
                    ParseError::InvalidFormat(format!("position '{}': {}", value, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Fleet::new(positions).ok_or_else(|| ParseError::MissingData("crab positions".to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(fleet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fleet.min_linear_fuel().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(fleet: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fleet.min_triangular_fuel().to_string())
    }
}
