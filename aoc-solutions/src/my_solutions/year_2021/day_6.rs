//! Day 6: Lanternfish

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const NEW_FISH_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["2021", "simulation"])]
pub struct Solver;

/// Fish counted per timer value rather than individually
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    timers: [u64; NEW_FISH_TIMER + 1],
}

impl School {
    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.timers.rotate_left(1);
            self.timers[RESET_TIMER] += self.timers[NEW_FISH_TIMER];
        }
    }

    pub fn population(&self) -> u64 {
        self.timers.iter().sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut timers = [0u64; NEW_FISH_TIMER + 1];
        for value in input.trim().split(',') {
            let timer: usize = value
                .trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("timer '{}': {}", value, e)))?;
            let bucket = timers.get_mut(timer).ok_or_else(|| {
                ParseError::InvalidFormat(format!("timer {} exceeds {}", timer, NEW_FISH_TIMER))
            })?;
            *bucket += 1;
        }
        Ok(School { timers })
    }
}

impl PartSolver<1> for Solver {
    fn solve(school: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut school = school.clone();
        school.advance(80);
        Ok(school.population().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(school: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut school = school.clone();
        school.advance(256);
        Ok(school.population().to_string())
    }
}
