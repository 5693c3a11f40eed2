//! Day 11: Dumbo Octopus

mod simulator;

#[cfg(test)]
mod tests;

pub use simulator::{FlashSimulator, SimulatorError, FLASH_THRESHOLD};

use crate::utils::{parse_digit_row, parse_lines};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const FLASH_COUNT_STEPS: u64 = 100;

/// Give up on synchronization after this many steps
const SYNC_STEP_LIMIT: u64 = 1_000_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["2021", "grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = FlashSimulator;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = parse_lines(input, parse_digit_row)?;
        FlashSimulator::new(&rows).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(simulator: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        simulator.reset();
        simulator.simulate_n_steps(FLASH_COUNT_STEPS);
        Ok(simulator.flash_count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(simulator: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        simulator.reset();
        simulator
            .simulate_until_all_flash_within(SYNC_STEP_LIMIT)
            .map(|steps| steps.to_string())
            .ok_or_else(|| {
                SolveError::SolveFailed(
                    format!("grid did not synchronize within {SYNC_STEP_LIMIT} steps").into(),
                )
            })
    }
}
