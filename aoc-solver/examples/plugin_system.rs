//! Plugin registration and tag filtering
//!
//! Run with: cargo run --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverPlugin, SolverRegistryBuilder,
};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("Expected integer: {}", line)))
        })
        .collect()
}

/// Registered through the derive macro
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2030, day = 1, tags = ["demo", "easy"])]
pub struct Totals;

impl AocParser for Totals {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for Totals {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(numbers.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(numbers.iter().product::<i64>().to_string())
    }
}

/// Registered by hand with `inventory::submit!`
pub struct Extremes;

impl AocParser for Extremes {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl Solver for Extremes {
    const PARTS: u8 = 1;

    fn solve_part(numbers: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => numbers
                .iter()
                .max()
                .map(|max| max.to_string())
                .ok_or_else(|| SolveError::SolveFailed("no numbers".into())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

aoc_solver::inventory::submit! {
    SolverPlugin {
        year: 2030,
        day: 2,
        solver: &Extremes,
        tags: &["demo", "hard"],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "3\n4\n5";

    let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
    println!("Registered {} solver(s)", registry.len());

    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        for part in 1..=info.parts {
            let result = solver.solve(part)?;
            println!("{}/{:02} part {}: {}", info.year, info.day, part, result.answer);
        }
    }

    let easy = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
        .build();
    println!("Solvers tagged 'easy': {}", easy.len());

    Ok(())
}
