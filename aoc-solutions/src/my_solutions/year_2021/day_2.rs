//! Day 2: Dive!

use crate::utils::parse_lines;
use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["2021", "easy"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(anyhow!("unknown direction '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    pub distance: i64,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, distance) = s
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<direction> <distance>'"))?;
        let distance: i64 = distance
            .trim()
            .parse()
            .with_context(|| format!("invalid distance '{}'", distance))?;
        anyhow::ensure!(distance >= 0, "distance must be non negative");
        Ok(Command {
            direction: direction.parse()?,
            distance,
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Submarine {
    pub x: i64,
    pub depth: i64,
    pub aim: i64,
}

impl Submarine {
    /// Vertical commands move the submarine directly
    pub fn drive(&mut self, command: Command) {
        match command.direction {
            Direction::Forward => self.x += command.distance,
            Direction::Down => self.depth += command.distance,
            Direction::Up => self.depth -= command.distance,
        }
    }

    /// Vertical commands tilt the submarine; forward moves along the aim
    pub fn drive_with_aim(&mut self, command: Command) {
        match command.direction {
            Direction::Forward => {
                self.x += command.distance;
                self.depth += self.aim * command.distance;
            }
            Direction::Down => self.aim += command.distance,
            Direction::Up => self.aim -= command.distance,
        }
    }

    pub fn position_product(&self) -> i64 {
        self.x * self.depth
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| line.parse())
    }
}

impl PartSolver<1> for Solver {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut submarine = Submarine::default();
        commands.iter().for_each(|&command| submarine.drive(command));
        Ok(submarine.position_product().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(commands: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut submarine = Submarine::default();
        commands
            .iter()
            .for_each(|&command| submarine.drive_with_aim(command));
        Ok(submarine.position_product().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn test_example() {
        let mut commands = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut commands, 1).unwrap(), "150");
        assert_eq!(Solver::solve_part(&mut commands, 2).unwrap(), "900");
    }

    #[test]
    fn test_direction_is_case_insensitive() {
        let command: Command = "FORWARD 3".parse().unwrap();
        assert_eq!(command.direction, Direction::Forward);
        assert_eq!(command.distance, 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("sideways 2").is_err());
        assert!(Solver::parse("up").is_err());
        assert!(Solver::parse("down x").is_err());
    }
}
