//! Day 9: Smoke Basin

use crate::utils::{parse_digit_row, parse_lines};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

const BASIN_WALL: u32 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["2021", "grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Heightmap {
    width: usize,
    height: usize,
    heights: Vec<u32>,
}

impl Heightmap {
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self, ParseError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::MissingData("heightmap".to_string()));
        }
        if let Some(idx) = rows.iter().position(|row| row.len() != width) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) expected {} heights, found {}",
                idx + 1,
                width,
                rows[idx].len()
            )));
        }
        Ok(Heightmap {
            width,
            height: rows.len(),
            heights: rows.into_iter().flatten().collect(),
        })
    }

    fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> {
        let (width, height) = (self.width, self.height);
        let (row, col) = (index / width, index % width);
        [
            (row > 0).then(|| index - width),
            (row + 1 < height).then(|| index + width),
            (col > 0).then(|| index - 1),
            (col + 1 < width).then(|| index + 1),
        ]
        .into_iter()
        .flatten()
    }

    pub fn low_points(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.heights.len()).filter(move |&index| {
            self.neighbors(index)
                .all(|neighbor| self.heights[neighbor] > self.heights[index])
        })
    }

    pub fn risk_level(&self) -> u32 {
        self.low_points().map(|index| self.heights[index] + 1).sum()
    }

    /// Sizes of all regions bounded by height 9, in no particular order
    pub fn basin_sizes(&self) -> Vec<usize> {
        let mut visited: Vec<bool> = self.heights.iter().map(|&h| h == BASIN_WALL).collect();
        let mut stack = Vec::new();
        let mut sizes = Vec::new();

        for start in 0..self.heights.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push(start);
            let mut size = 0;
            while let Some(index) = stack.pop() {
                size += 1;
                for neighbor in self.neighbors(index) {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        stack.push(neighbor);
                    }
                }
            }
            sizes.push(size);
        }
        sizes
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Heightmap::new(parse_lines(input, parse_digit_row)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(heightmap: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(heightmap.risk_level().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(heightmap: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sizes = heightmap.basin_sizes();
        if sizes.len() < 3 {
            return Err(SolveError::SolveFailed(
                format!("found {} basins, need at least 3", sizes.len()).into(),
            ));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn test_example() {
        let mut heightmap = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(heightmap.low_points().count(), 4);
        assert_eq!(Solver::solve_part(&mut heightmap, 1).unwrap(), "15");
        assert_eq!(Solver::solve_part(&mut heightmap, 2).unwrap(), "1134");
    }

    #[test]
    fn test_basin_sizes() {
        let heightmap = Solver::parse(EXAMPLE).unwrap();
        let mut sizes = heightmap.basin_sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 9, 9, 14]);
    }

    #[test]
    fn test_plateau_has_no_low_point() {
        let heightmap = Solver::parse("555\n555\n").unwrap();
        assert_eq!(heightmap.low_points().count(), 0);
    }

    #[test]
    fn test_too_few_basins() {
        let mut heightmap = Solver::parse("1912\n9999\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut heightmap, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("123\n12\n").is_err());
        assert!(Solver::parse("").is_err());
    }
}
