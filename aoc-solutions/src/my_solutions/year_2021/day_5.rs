//! Day 5: Hydrothermal Venture

use crate::utils::parse_lines;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["2021", "grid"])]
pub struct Solver;

/// Largest accepted coordinate, which keeps the dense map at most 4096x4096
pub const MAX_COORDINATE: usize = 4095;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// A vent line that is horizontal, vertical or at exactly 45 degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    start: Point,
    end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> anyhow::Result<Self> {
        anyhow::ensure!(
            [start.x, start.y, end.x, end.y]
                .iter()
                .all(|&coord| coord <= MAX_COORDINATE),
            "coordinate above {} in {},{} -> {},{}",
            MAX_COORDINATE,
            start.x,
            start.y,
            end.x,
            end.y
        );
        let line = Line { start, end };
        anyhow::ensure!(
            line.is_axis_aligned() || start.x.abs_diff(end.x) == start.y.abs_diff(end.y),
            "line {},{} -> {},{} is neither straight nor diagonal",
            start.x,
            start.y,
            end.x,
            end.y
        );
        Ok(line)
    }

    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Line { start, end } = *self;
        let len = start.x.abs_diff(end.x).max(start.y.abs_diff(end.y));
        let step = |from: usize, to: usize, i: usize| match from.cmp(&to) {
            std::cmp::Ordering::Less => from + i,
            std::cmp::Ordering::Equal => from,
            std::cmp::Ordering::Greater => from - i,
        };
        (0..=len).map(move |i| Point {
            x: step(start.x, end.x, i),
            y: step(start.y, end.y, i),
        })
    }
}

/// Dense overlap counter covering every drawn point
#[derive(Debug)]
pub struct VentMap {
    coverage: Vec<u16>,
}

impl VentMap {
    pub fn draw<'a>(lines: impl IntoIterator<Item = &'a Line> + Clone) -> Self {
        let (width, height) = lines.clone().into_iter().fold((0, 0), |(w, h), line| {
            (
                w.max(line.start.x.max(line.end.x) + 1),
                h.max(line.start.y.max(line.end.y) + 1),
            )
        });

        let mut coverage = vec![0u16; width * height];
        for point in lines.into_iter().flat_map(Line::points) {
            let cell = &mut coverage[point.y * width + point.x];
            *cell = cell.saturating_add(1);
        }
        VentMap { coverage }
    }

    pub fn overlaps(&self) -> usize {
        self.coverage.iter().filter(|&&count| count >= 2).count()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Line>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pattern = Regex::new(r"^(\d+),(\d+)\s*->\s*(\d+),(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        parse_lines(input, |line| {
            let caps = pattern
                .captures(line.trim())
                .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2'"))?;
            let coord = |idx: usize| caps[idx].parse::<usize>();
            Line::new(
                Point {
                    x: coord(1)?,
                    y: coord(2)?,
                },
                Point {
                    x: coord(3)?,
                    y: coord(4)?,
                },
            )
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let straight: Vec<Line> = lines
            .iter()
            .filter(|line| line.is_axis_aligned())
            .copied()
            .collect();
        Ok(VentMap::draw(&straight).overlaps().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(VentMap::draw(lines.iter()).overlaps().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn test_example() {
        let mut lines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut lines, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut lines, 2).unwrap(), "12");
    }

    #[test]
    fn test_diagonal_points() {
        let line = Line::new(Point { x: 3, y: 1 }, Point { x: 1, y: 3 }).unwrap();
        let points: Vec<_> = line.points().map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(3, 1), (2, 2), (1, 3)]);
    }

    #[test]
    fn test_single_point_line() {
        let line = Line::new(Point { x: 4, y: 4 }, Point { x: 4, y: 4 }).unwrap();
        assert_eq!(line.points().count(), 1);
        assert_eq!(VentMap::draw(&[line]).overlaps(), 0);
    }

    #[test]
    fn test_parse_rejects_skewed_and_malformed_lines() {
        assert!(Solver::parse("0,0 -> 2,1").is_err());
        assert!(Solver::parse("0,0 => 2,2").is_err());
        assert!(Solver::parse("0,0 -> 2").is_err());
    }

    #[test]
    fn test_coordinate_bound() {
        let edge = Point {
            x: MAX_COORDINATE,
            y: 0,
        };
        let line = Line::new(edge, edge).unwrap();
        assert_eq!(VentMap::draw([&line, &line]).overlaps(), 1);

        let outside = Point {
            x: MAX_COORDINATE + 1,
            y: 0,
        };
        assert!(Line::new(edge, outside).is_err());
        assert!(matches!(
            Solver::parse("0,0 -> 1,1\n18446744073709551615,0 -> 18446744073709551615,0\n"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
    }
}
