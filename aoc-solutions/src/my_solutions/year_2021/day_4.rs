//! Day 4: Giant Squid

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use thiserror::Error;

pub const BOARD_SIZE: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["2021", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BingoError {
    #[error("board has already won")]
    AlreadyWon,
    #[error("no board wins with the drawn numbers")]
    NoWinner,
}

/// A 5x5 bingo board that tracks its marked numbers
#[derive(Debug, Clone)]
pub struct Board {
    values: [[u32; BOARD_SIZE]; BOARD_SIZE],
    marked: [[bool; BOARD_SIZE]; BOARD_SIZE],
    winning_number: Option<u32>,
}

impl Board {
    pub fn new(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board {
            values,
            marked: [[false; BOARD_SIZE]; BOARD_SIZE],
            winning_number: None,
        }
    }

    /// Mark every cell holding `value`, returning whether the board has now won
    pub fn mark(&mut self, value: u32) -> Result<bool, BingoError> {
        if self.has_won() {
            return Err(BingoError::AlreadyWon);
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.values[row][col] != value {
                    continue;
                }
                self.marked[row][col] = true;
                let row_done = self.marked[row].iter().all(|&m| m);
                let col_done = self.marked.iter().all(|r| r[col]);
                if row_done || col_done {
                    self.winning_number = Some(value);
                }
            }
        }

        Ok(self.has_won())
    }

    pub fn has_won(&self) -> bool {
        self.winning_number.is_some()
    }

    /// Sum of unmarked numbers times the winning number, or 0 before a win
    pub fn score(&self) -> u64 {
        let Some(winning_number) = self.winning_number else {
            return 0;
        };
        let unmarked: u64 = self
            .values
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .filter(|(_, marked)| !**marked)
            .map(|(&value, _)| u64::from(value))
            .sum();
        unmarked * u64::from(winning_number)
    }

    pub fn reset(&mut self) {
        self.marked = [[false; BOARD_SIZE]; BOARD_SIZE];
        self.winning_number = None;
    }
}

#[derive(Debug, Clone)]
pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl Bingo {
    /// Play a full game from fresh boards, returning scores in winning order
    pub fn winning_scores(&mut self) -> Result<Vec<u64>, BingoError> {
        self.boards.iter_mut().for_each(Board::reset);

        let mut scores = Vec::with_capacity(self.boards.len());
        for &draw in &self.draws {
            for board in self.boards.iter_mut().filter(|board| !board.has_won()) {
                if board.mark(draw)? {
                    scores.push(board.score());
                }
            }
            if scores.len() == self.boards.len() {
                break;
            }
        }
        Ok(scores)
    }
}

fn parse_numbers(line: &str, separator: Option<char>) -> Result<Vec<u32>, std::num::ParseIntError> {
    match separator {
        Some(separator) => line.split(separator).map(|n| n.trim().parse()).collect(),
        None => line.split_whitespace().map(str::parse).collect(),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Bingo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().enumerate();
        let (_, draw_line) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("draw sequence".to_string()))?;
        let draws = parse_numbers(draw_line, Some(','))
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {}", e)))?;

        let rows = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_numbers(line, None)
                    .map_err(|e| e.to_string())
                    .and_then(|row| {
                        <[u32; BOARD_SIZE]>::try_from(row).map_err(|row| {
                            format!("expected {} numbers, found {}", BOARD_SIZE, row.len())
                        })
                    })
                    .map_err(|e| {
                        ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rows.is_empty() {
            return Err(ParseError::MissingData("bingo boards".to_string()));
        }
        if rows.len() % BOARD_SIZE != 0 {
            return Err(ParseError::InvalidFormat(format!(
                "found {} board rows, expected a multiple of {}",
                rows.len(),
                BOARD_SIZE
            )));
        }

        let boards = rows
            .chunks_exact(BOARD_SIZE)
            .map(|chunk| Board::new(std::array::from_fn(|row| chunk[row])))
            .collect();

        Ok(Bingo { draws, boards })
    }
}

impl PartSolver<1> for Solver {
    fn solve(bingo: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let scores = bingo
            .winning_scores()
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        scores
            .first()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::SolveFailed(BingoError::NoWinner.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(bingo: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let scores = bingo
            .winning_scores()
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        scores
            .last()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::SolveFailed(BingoError::NoWinner.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    fn counting_board() -> Board {
        Board::new(std::array::from_fn(|row| {
            std::array::from_fn(|col| (row * BOARD_SIZE + col) as u32)
        }))
    }

    #[test]
    fn test_board_wins_on_column_and_rejects_further_marks() {
        let mut board = counting_board();
        for value in [0, 6, 12, 18, 24, 2, 7, 17] {
            assert_eq!(board.mark(value), Ok(false));
            assert_eq!(board.score(), 0);
        }
        assert_eq!(board.mark(22), Ok(true));
        assert_eq!(board.score(), 192 * 22);
        assert_eq!(board.mark(3), Err(BingoError::AlreadyWon));
    }

    #[test]
    fn test_board_wins_on_row() {
        let mut board = counting_board();
        for value in 5..9 {
            assert_eq!(board.mark(value), Ok(false));
        }
        assert_eq!(board.mark(9), Ok(true));
    }

    #[test]
    fn test_board_reset() {
        let mut board = counting_board();
        (0..5).for_each(|value| {
            let _ = board.mark(value);
        });
        assert!(board.has_won());
        board.reset();
        assert!(!board.has_won());
        assert_eq!(board.mark(0), Ok(false));
    }

    #[test]
    fn test_example() {
        let mut bingo = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut bingo, 1).unwrap(), "4512");
        assert_eq!(Solver::solve_part(&mut bingo, 2).unwrap(), "1924");
        assert_eq!(Solver::solve_part(&mut bingo, 1).unwrap(), "4512");
    }

    #[test]
    fn test_no_winner() {
        let mut bingo = Solver::parse(
            "99\n\n1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25\n",
        )
        .unwrap();
        assert!(matches!(
            Solver::solve_part(&mut bingo, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("1,2\n\n1 2 3\n").is_err());
        assert!(Solver::parse("1,2\n\n1 2 3 4 5\n").is_err());
        assert!(matches!(
            Solver::parse("1,2,3"),
            Err(ParseError::MissingData(_))
        ));
    }
}
