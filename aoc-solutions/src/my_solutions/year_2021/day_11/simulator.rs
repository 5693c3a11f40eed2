//! Octopus energy grid with cascading flashes
//!
//! Every step raises each cell's energy by one. A cell whose energy exceeds
//! [`FLASH_THRESHOLD`] flashes, which raises all eight neighbours by one and
//! may make them flash in turn. A cell flashes at most once per step, and
//! every cell that flashed ends the step at zero.

use thiserror::Error;

/// Energy above this value makes a cell flash
pub const FLASH_THRESHOLD: u32 = 9;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Rectangular energy grid that can be stepped, counted and rewound
///
/// Cells are stored row-major. The grid captured at construction is kept
/// so [`FlashSimulator::reset`] can rewind without re-parsing.
#[derive(Debug, Clone)]
pub struct FlashSimulator {
    width: usize,
    height: usize,
    initial: Box<[u32]>,
    energies: Vec<u32>,
    // Per-step scratch, cleared at the end of every step.
    flashed: Vec<bool>,
    pending: Vec<usize>,
    step_count: u64,
    flash_count: u64,
}

impl FlashSimulator {
    /// Build a simulator from rows of energy levels
    ///
    /// Fails when there are no rows, a row has no columns, or rows differ
    /// in length.
    pub fn new<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, SimulatorError> {
        let first = rows
            .first()
            .ok_or(SimulatorError::InvalidInput("energy grid has no rows"))?;
        let width = first.as_ref().len();
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(SimulatorError::InvalidInput(
                "energy grid rows differ in length",
            ));
        }
        if width == 0 {
            return Err(SimulatorError::InvalidInput(
                "energy grid rows have no columns",
            ));
        }

        let initial: Box<[u32]> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let cell_count = initial.len();

        Ok(Self {
            width,
            height: rows.len(),
            energies: initial.to_vec(),
            initial,
            flashed: vec![false; cell_count],
            pending: Vec::with_capacity(cell_count),
            step_count: 0,
            flash_count: 0,
        })
    }

    /// Advance one step, returning `true` when every cell flashed in it
    pub fn simulate_step(&mut self) -> bool {
        for index in 0..self.energies.len() {
            self.charge(index);
        }

        while let Some(index) = self.pending.pop() {
            debug_assert!(
                self.energies[index] > FLASH_THRESHOLD,
                "cell {index} queued to flash below threshold"
            );
            for neighbor in neighbors(self.width, self.height, index) {
                self.charge(neighbor);
            }
        }

        let mut step_flashes = 0u64;
        for (energy, flashed) in self.energies.iter_mut().zip(self.flashed.iter_mut()) {
            if *flashed {
                *energy = 0;
                *flashed = false;
                step_flashes += 1;
            }
        }

        self.step_count += 1;
        self.flash_count += step_flashes;
        step_flashes == self.cell_count() as u64
    }

    pub fn simulate_n_steps(&mut self, n: u64) {
        for _ in 0..n {
            self.simulate_step();
        }
    }

    /// Step until a step in which every cell flashes
    ///
    /// Does not return for grids that never synchronize; prefer
    /// [`FlashSimulator::simulate_until_all_flash_within`] on untrusted input.
    pub fn simulate_until_all_flash(&mut self) {
        while !self.simulate_step() {}
    }

    /// Step at most `max_steps` times, stopping at the first synchronized step
    ///
    /// Returns the total step count once synchronized, or `None` if the
    /// limit was reached first.
    pub fn simulate_until_all_flash_within(&mut self, max_steps: u64) -> Option<u64> {
        for _ in 0..max_steps {
            if self.simulate_step() {
                return Some(self.step_count);
            }
        }
        None
    }

    /// Rewind to the grid given at construction and clear both counters
    pub fn reset(&mut self) {
        self.energies.copy_from_slice(&self.initial);
        self.step_count = 0;
        self.flash_count = 0;
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn flash_count(&self) -> u64 {
        self.flash_count
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.energies.len()
    }

    /// Energy of the cell at `(row, col)`, or `None` outside the grid
    pub fn energy(&self, row: usize, col: usize) -> Option<u32> {
        (row < self.height && col < self.width).then(|| self.energies[row * self.width + col])
    }

    /// Current energies, one slice per row
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.energies.chunks_exact(self.width)
    }

    fn charge(&mut self, index: usize) {
        let energy = &mut self.energies[index];
        *energy = energy.saturating_add(1);
        if *energy > FLASH_THRESHOLD && !self.flashed[index] {
            self.flashed[index] = true;
            self.pending.push(index);
        }
    }
}

fn neighbors(width: usize, height: usize, index: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (index / width, index % width);
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < height)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < width)?;
        Some(r * width + c)
    })
}
