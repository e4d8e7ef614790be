use log::debug;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::Grid;

// Successful row swaps applied per 3-row band (and column swaps per 3-column
// stack) when mixing a new game. Any count >= 1 keeps the grid a valid
// solution; higher counts only mix harder.
pub const SWAPS_PER_BAND: usize = 3;

// How much of the grid starts empty, in percent of the 81 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Level {
    pub fn percent(self) -> u8 {
        match self {
            Level::Easy => 25,
            Level::Medium => 50,
            Level::Hard => 75,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("clear percent {0} out of range (expected 0..=100)")]
    PercentOutOfRange(u8),
}

pub struct PuzzleGenerator {
    rng: rand::rngs::StdRng,
}

impl PuzzleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_rng(rand::thread_rng()).unwrap(),
        };
        Self { rng }
    }

    // Copy the reference solution, shuffle it, then blank out cells for the
    // requested level.
    pub fn generate(&mut self, level: Level) -> Grid {
        let mut grid = Grid::reference();
        self.permute(&mut grid);
        self.clear(&mut grid, level.percent())
            .expect("level percents are within range");
        debug!("generated {:?} puzzle, {} cells empty", level, grid.count_empty());
        grid
    }

    // Validity-preserving shuffle: rows may only trade places inside their
    // 3-row band, columns inside their 3-column stack. Anything wider would
    // move a digit into a different box.
    pub fn permute(&mut self, grid: &mut Grid) {
        for band in 0..3 {
            let base = band * 3;
            let mut applied = 0;
            while applied < SWAPS_PER_BAND {
                let a = base + self.rng.gen_range(0..3);
                let b = base + self.rng.gen_range(0..3);
                if a != b {
                    grid.swap_rows(a, b);
                    applied += 1;
                }
            }
        }
        for stack in 0..3 {
            let base = stack * 3;
            let mut applied = 0;
            while applied < SWAPS_PER_BAND {
                let a = base + self.rng.gen_range(0..3);
                let b = base + self.rng.gen_range(0..3);
                if a != b {
                    grid.swap_cols(a, b);
                    applied += 1;
                }
            }
        }
    }

    // Zero out exactly floor(81 * percent / 100) distinct cells, rejecting
    // positions already cleared.
    pub fn clear(&mut self, grid: &mut Grid, percent: u8) -> Result<(), GenerateError> {
        if percent > 100 {
            return Err(GenerateError::PercentOutOfRange(percent));
        }
        let clear_count = 81 * percent as usize / 100;
        let mut cleared = [[false; 9]; 9];
        let mut done = 0;
        while done < clear_count {
            let row = self.rng.gen_range(0..9);
            let col = self.rng.gen_range(0..9);
            if !cleared[row][col] {
                grid.set(row, col, 0);
                cleared[row][col] = true;
                done += 1;
            }
        }
        Ok(())
    }
}
