use anyhow::Result;
use std::fmt::{self, Display, Formatter};

use crate::generate::{Level, PuzzleGenerator};
use crate::grid::{Digit, Grid};
use crate::validate::{check_grid, ErrorLog};

// One playable game: the working grid plus the violations found by the last
// check. Each instance owns its generator (and so its randomness), so
// independent games can coexist.
pub struct Sudoku {
    grid: Grid,
    errors: ErrorLog,
    generator: PuzzleGenerator,
}

impl Sudoku {
    pub fn new(level: Level, seed: Option<u64>) -> Self {
        let mut game = Self {
            grid: Grid::empty(),
            errors: ErrorLog::new(),
            generator: PuzzleGenerator::new(seed),
        };
        game.new_game(level);
        game
    }

    pub fn new_game(&mut self, level: Level) {
        self.errors.clear();
        self.grid = self.generator.generate(level);
    }

    // Writes the value and returns true; values outside 0..=9 are rejected
    // and leave the grid untouched. 0 clears the cell. Row/col bounds are
    // the caller's contract. The error log is not updated until check().
    pub fn set_number(&mut self, row: usize, col: usize, value: Digit) -> bool {
        debug_assert!(row < 9 && col < 9, "cell ({row},{col}) out of bounds");
        if value > 9 {
            return false;
        }
        self.grid.set(row, col, value);
        true
    }

    pub fn check(&mut self) -> bool {
        check_grid(&self.grid, &mut self.errors)
    }

    pub fn errors(&self) -> &ErrorLog { &self.errors }

    pub fn grid(&self) -> &Grid { &self.grid }

    // Replace the working grid with a parsed 81-char position; resets the
    // error log.
    pub fn load(&mut self, text: &str) -> Result<()> {
        self.grid = Grid::parse(text)?;
        self.errors.clear();
        Ok(())
    }
}

impl Default for Sudoku {
    fn default() -> Self { Self::new(Level::default(), None) }
}

// Console dump: dots for empty cells, box separators, and a '*' after every
// cell present in the error log.
impl Display for Sudoku {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r != 0 && r % 3 == 0 { writeln!(f, "-----------------------")?; }
            write!(f, " ")?;
            for c in 0..9 {
                if c != 0 && c % 3 == 0 { write!(f, "| ")?; }
                let v = self.grid.get(r, c);
                let glyph = if v == 0 { '.' } else { char::from(b'0' + v) };
                let mark = if self.errors.contains(r, c) { '*' } else { ' ' };
                write!(f, "{glyph}{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
