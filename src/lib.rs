pub mod engine;
pub mod generate;
pub mod grid;
pub mod validate;

pub use engine::Sudoku;
pub use generate::{GenerateError, Level, PuzzleGenerator, SWAPS_PER_BAND};
pub use grid::{Digit, Grid};
pub use validate::{ErrorEntry, ErrorKind, ErrorLog};
