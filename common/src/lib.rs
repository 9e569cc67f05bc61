//! Shared helpers for the per-day puzzle crates: input loading, line
//! splitting, integer-list parsing and a minimal 2D grid.

pub mod grid;
pub mod input;

pub use grid::Grid;
pub use input::{ints, load_input, non_empty_lines};
