//! Python bindings for the rust-hanoi puzzle engine.
//!
//! Lets a Python front end (pygame, tkinter, ...) keep drawing while the
//! puzzle rules and hit testing run here.
//!
//! # Quick Start
//!
//! ```python
//! import rust_hanoi as hanoi
//!
//! puzzle = hanoi.Puzzle(disk_count=3)
//! board = hanoi.Board(disk_count=3)
//!
//! # Forward a mouse click
//! board.click(puzzle, 200, 450)   # "picked_up"
//! board.click(puzzle, 600, 450)   # "placed"
//!
//! print(puzzle.pegs(), puzzle.moves, hanoi.minimum_moves(3))
//! ```

use pyo3::prelude::*;

mod py_puzzle;

pub use py_puzzle::*;

/// rust-hanoi: Towers of Hanoi rules and hit testing.
#[pymodule]
fn rust_hanoi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPuzzle>()?;
    m.add_class::<PyBoard>()?;
    m.add_function(wrap_pyfunction!(py_minimum_moves, m)?)?;

    Ok(())
}
