//! Puzzle and board bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{minimum_moves, ClickOutcome, Disk, PegId, PuzzleError, PuzzleState};
use crate::interaction::{BoardLayout, InteractionController, LayoutConfig, PegHitTest, Point, Rect};

impl From<PuzzleError> for PyErr {
    fn from(err: PuzzleError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn outcome_name(outcome: ClickOutcome) -> &'static str {
    match outcome {
        ClickOutcome::Ignored => "ignored",
        ClickOutcome::PickedUp { .. } => "picked_up",
        ClickOutcome::Placed { .. } => "placed",
        ClickOutcome::Returned { .. } => "returned",
    }
}

fn rect_tuple(rect: Rect) -> (i32, i32, i32, i32) {
    (rect.x, rect.y, rect.width, rect.height)
}

/// Python wrapper for PuzzleState.
#[pyclass(name = "Puzzle")]
#[derive(Clone, Debug)]
pub struct PyPuzzle(pub PuzzleState);

#[pymethods]
impl PyPuzzle {
    /// Create a puzzle with every disk on the left peg.
    #[new]
    #[pyo3(signature = (disk_count = 3))]
    fn new(disk_count: usize) -> PyResult<Self> {
        Ok(Self(PuzzleState::with_disks(disk_count)?))
    }

    /// Click a peg by index (0, 1 or 2).
    ///
    /// Returns "ignored", "picked_up", "placed" or "returned".
    fn click(&mut self, peg: usize) -> PyResult<&'static str> {
        Ok(outcome_name(self.0.on_peg_index_clicked(peg)?))
    }

    /// Start over with a new disk count.
    fn reset(&mut self, disk_count: usize) -> PyResult<()> {
        Ok(self.0.reset(disk_count)?)
    }

    /// Start over with the current disk count.
    fn restart(&mut self) -> PyResult<()> {
        Ok(self.0.restart()?)
    }

    /// Disk ranks per peg, bottom to top.
    fn pegs(&self) -> Vec<Vec<u8>> {
        self.0
            .pegs()
            .iter()
            .map(|peg| peg.disks().iter().map(|d| d.rank()).collect())
            .collect()
    }

    /// `(origin_peg, rank)` of the lifted disk, or None.
    #[getter]
    fn in_hand(&self) -> Option<(usize, u8)> {
        self.0.in_hand().map(|(peg, disk)| (peg.index(), disk.rank()))
    }

    #[getter]
    fn moves(&self) -> u64 {
        self.0.move_count()
    }

    #[getter]
    fn solved(&self) -> bool {
        self.0.is_solved()
    }

    #[getter]
    fn disk_count(&self) -> usize {
        self.0.disk_count()
    }

    /// Fewest moves that solve this puzzle.
    fn minimum_moves(&self) -> u64 {
        self.0.minimum_moves()
    }

    /// Copy the puzzle state.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Puzzle(disks={}, moves={}, solved={})",
            self.0.disk_count(),
            self.0.move_count(),
            self.0.is_solved()
        )
    }
}

/// Python wrapper for the board layout and click controller.
#[pyclass(name = "Board")]
pub struct PyBoard {
    controller: InteractionController<BoardLayout>,
}

#[pymethods]
impl PyBoard {
    /// Create a board sized for `disk_count` disks.
    #[new]
    #[pyo3(signature = (disk_count = 3, width = 800, height = 600))]
    fn new(disk_count: usize, width: i32, height: i32) -> PyResult<Self> {
        let config = LayoutConfig::default().with_board_size(width, height);
        Ok(Self {
            controller: InteractionController::new(BoardLayout::new(config, disk_count)?),
        })
    }

    /// Peg index under a pixel position, or None.
    fn peg_at(&self, x: i32, y: i32) -> Option<usize> {
        self.controller.hit_test().peg_at(Point::new(x, y)).map(PegId::index)
    }

    /// Forward a pixel click to a puzzle.
    ///
    /// Returns None when the click missed every peg.
    fn click(&self, puzzle: &mut PyPuzzle, x: i32, y: i32) -> PyResult<Option<&'static str>> {
        let outcome = self.controller.on_click(&mut puzzle.0, Point::new(x, y))?;
        Ok(outcome.map(outcome_name))
    }

    /// Click region `(x, y, width, height)` of a peg.
    fn peg_region(&self, peg: usize) -> PyResult<(i32, i32, i32, i32)> {
        let peg = PegId::try_from(peg)?;
        Ok(rect_tuple(self.controller.hit_test().peg_region(peg)))
    }

    /// Rectangle of the disk with `rank` at `level` (0 = bottom) on `peg`.
    fn disk_rect(&self, peg: usize, level: usize, rank: u8) -> PyResult<(i32, i32, i32, i32)> {
        let peg = PegId::try_from(peg)?;
        Ok(rect_tuple(self.controller.hit_test().disk_rect(peg, level, Disk::new(rank))))
    }
}

/// Fewest moves that solve a puzzle of `disk_count` disks.
#[pyfunction]
#[pyo3(name = "minimum_moves")]
pub fn py_minimum_moves(disk_count: usize) -> u64 {
    minimum_moves(disk_count)
}
