//! Puzzle configuration.
//!
//! The only gameplay knob is the number of disks. Board and menu geometry
//! live with the layers that use them (`LayoutConfig`, `SessionConfig`).

use serde::{Deserialize, Serialize};

use super::error::PuzzleError;

/// Largest supported disk count.
///
/// Keeps ranks in a `u8` and `minimum_moves` exact in a `u64`.
pub const MAX_DISKS: usize = 64;

/// Puzzle configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of disks stacked on the source peg at setup (1..=64).
    pub disk_count: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { disk_count: 3 }
    }
}

impl PuzzleConfig {
    /// Create a config for `disk_count` disks.
    #[must_use]
    pub fn new(disk_count: usize) -> Self {
        Self { disk_count }
    }

    /// Set the disk count.
    #[must_use]
    pub fn with_disk_count(mut self, disk_count: usize) -> Self {
        self.disk_count = disk_count;
        self
    }

    /// Check the disk count is within `1..=MAX_DISKS`.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if (1..=MAX_DISKS).contains(&self.disk_count) {
            Ok(())
        } else {
            Err(PuzzleError::InvalidDiskCount(self.disk_count))
        }
    }
}

/// Fewest moves that solve a puzzle of `disk_count` disks: `2^n - 1`.
///
/// Exact for every count up to `MAX_DISKS`; saturates beyond it.
///
/// ```
/// use rust_hanoi::core::minimum_moves;
///
/// assert_eq!(minimum_moves(1), 1);
/// assert_eq!(minimum_moves(3), 7);
/// assert_eq!(minimum_moves(8), 255);
/// ```
#[must_use]
pub const fn minimum_moves(disk_count: usize) -> u64 {
    if disk_count == 0 {
        0
    } else if disk_count >= 64 {
        u64::MAX
    } else {
        (1u64 << disk_count) - 1
    }
}
