//! Disk identity.
//!
//! A disk is identified by its rank: 0 is the smallest disk, `n - 1` the
//! largest. Ranks are assigned once at setup and never change, so the rank
//! doubles as the disk's identity within a puzzle instance.
//!
//! ```
//! use rust_hanoi::core::Disk;
//!
//! let small = Disk::new(0);
//! let large = Disk::new(2);
//!
//! assert!(small.is_smaller_than(large));
//! assert_eq!(large.size(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// A ranked puzzle piece.
///
/// Ordering follows rank, so `Disk::new(0) < Disk::new(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(u8);

impl Disk {
    /// Create a disk with the given rank (0 = smallest).
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Size rank of this disk.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Relative width in disk units (the smallest disk is 1).
    ///
    /// Presentation layers scale this to pixels; see
    /// [`BoardLayout::disk_width`](crate::interaction::BoardLayout::disk_width).
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0 as u32 + 1
    }

    /// Palette slot for this disk.
    #[must_use]
    pub const fn color_index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this disk may rest on `other`.
    #[must_use]
    pub const fn is_smaller_than(self, other: Disk) -> bool {
        self.0 < other.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}
