//! Contract violations raised by the puzzle core.
//!
//! None of these are reachable through normal play: the state machine checks
//! legality before pushing and only pops from non-empty pegs. They surface
//! when a caller bypasses the state machine or hands in an out-of-range value.

use super::disk::Disk;
use super::peg::{PegId, PEG_COUNT};
use super::MAX_DISKS;

/// Errors returned by puzzle operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// Attempted to put a disk on a smaller one.
    #[error("cannot place {disk} on {peg}: top disk is {top}")]
    IllegalPlacement { peg: PegId, disk: Disk, top: Disk },

    /// Attempted to take a disk from an empty peg.
    #[error("cannot take a disk from empty {0}")]
    EmptyPeg(PegId),

    /// Peg index outside `0..3`.
    #[error("peg index {0} is out of range (expected 0..{max})", max = PEG_COUNT)]
    InvalidPegIndex(usize),

    /// Disk count outside `1..=MAX_DISKS`.
    #[error("disk count {0} is out of range (expected 1..={max})", max = MAX_DISKS)]
    InvalidDiskCount(usize),

    /// A deserialized puzzle snapshot that no sequence of clicks could produce.
    #[error("inconsistent puzzle snapshot: {0}")]
    InconsistentSnapshot(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PuzzleError::IllegalPlacement {
            peg: PegId::RIGHT,
            disk: Disk::new(1),
            top: Disk::new(0),
        };
        assert_eq!(err.to_string(), "cannot place Disk(1) on Peg(2): top disk is Disk(0)");

        assert_eq!(
            PuzzleError::EmptyPeg(PegId::MIDDLE).to_string(),
            "cannot take a disk from empty Peg(1)"
        );
        assert_eq!(
            PuzzleError::InvalidPegIndex(7).to_string(),
            "peg index 7 is out of range (expected 0..3)"
        );
        assert_eq!(
            PuzzleError::InvalidDiskCount(0).to_string(),
            "disk count 0 is out of range (expected 1..=64)"
        );
        assert_eq!(
            PuzzleError::InconsistentSnapshot("solved flag disagrees with the pegs").to_string(),
            "inconsistent puzzle snapshot: solved flag disagrees with the pegs"
        );
    }
}
