//! Pegs: ordered disk stacks that enforce the smaller-on-larger rule.
//!
//! Disks are stored bottom-to-top, so the top disk is the last element.
//!
//! ```
//! use rust_hanoi::core::{Disk, Peg, PegId};
//!
//! let mut peg = Peg::new(PegId::LEFT);
//! peg.push(Disk::new(2)).unwrap();
//! peg.push(Disk::new(0)).unwrap();
//!
//! // A larger disk may not go on a smaller one
//! assert!(!peg.can_accept(Disk::new(1)));
//! assert!(peg.push(Disk::new(1)).is_err());
//!
//! assert_eq!(peg.pop_top().unwrap(), Disk::new(0));
//! assert_eq!(peg.top(), Some(Disk::new(2)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_DISKS;
use super::disk::Disk;
use super::error::PuzzleError;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// Peg identifier: 0 = left (source), 1 = middle, 2 = right (destination).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize")]
pub struct PegId(u8);

impl PegId {
    /// Left peg. Holds every disk at setup.
    pub const LEFT: PegId = PegId(0);
    /// Middle peg.
    pub const MIDDLE: PegId = PegId(1);
    /// Right peg. The puzzle is solved once it holds every disk.
    pub const RIGHT: PegId = PegId(2);

    /// Peg that receives the disks at setup.
    pub const SOURCE: PegId = Self::LEFT;
    /// Peg that must end up holding every disk.
    pub const DESTINATION: PegId = Self::RIGHT;

    /// Create a peg ID.
    ///
    /// Panics if `index >= 3`. Use `PegId::try_from` for unchecked input.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PEG_COUNT, "Peg index must be 0, 1 or 2");
        Self(index)
    }

    /// Get the index (0-based), suitable for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all pegs, left to right.
    pub fn all() -> impl Iterator<Item = PegId> {
        (0..PEG_COUNT as u8).map(PegId)
    }
}

impl TryFrom<usize> for PegId {
    type Error = PuzzleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < PEG_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(PuzzleError::InvalidPegIndex(index))
        }
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Peg({})", self.0)
    }
}

/// A stack of disks.
///
/// Invariant: read top-to-bottom, ranks strictly increase. Every mutation
/// goes through `push`/`pop_top`, which preserve it. Deserialization replays
/// the stack through `push`, so a misordered snapshot is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PegSnapshot")]
pub struct Peg {
    id: PegId,
    /// Bottom-to-top. Inline up to the largest menu preset.
    disks: SmallVec<[Disk; 8]>,
}

/// Unchecked serialized form of a `Peg`.
#[derive(Deserialize)]
struct PegSnapshot {
    id: PegId,
    disks: SmallVec<[Disk; 8]>,
}

impl TryFrom<PegSnapshot> for Peg {
    type Error = PuzzleError;

    fn try_from(snapshot: PegSnapshot) -> Result<Self, Self::Error> {
        let mut peg = Peg::new(snapshot.id);
        for disk in snapshot.disks {
            peg.push(disk)?;
        }
        Ok(peg)
    }
}

impl Peg {
    /// Create an empty peg.
    #[must_use]
    pub fn new(id: PegId) -> Self {
        Self {
            id,
            disks: SmallVec::new(),
        }
    }

    /// Create a peg stacked with `count` disks, largest at the bottom.
    ///
    /// Fails with `InvalidDiskCount` if `count > MAX_DISKS`. Zero gives an
    /// empty peg.
    pub fn stacked(id: PegId, count: usize) -> Result<Self, PuzzleError> {
        if count > MAX_DISKS {
            return Err(PuzzleError::InvalidDiskCount(count));
        }

        Ok(Self {
            id,
            disks: (0..count as u8).rev().map(Disk::new).collect(),
        })
    }

    /// Get this peg's identity.
    #[must_use]
    pub fn id(&self) -> PegId {
        self.id
    }

    /// Topmost disk, or `None` if empty.
    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Check whether `disk` may be placed on this peg.
    ///
    /// True iff the peg is empty or its top disk is larger.
    #[must_use]
    pub fn can_accept(&self, disk: Disk) -> bool {
        self.top().map_or(true, |top| disk.is_smaller_than(top))
    }

    /// Place a disk on top.
    ///
    /// Fails with `IllegalPlacement` if `can_accept(disk)` is false.
    pub fn push(&mut self, disk: Disk) -> Result<(), PuzzleError> {
        match self.top() {
            Some(top) if !disk.is_smaller_than(top) => Err(PuzzleError::IllegalPlacement {
                peg: self.id,
                disk,
                top,
            }),
            _ => {
                self.disks.push(disk);
                Ok(())
            }
        }
    }

    /// Remove and return the top disk.
    ///
    /// Fails with `EmptyPeg` if there is nothing to take.
    pub fn pop_top(&mut self) -> Result<Disk, PuzzleError> {
        self.disks.pop().ok_or(PuzzleError::EmptyPeg(self.id))
    }

    /// Disks bottom-to-top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Number of disks on this peg.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Check if the peg holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Check the smaller-on-larger invariant over the whole stack.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].is_smaller_than(pair[0]))
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(peg: &Peg) -> Vec<u8> {
        peg.disks().iter().map(|d| d.rank()).collect()
    }

    #[test]
    fn test_peg_id_bounds() {
        assert_eq!(PegId::try_from(0usize), Ok(PegId::LEFT));
        assert_eq!(PegId::try_from(2usize), Ok(PegId::RIGHT));
        assert_eq!(PegId::try_from(3usize), Err(PuzzleError::InvalidPegIndex(3)));
        assert_eq!(PegId::all().collect::<Vec<_>>(), vec![PegId::LEFT, PegId::MIDDLE, PegId::RIGHT]);
    }

    #[test]
    #[should_panic(expected = "Peg index must be 0, 1 or 2")]
    fn test_peg_id_new_out_of_range() {
        let _ = PegId::new(3);
    }

    #[test]
    fn test_empty_peg() {
        let mut peg = Peg::new(PegId::MIDDLE);

        assert!(peg.is_empty());
        assert_eq!(peg.top(), None);
        assert!(peg.can_accept(Disk::new(7)));
        assert_eq!(peg.pop_top(), Err(PuzzleError::EmptyPeg(PegId::MIDDLE)));
    }

    #[test]
    fn test_stacked() {
        let peg = Peg::stacked(PegId::LEFT, 3).unwrap();

        assert_eq!(ranks(&peg), vec![2, 1, 0]);
        assert_eq!(peg.top(), Some(Disk::new(0)));
        assert!(peg.is_well_ordered());
    }

    #[test]
    fn test_stacked_bounds() {
        let tallest = Peg::stacked(PegId::LEFT, MAX_DISKS).unwrap();
        assert_eq!(tallest.len(), MAX_DISKS);
        assert_eq!(tallest.disks()[0], Disk::new(63));
        assert!(tallest.is_well_ordered());

        assert!(Peg::stacked(PegId::LEFT, 0).unwrap().is_empty());
        assert_eq!(
            Peg::stacked(PegId::LEFT, MAX_DISKS + 1),
            Err(PuzzleError::InvalidDiskCount(MAX_DISKS + 1))
        );
        assert_eq!(Peg::stacked(PegId::LEFT, 300), Err(PuzzleError::InvalidDiskCount(300)));
    }

    #[test]
    fn test_can_accept() {
        let mut peg = Peg::new(PegId::LEFT);
        peg.push(Disk::new(3)).unwrap();

        assert!(peg.can_accept(Disk::new(2)));
        assert!(!peg.can_accept(Disk::new(3))); // Equal rank is not smaller
        assert!(!peg.can_accept(Disk::new(4)));
    }

    #[test]
    fn test_illegal_push_leaves_peg_unchanged() {
        let mut peg = Peg::stacked(PegId::RIGHT, 2).unwrap();

        let err = peg.push(Disk::new(1)).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::IllegalPlacement {
                peg: PegId::RIGHT,
                disk: Disk::new(1),
                top: Disk::new(0),
            }
        );
        assert_eq!(ranks(&peg), vec![1, 0]);
    }

    #[test]
    fn test_pop_order() {
        let mut peg = Peg::stacked(PegId::LEFT, 3).unwrap();

        assert_eq!(peg.pop_top(), Ok(Disk::new(0)));
        assert_eq!(peg.pop_top(), Ok(Disk::new(1)));
        assert_eq!(peg.pop_top(), Ok(Disk::new(2)));
        assert!(peg.pop_top().is_err());
    }

    #[test]
    fn test_serialization() {
        let peg = Peg::stacked(PegId::MIDDLE, 4).unwrap();
        let json = serde_json::to_string(&peg).unwrap();
        let deserialized: Peg = serde_json::from_str(&json).unwrap();

        assert_eq!(peg, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_misordered_stack() {
        // Rank 1 resting on rank 0
        let err = serde_json::from_str::<Peg>(r#"{"id":0,"disks":[0,1]}"#).unwrap_err();
        assert!(err.to_string().contains("cannot place Disk(1) on Peg(0)"), "{err}");

        // Equal ranks
        assert!(serde_json::from_str::<Peg>(r#"{"id":0,"disks":[2,2]}"#).is_err());

        let peg: Peg = serde_json::from_str(r#"{"id":1,"disks":[3,1,0]}"#).unwrap();
        assert_eq!(ranks(&peg), vec![3, 1, 0]);
        assert_eq!(peg.id(), PegId::MIDDLE);
    }

    #[test]
    fn test_deserialize_rejects_bad_peg_id() {
        assert_eq!(serde_json::from_str::<PegId>("2").unwrap(), PegId::RIGHT);
        assert!(serde_json::from_str::<PegId>("3").is_err());
        assert!(serde_json::from_str::<Peg>(r#"{"id":7,"disks":[]}"#).is_err());
    }
}
