//! Puzzle state and the click-driven transition machine.
//!
//! ## States
//!
//! - **Idle** (`Hand::Empty`): a click on a non-empty peg lifts its top disk.
//!   A click on an empty peg does nothing.
//! - **Holding** (`Hand::Holding`): a click on a peg that accepts the disk
//!   places it there and counts a move, even when the target is the peg the
//!   disk came from. A click on a peg that refuses it sends the disk back to
//!   its origin without counting a move.
//!
//! `solved` is orthogonal: once the destination peg holds every disk, all
//! further clicks are ignored until `reset` or `restart`.
//!
//! ## Usage
//!
//! ```
//! use rust_hanoi::core::{ClickOutcome, PegId, PuzzleState};
//!
//! let mut puzzle = PuzzleState::with_disks(1).unwrap();
//!
//! puzzle.on_peg_clicked(PegId::LEFT).unwrap();
//! let outcome = puzzle.on_peg_clicked(PegId::RIGHT).unwrap();
//!
//! assert!(matches!(outcome, ClickOutcome::Placed { .. }));
//! assert_eq!(puzzle.move_count(), 1);
//! assert!(puzzle.is_solved());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::config::{minimum_moves, PuzzleConfig};
use super::disk::Disk;
use super::error::PuzzleError;
use super::peg::{Peg, PegId, PEG_COUNT};

/// What the player is holding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    /// Nothing lifted.
    #[default]
    Empty,
    /// A disk lifted from `origin`. It is on no peg while held.
    Holding { origin: PegId, disk: Disk },
}

/// Result of a single peg click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// No state change: empty peg while idle, or puzzle already solved.
    Ignored,
    /// Top disk lifted from a peg.
    PickedUp { from: PegId, disk: Disk },
    /// Held disk placed; counted as a move.
    Placed { from: PegId, to: PegId, disk: Disk },
    /// Held disk refused by `rejected_by` and put back on `origin`; not a move.
    Returned { origin: PegId, rejected_by: PegId, disk: Disk },
}

impl ClickOutcome {
    /// Check if this click completed a move.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, ClickOutcome::Placed { .. })
    }
}

/// A completed placement, for history display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number (starts at 1).
    pub number: u64,
    /// The disk that moved.
    pub disk: Disk,
    /// Peg the disk was lifted from.
    pub from: PegId,
    /// Peg the disk was placed on.
    pub to: PegId,
}

/// Complete puzzle state.
///
/// Mutated only through `on_peg_clicked`, `reset` and `restart`. Everything
/// else is a read-only query for the presentation layer. Deserialized
/// snapshots are checked against the same invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleSnapshot")]
pub struct PuzzleState {
    config: PuzzleConfig,

    /// Indexed by `PegId::index()`.
    pegs: [Peg; PEG_COUNT],

    hand: Hand,

    /// Completed placements since the last reset.
    move_count: u64,

    /// Destination peg holds every disk. Sticky until reset.
    solved: bool,

    /// Uses `im::Vector` so renderer snapshots clone in O(1).
    history: Vector<MoveRecord>,
}

/// Unchecked serialized form of a `PuzzleState`.
#[derive(Deserialize)]
struct PuzzleSnapshot {
    config: PuzzleConfig,
    pegs: [Peg; PEG_COUNT],
    hand: Hand,
    move_count: u64,
    solved: bool,
    history: Vector<MoveRecord>,
}

impl TryFrom<PuzzleSnapshot> for PuzzleState {
    type Error = PuzzleError;

    fn try_from(snapshot: PuzzleSnapshot) -> Result<Self, Self::Error> {
        snapshot.config.validate()?;

        let state = Self {
            config: snapshot.config,
            pegs: snapshot.pegs,
            hand: snapshot.hand,
            move_count: snapshot.move_count,
            solved: snapshot.solved,
            history: snapshot.history,
        };

        if PegId::all().any(|id| state.peg(id).id() != id) {
            return Err(PuzzleError::InconsistentSnapshot("pegs are out of order"));
        }
        if !state.is_consistent() {
            return Err(PuzzleError::InconsistentSnapshot(
                "disks do not match the configured disk count",
            ));
        }
        if state.solved != (state.peg(PegId::DESTINATION).len() == state.config.disk_count) {
            return Err(PuzzleError::InconsistentSnapshot("solved flag disagrees with the pegs"));
        }
        if state.history.len() as u64 != state.move_count {
            return Err(PuzzleError::InconsistentSnapshot("history length disagrees with move count"));
        }

        Ok(state)
    }
}

impl PuzzleState {
    /// Create a puzzle with every disk on the source peg.
    pub fn new(config: PuzzleConfig) -> Result<Self, PuzzleError> {
        let mut state = Self {
            config,
            pegs: [
                Peg::new(PegId::LEFT),
                Peg::new(PegId::MIDDLE),
                Peg::new(PegId::RIGHT),
            ],
            hand: Hand::Empty,
            move_count: 0,
            solved: false,
            history: Vector::new(),
        };
        state.restock(config)?;
        Ok(state)
    }

    /// Create a puzzle with `disk_count` disks.
    pub fn with_disks(disk_count: usize) -> Result<Self, PuzzleError> {
        Self::new(PuzzleConfig::new(disk_count))
    }

    // === Transitions ===

    /// Advance the state machine for one click on `peg`.
    ///
    /// The error cases are contract violations that the transition rules
    /// themselves rule out; normal play always returns `Ok`.
    pub fn on_peg_clicked(&mut self, peg: PegId) -> Result<ClickOutcome, PuzzleError> {
        if self.solved {
            trace!(%peg, "click ignored: puzzle solved");
            return Ok(ClickOutcome::Ignored);
        }

        match self.hand {
            Hand::Empty => self.pick_up(peg),
            Hand::Holding { origin, disk } => self.place(origin, disk, peg),
        }
    }

    /// Advance the state machine for a click on a raw peg index.
    ///
    /// Fails with `InvalidPegIndex` if `index >= 3`.
    pub fn on_peg_index_clicked(&mut self, index: usize) -> Result<ClickOutcome, PuzzleError> {
        let peg = PegId::try_from(index)?;
        self.on_peg_clicked(peg)
    }

    /// Start over with `disk_count` disks.
    ///
    /// On error the current state is left untouched.
    pub fn reset(&mut self, disk_count: usize) -> Result<(), PuzzleError> {
        self.restock(self.config.with_disk_count(disk_count))?;

        info!(disk_count, "puzzle reset");
        Ok(())
    }

    /// Start over with the current disk count.
    pub fn restart(&mut self) -> Result<(), PuzzleError> {
        self.restock(self.config)?;

        info!(disk_count = self.config.disk_count, "puzzle restarted");
        Ok(())
    }

    fn pick_up(&mut self, from: PegId) -> Result<ClickOutcome, PuzzleError> {
        let source = &mut self.pegs[from.index()];
        if source.is_empty() {
            trace!(peg = %from, "click ignored: nothing to pick up");
            return Ok(ClickOutcome::Ignored);
        }

        let disk = source.pop_top()?;
        self.hand = Hand::Holding { origin: from, disk };

        debug!(peg = %from, %disk, "picked up disk");
        Ok(ClickOutcome::PickedUp { from, disk })
    }

    fn place(&mut self, origin: PegId, disk: Disk, target: PegId) -> Result<ClickOutcome, PuzzleError> {
        if !self.pegs[target.index()].can_accept(disk) {
            // The origin accepted this disk a moment ago and nothing changed since.
            self.pegs[origin.index()].push(disk)?;
            self.hand = Hand::Empty;

            debug!(%origin, rejected_by = %target, %disk, "placement refused, disk returned");
            return Ok(ClickOutcome::Returned {
                origin,
                rejected_by: target,
                disk,
            });
        }

        self.pegs[target.index()].push(disk)?;
        self.hand = Hand::Empty;
        self.move_count += 1;
        self.history.push_back(MoveRecord {
            number: self.move_count,
            disk,
            from: origin,
            to: target,
        });

        debug!(from = %origin, to = %target, %disk, moves = self.move_count, "placed disk");

        if self.pegs[PegId::DESTINATION.index()].len() == self.config.disk_count {
            self.solved = true;
            info!(
                moves = self.move_count,
                minimum = self.minimum_moves(),
                "puzzle solved"
            );
        }

        Ok(ClickOutcome::Placed {
            from: origin,
            to: target,
            disk,
        })
    }

    /// Adopt `config`, clear progress and stack every disk on the source peg.
    ///
    /// Validates before touching anything, so on error the state is unchanged.
    fn restock(&mut self, config: PuzzleConfig) -> Result<(), PuzzleError> {
        config.validate()?;
        let source = Peg::stacked(PegId::SOURCE, config.disk_count)?;

        self.config = config;
        self.hand = Hand::Empty;
        self.move_count = 0;
        self.solved = false;
        self.history = Vector::new();

        for peg in &mut self.pegs {
            peg.clear();
        }
        self.pegs[PegId::SOURCE.index()] = source;
        Ok(())
    }

    // === Queries ===

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Number of disks in play.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.config.disk_count
    }

    /// Get a peg.
    #[must_use]
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// All pegs, left to right.
    #[must_use]
    pub fn pegs(&self) -> &[Peg; PEG_COUNT] {
        &self.pegs
    }

    /// Current hand.
    #[must_use]
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// The lifted disk and the peg it came from, if any.
    #[must_use]
    pub fn in_hand(&self) -> Option<(PegId, Disk)> {
        match self.hand {
            Hand::Empty => None,
            Hand::Holding { origin, disk } => Some((origin, disk)),
        }
    }

    /// Check if a disk is lifted.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self.hand, Hand::Holding { .. })
    }

    /// Completed placements since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Check if the destination peg holds every disk.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Fewest moves that solve the current puzzle.
    #[must_use]
    pub fn minimum_moves(&self) -> u64 {
        minimum_moves(self.config.disk_count)
    }

    /// Completed placements, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Check the structural invariants.
    ///
    /// - Every peg is smaller-on-larger.
    /// - Every rank `0..n` appears exactly once across pegs and hand.
    /// - The held disk is not on its origin peg.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if !self.pegs.iter().all(Peg::is_well_ordered) {
            return false;
        }

        let mut seen = vec![false; self.config.disk_count];
        let held = self.in_hand().map(|(_, disk)| disk);
        for disk in self.pegs.iter().flat_map(|p| p.disks().iter().copied()).chain(held) {
            match seen.get_mut(disk.rank() as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        if !seen.iter().all(|&s| s) {
            return false;
        }

        match self.hand {
            Hand::Empty => true,
            Hand::Holding { origin, disk } => !self.peg(origin).disks().contains(&disk),
        }
    }
}
