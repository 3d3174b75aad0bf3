//! Core puzzle types: disks, pegs, configuration, errors and state.
//!
//! This module is presentation-free. Renderers read `PuzzleState` between
//! transitions and feed clicks back through `on_peg_clicked`.

pub mod disk;
pub mod peg;
pub mod config;
pub mod error;
pub mod state;

pub use disk::Disk;
pub use peg::{Peg, PegId, PEG_COUNT};
pub use config::{minimum_moves, PuzzleConfig, MAX_DISKS};
pub use error::PuzzleError;
pub use state::{ClickOutcome, Hand, MoveRecord, PuzzleState};
