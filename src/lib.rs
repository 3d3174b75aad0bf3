//! # rust-hanoi
//!
//! Towers of Hanoi played by pointer clicks: lift the top disk of a peg,
//! drop it on another, and move the whole stack from the left peg to the
//! right one without ever putting a larger disk on a smaller one.
//!
//! ## Design Principles
//!
//! 1. **Rules Without Pixels**: `core` knows pegs, disks and clicks on pegs.
//!    It never sees a coordinate.
//!
//! 2. **One Transition Per Click**: every resolved click is a single
//!    synchronous call that leaves the state consistent before the next
//!    frame is drawn.
//!
//! 3. **Policy Over Errors**: an illegal drop sends the disk home. Errors are
//!    reserved for contract violations that normal play cannot trigger.
//!
//! ## Modules
//!
//! - `core`: Disks, pegs, configuration, errors and the puzzle state machine
//! - `interaction`: Geometry, board layout and click-to-peg dispatch
//! - `session`: Menu, playing screen, key commands and elapsed time
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod interaction;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Disk, Peg, PegId, PEG_COUNT,
    PuzzleConfig, PuzzleError, MAX_DISKS, minimum_moves,
    PuzzleState, Hand, ClickOutcome, MoveRecord,
};

pub use crate::interaction::{
    Point, Rect,
    BoardLayout, LayoutConfig,
    InteractionController, PegHitTest,
};

pub use crate::session::{
    Clock, SystemClock, ManualClock,
    Menu, MenuButton,
    Session, SessionConfig, SessionEvent, SessionUpdate, Screen, Game, KeyCommand,
};
