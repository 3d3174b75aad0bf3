//! Interactive session: disk-count menu, playing screen, and elapsed time.
//!
//! A `Session` is what a windowed front end drives. It owns the menu, at most
//! one game, and a `Clock`; the front end forwards clicks and key commands
//! and draws whatever `screen()` reports.

pub mod clock;
pub mod flow;
pub mod menu;

pub use clock::{format_elapsed, Clock, ManualClock, SystemClock};
pub use menu::{Menu, MenuButton};
pub use flow::{Game, KeyCommand, Screen, Session, SessionConfig, SessionEvent, SessionUpdate};
