//! Pointer interaction: geometry, board layout and click dispatch.
//!
//! - `geometry`: `Point` and `Rect` in board pixels
//! - `layout`: `BoardLayout`, the peg regions and disk rectangles for a board
//! - `controller`: `PegHitTest` and `InteractionController`, which turn a
//!   click position into at most one puzzle transition

pub mod geometry;
pub mod layout;
pub mod controller;

pub use geometry::{Point, Rect};
pub use layout::{BoardLayout, LayoutConfig};
pub use controller::{InteractionController, PegHitTest};
