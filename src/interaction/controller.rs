//! Pointer-to-peg dispatch.
//!
//! The controller owns no puzzle rules. It resolves a click position to a peg
//! through a `PegHitTest` and forwards exactly one `on_peg_clicked` call, or
//! none when the click misses every peg.

use tracing::trace;

use super::geometry::{Point, Rect};
use crate::core::{ClickOutcome, PegId, PuzzleError, PuzzleState, PEG_COUNT};

/// Resolves a pointer position to a peg.
pub trait PegHitTest {
    /// The peg whose region contains `point`, or `None`.
    ///
    /// When regions overlap the lowest peg index wins.
    fn peg_at(&self, point: Point) -> Option<PegId>;
}

impl PegHitTest for [Rect; PEG_COUNT] {
    fn peg_at(&self, point: Point) -> Option<PegId> {
        PegId::all().find(|peg| self[peg.index()].contains(point))
    }
}

impl<H: PegHitTest + ?Sized> PegHitTest for &H {
    fn peg_at(&self, point: Point) -> Option<PegId> {
        (**self).peg_at(point)
    }
}

/// Translates raw clicks into puzzle transitions.
///
/// ## Usage
///
/// ```
/// use rust_hanoi::core::{PegId, PuzzleState};
/// use rust_hanoi::interaction::{BoardLayout, InteractionController, LayoutConfig, Point};
///
/// let mut puzzle = PuzzleState::with_disks(3).unwrap();
/// let controller = InteractionController::new(BoardLayout::new(LayoutConfig::default(), 3).unwrap());
///
/// // Click on the left peg lifts its top disk
/// let outcome = controller.on_click(&mut puzzle, Point::new(200, 450)).unwrap();
/// assert!(outcome.is_some());
/// assert_eq!(puzzle.in_hand().map(|(peg, _)| peg), Some(PegId::LEFT));
///
/// // Click on empty sky does nothing
/// assert_eq!(controller.on_click(&mut puzzle, Point::new(400, 20)).unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct InteractionController<H: PegHitTest> {
    hit_test: H,
}

impl<H: PegHitTest> InteractionController<H> {
    /// Create a controller over the given peg regions.
    #[must_use]
    pub fn new(hit_test: H) -> Self {
        Self { hit_test }
    }

    /// Get the hit test in use.
    #[must_use]
    pub fn hit_test(&self) -> &H {
        &self.hit_test
    }

    /// Replace the peg regions (e.g. after the disk count changes).
    pub fn set_hit_test(&mut self, hit_test: H) {
        self.hit_test = hit_test;
    }

    /// Resolve a click and forward it to the puzzle.
    ///
    /// Returns `Ok(None)` without touching the puzzle when no peg was hit.
    pub fn on_click(
        &self,
        puzzle: &mut PuzzleState,
        point: Point,
    ) -> Result<Option<ClickOutcome>, PuzzleError> {
        match self.hit_test.peg_at(point) {
            Some(peg) => puzzle.on_peg_clicked(peg).map(Some),
            None => {
                trace!(x = point.x, y = point.y, "click missed every peg");
                Ok(None)
            }
        }
    }
}
