//! Board geometry: where pegs, bases and disks sit on screen.
//!
//! The presentation layer draws from these rectangles and the interaction
//! controller hit-tests clicks against the peg regions, so both agree on
//! where a peg is.
//!
//! ## Layout
//!
//! - Pegs stand at 1/4, 1/2 and 3/4 of the board width.
//! - The base line sits `base_margin` pixels above the bottom edge.
//! - Poles are tall enough for every disk plus one spare slot.
//! - A peg's click region spans the full base width and pole height.

use serde::{Deserialize, Serialize};

use super::controller::PegHitTest;
use super::geometry::{Point, Rect};
use crate::core::{Disk, PegId, PuzzleConfig, PuzzleError, PEG_COUNT};

/// Board dimensions in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Board width.
    pub board_width: i32,

    /// Board height.
    pub board_height: i32,

    /// Pole thickness.
    pub pole_width: i32,

    /// Height of one disk.
    pub disk_height: i32,

    /// Height of the base slab under each pole.
    pub base_height: i32,

    /// Width of the base slab, which is also the click region width.
    pub base_width: i32,

    /// Width added across all ranks; the largest disk is `max + min` wide.
    pub max_disk_width: f32,

    /// Width of a rank -1 disk; every disk is at least this wide.
    pub min_disk_width: f32,

    /// Distance from the bottom edge to the base line.
    pub base_margin: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 600,
            pole_width: 20,
            disk_height: 30,
            base_height: 20,
            base_width: 200,
            max_disk_width: 180.0,
            min_disk_width: 20.0,
            base_margin: 100,
        }
    }
}

impl LayoutConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, width: i32, height: i32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the disk height.
    #[must_use]
    pub fn with_disk_height(mut self, height: i32) -> Self {
        self.disk_height = height;
        self
    }
}

/// Resolved geometry for a puzzle of a given disk count.
///
/// Pixel arithmetic saturates, so extreme board sizes clamp rather than wrap.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    config: LayoutConfig,
    disk_count: usize,
    pole_height: i32,
    regions: [Rect; PEG_COUNT],
}

impl BoardLayout {
    /// Compute the layout for `disk_count` disks.
    ///
    /// Fails with `InvalidDiskCount` unless `disk_count` is in `1..=MAX_DISKS`.
    pub fn new(config: LayoutConfig, disk_count: usize) -> Result<Self, PuzzleError> {
        PuzzleConfig::new(disk_count).validate()?;

        // One spare slot above the tallest stack
        let slots = disk_count as i32 + 1;
        let pole_height = slots
            .saturating_mul(config.disk_height)
            .saturating_add(config.base_height);
        let base_y = config.board_height.saturating_sub(config.base_margin);
        let regions = [PegId::LEFT, PegId::MIDDLE, PegId::RIGHT].map(|peg| {
            Rect::new(
                Self::center_x(&config, peg).saturating_sub(config.base_width / 2),
                base_y.saturating_sub(pole_height),
                config.base_width,
                pole_height,
            )
        });

        Ok(Self {
            config,
            disk_count,
            pole_height,
            regions,
        })
    }

    fn center_x(config: &LayoutConfig, peg: PegId) -> i32 {
        // At most 3/4 of the board width, so the result fits back in an i32
        (i64::from(config.board_width) * (peg.index() as i64 + 1) / 4) as i32
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Disk count this layout was sized for.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Horizontal centre of a peg.
    #[must_use]
    pub fn peg_center_x(&self, peg: PegId) -> i32 {
        Self::center_x(&self.config, peg)
    }

    /// Y coordinate of the base line (bottom of every pole).
    #[must_use]
    pub fn base_y(&self) -> i32 {
        self.config.board_height.saturating_sub(self.config.base_margin)
    }

    /// Pole height, including the base slab.
    #[must_use]
    pub fn pole_height(&self) -> i32 {
        self.pole_height
    }

    /// Click region for a peg.
    #[must_use]
    pub fn peg_region(&self, peg: PegId) -> Rect {
        self.regions[peg.index()]
    }

    /// All click regions, left to right.
    #[must_use]
    pub fn regions(&self) -> &[Rect; PEG_COUNT] {
        &self.regions
    }

    /// The pole drawn for a peg.
    #[must_use]
    pub fn pole_rect(&self, peg: PegId) -> Rect {
        Rect::new(
            self.peg_center_x(peg).saturating_sub(self.config.pole_width / 2),
            self.base_y().saturating_sub(self.pole_height),
            self.config.pole_width,
            self.pole_height,
        )
    }

    /// The base slab drawn under a peg.
    #[must_use]
    pub fn base_rect(&self, peg: PegId) -> Rect {
        Rect::new(
            self.peg_center_x(peg).saturating_sub(self.config.base_width / 2),
            self.base_y().saturating_sub(self.config.base_height),
            self.config.base_width,
            self.config.base_height,
        )
    }

    /// Pixel width of a disk: `max / n * size + min`, truncated.
    #[must_use]
    pub fn disk_width(&self, disk: Disk) -> i32 {
        let step = self.config.max_disk_width / self.disk_count.max(1) as f32;
        (step * disk.size() as f32 + self.config.min_disk_width) as i32
    }

    /// Rectangle for `disk` resting at `level` (0 = bottom) on `peg`.
    #[must_use]
    pub fn disk_rect(&self, peg: PegId, level: usize, disk: Disk) -> Rect {
        let slots = i32::try_from(level.saturating_add(1)).unwrap_or(i32::MAX);
        let bottom = self
            .base_y()
            .saturating_sub(self.config.base_height)
            .saturating_sub(self.config.disk_height.saturating_mul(slots));
        Rect::from_mid_bottom(
            self.peg_center_x(peg),
            bottom,
            self.disk_width(disk),
            self.config.disk_height,
        )
    }

    /// Rectangle for a lifted disk centred on the pointer.
    #[must_use]
    pub fn floating_disk_rect(&self, pointer: Point, disk: Disk) -> Rect {
        let width = self.disk_width(disk);
        let height = self.config.disk_height;
        Rect::new(
            pointer.x.saturating_sub(width / 2),
            pointer.y.saturating_sub(height / 2),
            width,
            height,
        )
    }
}

impl PegHitTest for BoardLayout {
    fn peg_at(&self, point: Point) -> Option<PegId> {
        self.regions.peg_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_three_disk_layout() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();

        assert_eq!(layout.base_y(), 500);
        assert_eq!(layout.pole_height(), 140);
        assert_eq!(layout.peg_center_x(PegId::LEFT), 200);
        assert_eq!(layout.peg_center_x(PegId::MIDDLE), 400);
        assert_eq!(layout.peg_center_x(PegId::RIGHT), 600);
        assert_eq!(layout.peg_region(PegId::LEFT), Rect::new(100, 360, 200, 140));
        assert_eq!(layout.peg_region(PegId::RIGHT), Rect::new(500, 360, 200, 140));
    }

    #[test]
    fn test_pole_and_base() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();

        assert_eq!(layout.pole_rect(PegId::MIDDLE), Rect::new(390, 360, 20, 140));
        assert_eq!(layout.base_rect(PegId::MIDDLE), Rect::new(300, 480, 200, 20));
    }

    #[test]
    fn test_disk_widths() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();

        assert_eq!(layout.disk_width(Disk::new(0)), 80);
        assert_eq!(layout.disk_width(Disk::new(1)), 140);
        assert_eq!(layout.disk_width(Disk::new(2)), 200);
    }

    #[test]
    fn test_disk_stacking() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();

        let bottom = layout.disk_rect(PegId::LEFT, 0, Disk::new(2));
        let next = layout.disk_rect(PegId::LEFT, 1, Disk::new(1));

        assert_eq!(bottom, Rect::new(100, 420, 200, 30));
        assert_eq!(next.bottom(), bottom.y);
        assert_eq!(next.x + next.width / 2, 200);
    }

    #[test]
    fn test_floating_disk() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();
        let rect = layout.floating_disk_rect(Point::new(300, 100), Disk::new(0));

        assert_eq!(rect, Rect::new(260, 85, 80, 30));
    }

    #[test]
    fn test_pole_grows_with_disks() {
        let small = BoardLayout::new(LayoutConfig::default(), 3).unwrap();
        let large = BoardLayout::new(LayoutConfig::default(), 8).unwrap();

        assert!(large.pole_height() > small.pole_height());
        assert_eq!(large.pole_height(), 290);
    }

    #[test]
    fn test_hit_test() {
        let layout = BoardLayout::new(LayoutConfig::default(), 3).unwrap();

        assert_eq!(layout.peg_at(Point::new(200, 450)), Some(PegId::LEFT));
        assert_eq!(layout.peg_at(Point::new(400, 360)), Some(PegId::MIDDLE));
        assert_eq!(layout.peg_at(Point::new(699, 499)), Some(PegId::RIGHT));
        assert_eq!(layout.peg_at(Point::new(400, 500)), None); // below base line
        assert_eq!(layout.peg_at(Point::new(50, 450)), None);
        assert_eq!(layout.peg_at(Point::new(400, 100)), None);
    }

    #[test]
    fn test_rejects_out_of_range_disk_count() {
        assert_eq!(
            BoardLayout::new(LayoutConfig::default(), 0),
            Err(PuzzleError::InvalidDiskCount(0))
        );
        assert_eq!(
            BoardLayout::new(LayoutConfig::default(), 100_000_000),
            Err(PuzzleError::InvalidDiskCount(100_000_000))
        );
        assert!(BoardLayout::new(LayoutConfig::default(), 64).is_ok());
    }

    #[test]
    fn test_extreme_board_sizes_clamp() {
        let config = LayoutConfig::default()
            .with_board_size(i32::MAX, i32::MIN)
            .with_disk_height(i32::MAX);
        let layout = BoardLayout::new(config, 64).unwrap();

        assert_eq!(layout.pole_height(), i32::MAX);
        assert_eq!(layout.base_y(), i32::MIN);
        assert_eq!(layout.peg_center_x(PegId::RIGHT), (i64::from(i32::MAX) * 3 / 4) as i32);
        assert_eq!(layout.peg_region(PegId::LEFT).y, i32::MIN);
        assert_eq!(layout.disk_rect(PegId::LEFT, usize::MAX, Disk::new(0)).y, i32::MIN);
        assert_eq!(layout.peg_at(Point::new(0, 0)), None);
    }
}
