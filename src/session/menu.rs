//! Disk-count selection menu.

use serde::{Deserialize, Serialize};

use crate::interaction::{Point, Rect};

/// One menu button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuButton {
    /// Click region.
    pub rect: Rect,
    /// Disk count this button starts a game with.
    pub disk_count: usize,
}

impl MenuButton {
    /// Button caption, e.g. "5 Disks".
    #[must_use]
    pub fn label(&self) -> String {
        if self.disk_count == 1 {
            "1 Disk".to_string()
        } else {
            format!("{} Disks", self.disk_count)
        }
    }
}

/// Stacked column of disk-count buttons.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    buttons: Vec<MenuButton>,
}

impl Menu {
    /// Lay out one button per preset, top to bottom, centred on `center_x`.
    #[must_use]
    pub fn new(presets: &[usize], center_x: i32, top: i32, size: (i32, i32), spacing: i32) -> Self {
        let (width, height) = size;
        let buttons = presets
            .iter()
            .enumerate()
            .map(|(i, &disk_count)| MenuButton {
                rect: Rect::new(center_x - width / 2, top + spacing * i as i32, width, height),
                disk_count,
            })
            .collect();

        Self { buttons }
    }

    /// All buttons, top to bottom.
    #[must_use]
    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// Disk count of the button under `point`, if any.
    #[must_use]
    pub fn disk_count_at(&self, point: Point) -> Option<usize> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(point))
            .map(|b| b.disk_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::new(&[3, 5, 8], 400, 200, (200, 60), 80)
    }

    #[test]
    fn test_button_layout() {
        let menu = menu();
        let rects: Vec<_> = menu.buttons().iter().map(|b| b.rect).collect();

        assert_eq!(
            rects,
            vec![
                Rect::new(300, 200, 200, 60),
                Rect::new(300, 280, 200, 60),
                Rect::new(300, 360, 200, 60),
            ]
        );
    }

    #[test]
    fn test_disk_count_at() {
        let menu = menu();

        assert_eq!(menu.disk_count_at(Point::new(400, 230)), Some(3));
        assert_eq!(menu.disk_count_at(Point::new(300, 280)), Some(5));
        assert_eq!(menu.disk_count_at(Point::new(499, 419)), Some(8));
        assert_eq!(menu.disk_count_at(Point::new(400, 265)), None); // gap between buttons
        assert_eq!(menu.disk_count_at(Point::new(100, 230)), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = menu().buttons().iter().map(MenuButton::label).collect();
        assert_eq!(labels, vec!["3 Disks", "5 Disks", "8 Disks"]);

        let single = Menu::new(&[1], 0, 0, (10, 10), 10);
        assert_eq!(single.buttons()[0].label(), "1 Disk");
    }
}
