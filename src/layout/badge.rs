// SPDX-License-Identifier: GPL-3.0-only

//! Remaining-photos badge: count formatting, visibility, and placement

use crate::constants::remaining::{HIGH_REMAINING_PHOTOS, LOW_REMAINING_PHOTOS};
use crate::geometry::{Rect, Size};
use crate::orientation::Orientation;
use crate::storage;

/// Badge geometry for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePlacement {
    /// Bounding rectangle of the badge
    pub rect: Rect,
    /// Counter-rotation in degrees so the text stays upright
    pub rotation: i32,
}

/// Format a remaining-shot count for the badge label.
///
/// Exact values are only shown between the low and high thresholds; the
/// trailing space on the low/exact forms keeps the text clear of the badge
/// icon.
pub fn format_remaining(count: i32) -> String {
    if count < LOW_REMAINING_PHOTOS {
        format!("<{} ", LOW_REMAINING_PHOTOS)
    } else if count >= HIGH_REMAINING_PHOTOS {
        format!(">{}", HIGH_REMAINING_PHOTOS)
    } else {
        format!("{} ", count)
    }
}

/// Decide whether the badge should be shown.
///
/// An unknown count (negative) with no usable storage means there is
/// nothing meaningful to display. `suppressed` is the host's explicit
/// hide switch.
pub fn badge_visible(count: i32, available_bytes: i64, suppressed: bool) -> bool {
    if suppressed {
        return false;
    }
    !(count < 0 && storage::usable_space(available_bytes) <= 0)
}

/// Center the badge on its anchor control, lifted by `margin` pixels.
///
/// At 90/270 the badge is additionally shifted up by half its width so the
/// counter-rotated text clears the bar edge. The rectangle is clamped so
/// its left edge never leaves the screen.
pub fn badge_placement(
    anchor: Rect,
    badge: Size,
    orientation: Orientation,
    margin: i32,
) -> BadgePlacement {
    let w = badge.width;
    let h = badge.height;

    let hc = anchor.center_x();
    let mut vc = anchor.center_y() - margin;
    if orientation.is_sideways() {
        vc -= w / 2;
    }

    let rect = if hc < w / 2 {
        Rect::from_edges(0, vc - h / 2, w, vc + h / 2)
    } else {
        Rect::from_edges(hc - w / 2, vc - h / 2, hc + w / 2, vc + h / 2)
    };

    BadgePlacement {
        rect,
        rotation: orientation.control_rotation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LOW_STORAGE_THRESHOLD_BYTES;

    #[test]
    fn test_format_thresholds() {
        assert_eq!(format_remaining(19), "<20 ");
        assert_eq!(format_remaining(20), "20 ");
        assert_eq!(format_remaining(999_999), "999999 ");
        assert_eq!(format_remaining(1_000_000), ">1000000");
    }

    #[test]
    fn test_format_negative_counts_as_low() {
        assert_eq!(format_remaining(-1), "<20 ");
    }

    #[test]
    fn test_visibility_truth_table() {
        let plenty = LOW_STORAGE_THRESHOLD_BYTES * 2;
        // Known count: always visible unless suppressed
        assert!(badge_visible(100, 0, false));
        // Unknown count but storage left: visible
        assert!(badge_visible(-1, plenty, false));
        // Unknown count and no storage: hidden
        assert!(!badge_visible(-1, 0, false));
        // Suppression wins regardless
        assert!(!badge_visible(100, plenty, true));
    }

    #[test]
    fn test_placement_centers_on_anchor() {
        let anchor = Rect::new(400, 1700, 100, 100);
        let badge = Size::new(80, 40);
        let p = badge_placement(anchor, badge, Orientation::Deg0, 10);
        assert_eq!(p.rect.center_x(), anchor.center_x());
        assert_eq!(p.rect.center_y(), anchor.center_y() - 10);
        assert_eq!(p.rotation, 0);
    }

    #[test]
    fn test_placement_clamps_left_edge() {
        // Anchor hugging the left edge: badge must not go off-screen
        let anchor = Rect::new(0, 1700, 40, 40);
        let badge = Size::new(120, 40);
        let p = badge_placement(anchor, badge, Orientation::Deg0, 10);
        assert_eq!(p.rect.left(), 0);
        assert_eq!(p.rect.width, badge.width);
    }

    #[test]
    fn test_sideways_shift() {
        let anchor = Rect::new(400, 1700, 100, 100);
        let badge = Size::new(80, 40);
        let upright = badge_placement(anchor, badge, Orientation::Deg0, 10);
        let sideways = badge_placement(anchor, badge, Orientation::Deg90, 10);
        // Shifted up by half the badge width at 90 degrees
        assert_eq!(
            sideways.rect.center_y(),
            upright.rect.center_y() - badge.width / 2
        );
        assert_eq!(sideways.rotation, -90);
    }
}
