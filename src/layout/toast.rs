// SPDX-License-Identifier: GPL-3.0-only

//! Refocus toast placement
//!
//! The toast is a small label with a triangular pointer arrow. Each
//! orientation has its own hardcoded anchor cell on the 5x7 grid, and the
//! arrow points toward the focus area, so both the bounding rectangle and
//! the triangle vertices change per orientation.

use crate::constants::grid::{HEIGHT_GRID, WIDTH_GRID};
use crate::geometry::{Point, Rect, Size};
use crate::orientation::Orientation;

/// Toast geometry for one layout pass
///
/// The arrow vertices are relative to the toast rectangle's origin and may
/// extend outside it (that is the point of the arrow).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastPlacement {
    /// Bounding rectangle of the toast label
    pub rect: Rect,
    /// Pointer triangle, relative to `rect`'s top-left corner
    pub arrow: [Point; 3],
}

/// Place the toast for the given viewport and orientation.
///
/// Grid cells are computed with integer division first, matching the way
/// the bar placement divides the viewport.
pub fn toast_placement(viewport: Size, toast: Size, orientation: Orientation) -> ToastPlacement {
    let w = viewport.width;
    let h = viewport.height;
    let tw = toast.width;
    let th = toast.height;

    let (left, top, arrow) = match orientation {
        Orientation::Deg90 => {
            let center = ((h / WIDTH_GRID) as f32 * (WIDTH_GRID as f32 - 0.5)) as i32;
            let right = ((w / HEIGHT_GRID) as f32 * (HEIGHT_GRID as f32 - 1.25)) as i32;
            (
                right - tw,
                center - th / 2,
                [
                    Point::new(tw, th / 2),
                    Point::new(tw + th / 2, th),
                    Point::new(tw, th),
                ],
            )
        }
        Orientation::Deg180 => {
            let top = ((h / HEIGHT_GRID) as f32 * 1.25) as i32;
            let right = ((w / WIDTH_GRID) as f32 * (WIDTH_GRID as f32 - 0.25)) as i32;
            (
                right - tw,
                top,
                [
                    Point::new(tw - th / 2, 0),
                    Point::new(tw, 0),
                    Point::new(tw, -th / 2),
                ],
            )
        }
        Orientation::Deg270 => {
            let center = ((h / WIDTH_GRID) as f32 * 0.5) as i32;
            let left = ((w / HEIGHT_GRID) as f32 * 1.25) as i32;
            (
                left,
                center - th / 2,
                [
                    Point::new(0, 0),
                    Point::new(0, th / 2),
                    Point::new(-th / 2, 0),
                ],
            )
        }
        Orientation::Deg0 => {
            let left = w / WIDTH_GRID / 4;
            let bottom = ((h / HEIGHT_GRID) as f32 * (HEIGHT_GRID as f32 - 1.25)) as i32;
            (
                left,
                bottom - th,
                [
                    Point::new(0, th),
                    Point::new(th / 2, th),
                    Point::new(0, th * 3 / 2),
                ],
            )
        }
    };

    ToastPlacement {
        rect: Rect::new(left, top, tw, th),
        arrow,
    }
}

/// Twice the signed area of the arrow triangle; zero means degenerate
fn arrow_area2(arrow: &[Point; 3]) -> i64 {
    let [a, b, c] = arrow;
    (b.x - a.x) as i64 * (c.y - a.y) as i64 - (b.y - a.y) as i64 * (c.x - a.x) as i64
}

impl ToastPlacement {
    /// True when the arrow triangle has nonzero area
    pub fn arrow_is_valid(&self) -> bool {
        arrow_area2(&self.arrow) != 0
    }
}
