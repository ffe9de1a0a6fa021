// SPDX-License-Identifier: GPL-3.0-only

//! Device orientation handling
//!
//! The engine only distinguishes the four cardinal rotations. Sensor values
//! outside that set fall back to [`Orientation::Deg0`], matching the default
//! branch the drawing code has always had.

use serde::{Deserialize, Serialize};

/// Device rotation relative to the natural (portrait) orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Natural orientation, bars at the top and bottom of the viewport
    #[default]
    Deg0,
    /// Rotated 90° counter-clockwise, bars at the left and right
    Deg90,
    /// Upside down
    Deg180,
    /// Rotated 270° counter-clockwise
    Deg270,
}

impl Orientation {
    /// All variants for iteration
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Map a rotation in degrees to an orientation.
    ///
    /// Values outside {0, 90, 180, 270} fall back to `Deg0` rather than
    /// failing; intermediate sensor angles are not interpolated.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => Orientation::Deg90,
            180 => Orientation::Deg180,
            270 => Orientation::Deg270,
            _ => Orientation::Deg0,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> i32 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// True for the two landscape rotations where the bar axis is swapped
    pub const fn is_sideways(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }

    /// Counter-rotation applied to controls so their content stays upright
    pub const fn control_rotation(self) -> i32 {
        -self.degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_cardinal() {
        assert_eq!(Orientation::from_degrees(0), Orientation::Deg0);
        assert_eq!(Orientation::from_degrees(90), Orientation::Deg90);
        assert_eq!(Orientation::from_degrees(180), Orientation::Deg180);
        assert_eq!(Orientation::from_degrees(270), Orientation::Deg270);
    }

    #[test]
    fn test_from_degrees_fallback() {
        // Non-cardinal angles use the 0° rules
        assert_eq!(Orientation::from_degrees(45), Orientation::Deg0);
        assert_eq!(Orientation::from_degrees(135), Orientation::Deg0);
        assert_eq!(Orientation::from_degrees(359), Orientation::Deg0);
    }

    #[test]
    fn test_from_degrees_wraps() {
        assert_eq!(Orientation::from_degrees(360), Orientation::Deg0);
        assert_eq!(Orientation::from_degrees(450), Orientation::Deg90);
        assert_eq!(Orientation::from_degrees(-90), Orientation::Deg270);
    }

    #[test]
    fn test_control_rotation_counteracts() {
        for o in Orientation::ALL {
            assert_eq!((o.degrees() + o.control_rotation()).rem_euclid(360), 0);
        }
    }

    #[test]
    fn test_sideways() {
        assert!(!Orientation::Deg0.is_sideways());
        assert!(Orientation::Deg90.is_sideways());
        assert!(!Orientation::Deg180.is_sideways());
        assert!(Orientation::Deg270.is_sideways());
    }
}
