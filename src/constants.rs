// SPDX-License-Identifier: GPL-3.0-only

//! Layout-wide constants
//!
//! Placement and drawing must agree exactly on these values; the bar
//! thicknesses in particular are the single source of truth for both the
//! translucent background rectangles and the vertical centering of controls.

/// Logical control grid
pub mod grid {
    /// Number of columns controls are distributed over
    pub const WIDTH_GRID: i32 = 5;

    /// Number of rows used for toast anchoring
    pub const HEIGHT_GRID: i32 = 7;

    /// Row count of the separate grid used for bottom-anchored panels
    /// (seek-bar layout), measured up from the bottom bar
    pub const BOTTOM_PANEL_ROWS: i32 = 6;
}

/// Bar geometry and paint defaults
pub mod bars {
    /// Top bar thickness in dp
    pub const TOP_BAR_DP: f32 = 70.0;

    /// Bottom bar thickness in dp
    pub const BOTTOM_BAR_DP: f32 = 100.0;

    /// Translucent bar fill, ARGB
    pub const BAR_COLOR: u32 = 0x4D00_0000;
}

/// Remaining-photos badge thresholds and formatting
pub mod remaining {
    /// Below this count the badge shows "<20 " instead of the exact value
    pub const LOW_REMAINING_PHOTOS: i32 = 20;

    /// At or above this count the badge shows ">1000000"
    pub const HIGH_REMAINING_PHOTOS: i32 = 1_000_000;

    /// Gap between the badge and its anchor control, in dp
    pub const BADGE_MARGIN_DP: f32 = 10.0;
}

/// Refocus toast appearance
pub mod toast {
    /// Toast label text size in sp
    pub const TEXT_SIZE: i32 = 14;

    /// Padding around the toast label in px
    pub const PADDING_SIZE: i32 = 18;

    /// Toast background and arrow fill, ARGB
    pub const BACKGROUND: u32 = 0x8000_0000;
}
