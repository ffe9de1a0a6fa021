// SPDX-License-Identifier: GPL-3.0-only

//! Named control slots and their grid assignments
//!
//! Controls sit on a fixed five-column grid. Each slot either anchors to
//! the top bar, to the bottom bar, or to a fractional cell of the separate
//! bottom-panel grid. A slot with no grid cell (mute) still exists so it
//! participates in rotation and visibility handling, but is skipped by
//! placement.

use serde::{Deserialize, Serialize};

/// Where a slot is vertically anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotAnchor {
    /// Centered in the top bar at the given column index
    TopBar { column: f32 },
    /// Centered in the bottom bar at the given column index
    BottomBar { column: f32 },
    /// Fractional cell on the 5-wide / 6-tall bottom-panel grid
    BottomPanel { frac_x: f32, frac_y: f32 },
    /// No grid cell; the slot is positioned by the host
    Unanchored,
}

/// The fixed set of on-screen camera controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlSlot {
    SceneMode,
    FilterMode,
    FrontBackSwitch,
    MakeupSwitch,
    Flash,
    Mute,
    PreviewThumb,
    Shutter,
    VideoShutter,
    MakeupSeekBar,
}

impl ControlSlot {
    /// All slots in layout order
    pub const ALL: [ControlSlot; 10] = [
        ControlSlot::SceneMode,
        ControlSlot::FilterMode,
        ControlSlot::FrontBackSwitch,
        ControlSlot::MakeupSwitch,
        ControlSlot::Flash,
        ControlSlot::Mute,
        ControlSlot::PreviewThumb,
        ControlSlot::Shutter,
        ControlSlot::VideoShutter,
        ControlSlot::MakeupSeekBar,
    ];

    /// Grid assignment for this slot.
    ///
    /// Column indices may be fractional for fine offset tuning (the video
    /// shutter sits slightly right of column 3).
    pub fn anchor(self) -> SlotAnchor {
        match self {
            ControlSlot::SceneMode => SlotAnchor::TopBar { column: 0.0 },
            ControlSlot::FilterMode => SlotAnchor::TopBar { column: 1.0 },
            ControlSlot::FrontBackSwitch => SlotAnchor::TopBar { column: 2.0 },
            ControlSlot::MakeupSwitch => SlotAnchor::TopBar { column: 3.0 },
            ControlSlot::Flash => SlotAnchor::TopBar { column: 4.0 },
            ControlSlot::Mute => SlotAnchor::Unanchored,
            ControlSlot::PreviewThumb => SlotAnchor::BottomBar { column: 0.0 },
            ControlSlot::Shutter => SlotAnchor::BottomBar { column: 2.0 },
            ControlSlot::VideoShutter => SlotAnchor::BottomBar { column: 3.15 },
            ControlSlot::MakeupSeekBar => SlotAnchor::BottomPanel {
                frac_x: 0.0,
                frac_y: 1.0,
            },
        }
    }

    /// True for slots whose content is counter-rotated to stay upright
    pub fn rotates(self) -> bool {
        !matches!(self, ControlSlot::MakeupSeekBar)
    }

    /// Display name for diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            ControlSlot::SceneMode => "scene-mode",
            ControlSlot::FilterMode => "filter-mode",
            ControlSlot::FrontBackSwitch => "front-back-switch",
            ControlSlot::MakeupSwitch => "makeup-switch",
            ControlSlot::Flash => "flash",
            ControlSlot::Mute => "mute",
            ControlSlot::PreviewThumb => "preview-thumb",
            ControlSlot::Shutter => "shutter",
            ControlSlot::VideoShutter => "video-shutter",
            ControlSlot::MakeupSeekBar => "makeup-seek-bar",
        }
    }
}
