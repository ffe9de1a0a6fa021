// SPDX-License-Identifier: GPL-3.0-only

//! Control layout engine
//!
//! This module computes where every on-screen camera control goes:
//! - [`slots`]: the named controls and their grid assignments
//! - [`toast`]: refocus toast rectangle and pointer arrow
//! - [`badge`]: remaining-photos badge text, visibility, and placement
//!
//! [`ControlLayoutEngine`] caches the live viewport, orientation, and
//! remaining-shot count pushed in by the host; every query is a pure
//! function of that cached state. The host calls it once per layout/draw
//! pass and feeds the resulting rectangles to its own positioning and
//! drawing APIs.

pub mod badge;
pub mod slots;
pub mod toast;

pub use badge::BadgePlacement;
pub use slots::{ControlSlot, SlotAnchor};
pub use toast::ToastPlacement;

use crate::config::LayoutConfig;
use crate::constants::{bars, grid};
use crate::geometry::{Point, Rect, Size};
use crate::orientation::Orientation;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Computed geometry for one control slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlacement {
    pub slot: ControlSlot,
    pub rect: Rect,
    /// Counter-rotation in degrees, zero for non-rotating slots
    pub rotation: i32,
    /// False while the whole control chrome is hidden
    pub visible: bool,
}

/// Layout engine for the viewfinder control chrome.
///
/// State is limited to what the host pushes in: viewport, orientation,
/// visibility switches, and the latest remaining-shot count. Everything
/// else is recomputed on demand.
#[derive(Debug, Clone)]
pub struct ControlLayoutEngine {
    config: LayoutConfig,
    top_px: i32,
    bottom_px: i32,
    viewport: Size,
    orientation: Orientation,
    visible: bool,
    toast_visible: bool,
    current_remaining: i32,
    available_bytes: i64,
    disabled: HashSet<ControlSlot>,
}

impl ControlLayoutEngine {
    /// Create an engine with the given configuration.
    ///
    /// Bar thicknesses are resolved to pixels once here; placement and bar
    /// drawing both read the resolved values so they cannot disagree.
    pub fn new(config: LayoutConfig) -> Self {
        let top_px = config.top_bar_px();
        let bottom_px = config.bottom_bar_px();
        Self {
            config,
            top_px,
            bottom_px,
            viewport: Size::default(),
            orientation: Orientation::default(),
            visible: true,
            toast_visible: false,
            current_remaining: -1,
            available_bytes: 0,
            disabled: HashSet::new(),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Cache the container dimensions for this layout pass
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport.is_empty() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "Degenerate viewport, all placements will be zero"
            );
        }
        if viewport != self.viewport {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "Viewport changed"
            );
            self.viewport = viewport;
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Convenience wrapper accepting raw degrees from a rotation sensor
    pub fn set_rotation_degrees(&mut self, degrees: i32) {
        self.orientation = Orientation::from_degrees(degrees);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Counter-rotation controls apply so their content stays upright
    pub fn control_rotation(&self) -> i32 {
        self.orientation.control_rotation()
    }

    /// Enable or disable a slot (e.g. the makeup switcher when the
    /// beautification filter is unsupported). Disabled slots are skipped by
    /// all placement queries.
    pub fn set_slot_enabled(&mut self, slot: ControlSlot, enabled: bool) {
        if enabled {
            self.disabled.remove(&slot);
        } else {
            debug!(slot = slot.display_name(), "Slot disabled");
            self.disabled.insert(slot);
        }
    }

    pub fn is_slot_enabled(&self, slot: ControlSlot) -> bool {
        !self.disabled.contains(&slot)
    }

    /// Hide the whole control chrome (bars and controls)
    pub fn hide_ui(&mut self) {
        self.visible = false;
    }

    /// Restore the control chrome
    pub fn show_ui(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The two translucent bar rectangles for the current viewport and
    /// orientation. The bars always sit on the physical top/bottom of the
    /// device, so the rectangles move to the viewport's left/right edges at
    /// 90/270. Empty while hidden or with a degenerate viewport.
    pub fn bar_bounds(&self) -> (Rect, Rect) {
        if !self.visible || self.viewport.is_empty() {
            return (Rect::ZERO, Rect::ZERO);
        }
        let w = self.viewport.width;
        let h = self.viewport.height;
        let top = self.top_px;
        let bottom = self.bottom_px;
        match self.orientation {
            Orientation::Deg90 => (
                Rect::new(0, 0, top, h),
                Rect::new(w - bottom, 0, bottom, h),
            ),
            Orientation::Deg180 => (
                Rect::new(0, 0, w, bottom),
                Rect::new(0, h - top, w, top),
            ),
            Orientation::Deg270 => (
                Rect::new(0, 0, bottom, h),
                Rect::new(w - top, 0, top, h),
            ),
            Orientation::Deg0 => (
                Rect::new(0, 0, w, top),
                Rect::new(0, h - bottom, w, bottom),
            ),
        }
    }

    /// ARGB fill for the bar rectangles
    pub fn bar_color(&self) -> u32 {
        bars::BAR_COLOR
    }

    /// Whether a touch point lies inside either bar region. With no bars
    /// on screen (degenerate viewport) nothing is a control hit.
    pub fn is_control_region(&self, _x: i32, y: i32) -> bool {
        if self.viewport.is_empty() {
            return false;
        }
        y <= self.top_px || y >= self.viewport.height - self.bottom_px
    }

    /// Top-left position for a control of `size` in its grid slot.
    ///
    /// Returns `None` for disabled slots, slots without a grid cell, or a
    /// degenerate viewport.
    pub fn slot_position(&self, slot: ControlSlot, size: Size) -> Option<Point> {
        if !self.is_slot_enabled(slot) || self.viewport.is_empty() {
            return None;
        }
        match slot.anchor() {
            SlotAnchor::TopBar { column } => Some(Point::new(
                self.column_x(column, size.width),
                (self.top_px - size.height) / 2,
            )),
            SlotAnchor::BottomBar { column } => Some(Point::new(
                self.column_x(column, size.width),
                self.bottom_center_y(size.height),
            )),
            SlotAnchor::BottomPanel { frac_x, frac_y } => {
                Some(self.custom_bottom_position(size, frac_x, frac_y))
            }
            SlotAnchor::Unanchored => None,
        }
    }

    /// Full placement (rect, rotation, visibility) for one slot
    pub fn slot_placement(&self, slot: ControlSlot, size: Size) -> Option<SlotPlacement> {
        let pos = self.slot_position(slot, size)?;
        Some(SlotPlacement {
            slot,
            rect: Rect::new(pos.x, pos.y, size.width, size.height),
            rotation: if slot.rotates() {
                self.control_rotation()
            } else {
                0
            },
            visible: self.visible,
        })
    }

    /// Place every enabled slot, measuring each control through `measure`.
    /// Slots without a grid cell are skipped.
    pub fn layout_slots<F>(&self, measure: F) -> Vec<SlotPlacement>
    where
        F: Fn(ControlSlot) -> Size,
    {
        ControlSlot::ALL
            .iter()
            .filter_map(|&slot| self.slot_placement(slot, measure(slot)))
            .collect()
    }

    /// Place a panel at fractional coordinates of the bottom-panel grid
    /// (5 columns, 6 rows measured up from the bottom bar's center line)
    pub fn custom_bottom_position(&self, size: Size, frac_x: f32, frac_y: f32) -> Point {
        if self.viewport.is_empty() {
            return Point::default();
        }
        let col_w = self.viewport.width / grid::WIDTH_GRID;
        let row_h = self.viewport.height / grid::BOTTOM_PANEL_ROWS;
        let x = (col_w as f32 * frac_x) as i32;
        let y = self.bottom_center_y(size.height) - (row_h as f32 * frac_y) as i32;
        Point::new(x, y)
    }

    /// Minimum width the seek-bar panel should stretch to
    pub fn seek_bar_min_width(&self) -> i32 {
        self.viewport.width / 2
    }

    /// Refocus toast rectangle and pointer arrow, `None` while the viewport
    /// is degenerate
    pub fn toast_placement(&self, toast_size: Size) -> Option<ToastPlacement> {
        if self.viewport.is_empty() {
            return None;
        }
        Some(toast::toast_placement(
            self.viewport,
            toast_size,
            self.orientation,
        ))
    }

    /// Show or hide the refocus toast. While the toast is up, a badge
    /// displaying a positive count is suppressed so the two overlays do not
    /// fight for attention.
    pub fn show_refocus_toast(&mut self, show: bool) {
        self.toast_visible = show;
    }

    pub fn is_toast_visible(&self) -> bool {
        self.toast_visible
    }

    /// Push the latest remaining-shot count and free-space reading
    pub fn update_remaining(&mut self, remaining: i32, available_bytes: i64) {
        self.current_remaining = remaining;
        self.available_bytes = available_bytes;
    }

    pub fn current_remaining(&self) -> i32 {
        self.current_remaining
    }

    /// Whether the badge should currently be drawn
    pub fn badge_visible(&self) -> bool {
        if self.toast_visible && self.current_remaining > 0 {
            return false;
        }
        badge::badge_visible(
            self.current_remaining,
            self.available_bytes,
            self.config.hide_remaining_badge,
        )
    }

    /// Badge label text, `None` while the badge is hidden
    pub fn badge_text(&self) -> Option<String> {
        if !self.badge_visible() {
            return None;
        }
        Some(badge::format_remaining(self.current_remaining))
    }

    /// Badge rectangle and rotation, centered on `anchor` (normally the
    /// preview thumbnail's placement)
    pub fn badge_placement(&self, anchor: Rect, badge_size: Size) -> BadgePlacement {
        badge::badge_placement(
            anchor,
            badge_size,
            self.orientation,
            self.config.badge_margin_px(),
        )
    }

    /// Horizontal top-left for a control of width `w` centered in a
    /// (possibly fractional) column of the 5-wide grid
    fn column_x(&self, column: f32, w: i32) -> i32 {
        let col_w = self.viewport.width / grid::WIDTH_GRID;
        (col_w as f32 * column) as i32 + (col_w - w) / 2
    }

    /// Vertical top-left for a control of height `h` centered in the
    /// bottom bar
    fn bottom_center_y(&self, h: i32) -> i32 {
        self.viewport.height - self.bottom_px + (self.bottom_px - h) / 2
    }
}

impl Default for ControlLayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
