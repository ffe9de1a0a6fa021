// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder control layout engine for camera applications
//!
//! This library computes placement geometry for a camera app's on-screen
//! controls: the translucent bars behind them, the fixed-grid positions of
//! shutter/flash/switcher buttons, and the transient overlays (refocus
//! toast with pointer arrow, remaining-photos badge). It holds no toolkit
//! types; the host UI calls it each layout/draw pass with live viewport
//! dimensions and device orientation and receives plain rectangles back.
//!
//! # Architecture
//!
//! - [`layout`]: the [`ControlLayoutEngine`] plus slot, toast, and badge
//!   geometry
//! - [`geometry`]: pixel-space points, sizes, and rectangles
//! - [`orientation`]: the four cardinal device rotations
//! - [`config`]: tunable bar thicknesses and density scaling
//! - [`storage`]: free-space estimates feeding the badge
//!
//! # Example
//!
//! ```
//! use camera_controls::{ControlLayoutEngine, ControlSlot, Orientation, Size};
//!
//! let mut engine = ControlLayoutEngine::default();
//! engine.set_viewport(Size::new(1080, 1920));
//! engine.set_orientation(Orientation::Deg0);
//!
//! let (top_bar, bottom_bar) = engine.bar_bounds();
//! assert_eq!(top_bar.height, 70);
//! assert_eq!(bottom_bar.height, 100);
//!
//! let shutter = engine
//!     .slot_position(ControlSlot::Shutter, Size::new(64, 64))
//!     .unwrap();
//! assert!(bottom_bar.contains(shutter.x, shutter.y));
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod orientation;
pub mod storage;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use errors::{ControlsError, ControlsResult};
pub use geometry::{Point, Rect, Size};
pub use layout::{
    BadgePlacement, ControlLayoutEngine, ControlSlot, SlotAnchor, SlotPlacement, ToastPlacement,
};
pub use orientation::Orientation;
