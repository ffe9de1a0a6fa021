// SPDX-License-Identifier: GPL-3.0-only

//! Layout configuration
//!
//! Bar thicknesses and margins are stored in dp and scaled to physical
//! pixels through the display density supplied by the host. The config can
//! be persisted as JSON under the user config directory so a host
//! application can tune the control chrome without rebuilding.

use crate::constants::{bars, remaining};
use crate::errors::{ControlsError, ControlsResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Config file name inside the per-app config directory
const CONFIG_FILE: &str = "controls-layout.json";

/// Tunable layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Top bar thickness in dp
    pub top_bar_dp: f32,
    /// Bottom bar thickness in dp
    pub bottom_bar_dp: f32,
    /// Display density (physical pixels per dp)
    pub density: f32,
    /// Gap between the remaining-photos badge and its anchor, in dp
    pub badge_margin_dp: f32,
    /// Suppress the remaining-photos badge entirely
    pub hide_remaining_badge: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_bar_dp: bars::TOP_BAR_DP,
            bottom_bar_dp: bars::BOTTOM_BAR_DP,
            density: 1.0,
            badge_margin_dp: remaining::BADGE_MARGIN_DP,
            hide_remaining_badge: false,
        }
    }
}

impl LayoutConfig {
    /// Build a config for a given display density
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Top bar thickness in physical pixels
    pub fn top_bar_px(&self) -> i32 {
        dp_to_px(self.top_bar_dp, self.density)
    }

    /// Bottom bar thickness in physical pixels
    pub fn bottom_bar_px(&self) -> i32 {
        dp_to_px(self.bottom_bar_dp, self.density)
    }

    /// Badge margin in physical pixels
    pub fn badge_margin_px(&self) -> i32 {
        dp_to_px(self.badge_margin_dp, self.density)
    }

    /// Default config file path (`$XDG_CONFIG_HOME/camera-controls/controls-layout.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("camera-controls").join(CONFIG_FILE))
    }

    /// Load the config from the default path, falling back to defaults when
    /// the file does not exist or cannot be parsed
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("No config directory available, using layout defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Using layout defaults");
                Self::default()
            }
        }
    }

    /// Load the config from an explicit path
    pub fn load_from(path: &std::path::Path) -> ControlsResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> ControlsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        debug!(path = %path.display(), "Saved layout config");
        Ok(())
    }

    /// Reject parameter combinations the geometry cannot work with
    pub fn validate(&self) -> ControlsResult<()> {
        if self.density <= 0.0 {
            return Err(ControlsError::Config(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if self.top_bar_dp < 0.0 || self.bottom_bar_dp < 0.0 {
            return Err(ControlsError::Config(
                "bar thickness must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Convert a dp measurement to physical pixels, truncating like the
/// platform dimension conversion does
pub fn dp_to_px(dp: f32, density: f32) -> i32 {
    (dp * density) as i32
}
