use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_DRAG_TIME_THRESHOLD_MS,
    DEFAULT_MOVE_THRESHOLD_PX, DEFAULT_PICK_RADIUS_PX,
};
use crate::error::{Result, SyseditError};
use crate::geometry::Size;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl EditorConfig {
    /// Reject values that would make click classification or picking meaningless.
    pub fn validate(&self) -> Result<()> {
        let i = &self.interaction;
        if i.drag_time_threshold_ms == 0 {
            return Err(SyseditError::InvalidConfig(
                "drag_time_threshold_ms must be positive".into(),
            ));
        }
        if !(i.move_threshold_px > 0.0) {
            return Err(SyseditError::InvalidConfig(format!(
                "move_threshold_px must be positive, got {}",
                i.move_threshold_px
            )));
        }
        if !(i.pick_radius_px > 0.0) {
            return Err(SyseditError::InvalidConfig(format!(
                "pick_radius_px must be positive, got {}",
                i.pick_radius_px
            )));
        }
        if self.display.width == 0 || self.display.height == 0 {
            return Err(SyseditError::InvalidConfig(format!(
                "display size must be non-zero, got {}x{}",
                self.display.width, self.display.height
            )));
        }
        Ok(())
    }
}

/// Thresholds that turn raw pointer input into gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Releases sooner than this after the press are "quick".
    pub drag_time_threshold_ms: u64,
    /// Releases with less accumulated movement than this are clicks.
    pub move_threshold_px: f64,
    /// Click distance (screen px) within which an object is picked.
    pub pick_radius_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_time_threshold_ms: DEFAULT_DRAG_TIME_THRESHOLD_MS,
            move_threshold_px: DEFAULT_MOVE_THRESHOLD_PX,
            pick_radius_px: DEFAULT_PICK_RADIUS_PX,
        }
    }
}

/// Fixed display dimensions of the host view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl DisplayConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}
