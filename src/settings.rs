//! Render quality settings
//!
//! Gameplay tuning is fixed in [`crate::consts`]; only tessellation detail is
//! configurable, and only at startup.

use serde::{Deserialize, Serialize};

/// Fewest wedges a circle may be built from
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;
/// Fewest trail samples (the palette lookup divides by `steps - 1`)
pub const MIN_TRAIL_STEPS: u32 = 2;

/// Render settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wedges per full circle (360 = one per degree)
    pub circle_segments: u32,
    /// Evenly spaced samples drawn across the trail duration
    pub trail_steps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_segments: 360,
            trail_steps: 20,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load settings from optional JSON, falling back to defaults on any problem
    pub fn load(json: Option<&str>) -> Self {
        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings: {:?}", settings);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Clamp values the scene builder cannot work with
    pub fn sanitized(mut self) -> Self {
        if self.circle_segments < MIN_CIRCLE_SEGMENTS {
            log::warn!(
                "circle_segments {} too small, using {}",
                self.circle_segments,
                MIN_CIRCLE_SEGMENTS
            );
            self.circle_segments = MIN_CIRCLE_SEGMENTS;
        }
        if self.trail_steps < MIN_TRAIL_STEPS {
            log::warn!(
                "trail_steps {} too small, using {}",
                self.trail_steps,
                MIN_TRAIL_STEPS
            );
            self.trail_steps = MIN_TRAIL_STEPS;
        }
        self
    }
}
