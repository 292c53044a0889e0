//! Viewer tuning, defaulted from [`crate::constants`] and optionally
//! overridden by a JSON block embedded in the page.

use crate::constants::*;
use glam::Vec3;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub focus_duration_ms: u64,
    pub close_duration_ms: u64,
    pub light_reveal_delay_ms: u64,
    pub close_settle_delay_ms: u64,
    pub camera_rig_origin: [f32; 3],
    pub drag_radians_per_px: f32,
    pub ring_metalness: f32,
    pub ring_roughness: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            focus_duration_ms: FOCUS_DURATION_MS,
            close_duration_ms: CLOSE_DURATION_MS,
            light_reveal_delay_ms: LIGHT_REVEAL_DELAY_MS,
            close_settle_delay_ms: CLOSE_SETTLE_DELAY_MS,
            camera_rig_origin: CAMERA_RIG_ORIGIN,
            drag_radians_per_px: DRAG_RADIANS_PER_PX,
            ring_metalness: RING_METALNESS,
            ring_roughness: RING_ROUGHNESS,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drag_radians_per_px.is_finite() && self.drag_radians_per_px > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "drag_radians_per_px",
                value: self.drag_radians_per_px,
            });
        }
        for (field, value) in [
            ("ring_metalness", self.ring_metalness),
            ("ring_roughness", self.ring_roughness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if let Some(bad) = self.camera_rig_origin.iter().find(|v| !v.is_finite()) {
            return Err(ConfigError::OutOfRange {
                field: "camera_rig_origin",
                value: *bad,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn focus_duration(&self) -> Duration {
        Duration::from_millis(self.focus_duration_ms)
    }

    #[inline]
    pub fn close_duration(&self) -> Duration {
        Duration::from_millis(self.close_duration_ms)
    }

    #[inline]
    pub fn light_reveal_delay(&self) -> Duration {
        Duration::from_millis(self.light_reveal_delay_ms)
    }

    #[inline]
    pub fn close_settle_delay(&self) -> Duration {
        Duration::from_millis(self.close_settle_delay_ms)
    }

    #[inline]
    pub fn camera_rig_origin(&self) -> Vec3 {
        vec3(self.camera_rig_origin)
    }
}
