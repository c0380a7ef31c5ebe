//! Viewer tuning parameters.
//!
//! Defaults come from `constants.rs`. The web shell may override a subset of
//! them from string attributes, so overrides are parsed and validated here
//! rather than at the call site.

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Degrees of rotation per pixel of drag.
    pub rotate_sensitivity: f32,
    pub position_step: f32,
    pub zoom_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Tilt added to `rotation_x` when the pose is handed to the scene graph.
    pub base_tilt_deg: f32,
    pub loading_delay_ms: i32,
    pub contact_recipient: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rotate_sensitivity: ROTATE_SENSITIVITY,
            position_step: POSITION_STEP,
            zoom_step: ZOOM_STEP,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            base_tilt_deg: BASE_TILT_DEG,
            loading_delay_ms: LOADING_DELAY_MS,
            contact_recipient: CONTACT_RECIPIENT.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        positive("rotate_sensitivity", self.rotate_sensitivity)?;
        positive("position_step", self.position_step)?;
        positive("zoom_step", self.zoom_step)?;
        positive("min_scale", self.min_scale)?;
        positive("max_scale", self.max_scale)?;
        if self.min_scale > self.max_scale {
            return Err(Error::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }

    /// Apply `key = value` overrides and re-validate.
    ///
    /// Unknown keys are skipped so the shell can share its attribute bag with
    /// unrelated settings; known keys with unparsable values are rejected.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in overrides {
            match key {
                "sensitivity" => self.rotate_sensitivity = parse_f32(key, value)?,
                "position-step" => self.position_step = parse_f32(key, value)?,
                "zoom-step" => self.zoom_step = parse_f32(key, value)?,
                "min-scale" => self.min_scale = parse_f32(key, value)?,
                "max-scale" => self.max_scale = parse_f32(key, value)?,
                "loading-delay" => {
                    self.loading_delay_ms = value
                        .trim()
                        .parse::<i32>()
                        .ok()
                        .filter(|ms| *ms >= 0)
                        .ok_or_else(|| invalid(key, value))?;
                }
                "contact" => self.contact_recipient = value.trim().to_string(),
                _ => log::debug!("[config] ignoring unknown key {key:?}"),
            }
        }
        self.validate()?;
        Ok(self)
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonPositive { name, value })
    }
}

fn parse_f32(key: &str, value: &str) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> Error {
    Error::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}
