//! Track generation settings.

use drive_core::traits::Validate;
use drive_core::{DriveError, Result, Tolerance};
use serde::{Deserialize, Serialize};

use crate::ribbon::RibbonParams;

/// Settings for building a track ribbon. Missing JSON fields fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    pub sample_count: usize,
    pub width: f64,
    pub thickness: f64,
    /// Multiplier from curve units to scene units
    pub scale: f64,
    pub tolerance: Tolerance,
}

impl TrackConfig {
    pub const DEFAULT_SAMPLE_COUNT: usize = 100;
    pub const DEFAULT_WIDTH: f64 = 2.0;
    pub const DEFAULT_THICKNESS: f64 = 0.1;
    pub const DEFAULT_SCALE: f64 = 13.0;

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn ribbon_params(&self) -> RibbonParams {
        RibbonParams::new(self.sample_count, self.width, self.thickness)
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            width: Self::DEFAULT_WIDTH,
            thickness: Self::DEFAULT_THICKNESS,
            scale: Self::DEFAULT_SCALE,
            tolerance: Tolerance::default(),
        }
    }
}

impl Validate for TrackConfig {
    fn validate(&self) -> Result<()> {
        self.ribbon_params().validate()?;
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(DriveError::InvalidConfig(format!(
                "scale must be finite and non-zero, got {}",
                self.scale
            )));
        }
        if self.tolerance.linear.is_nan() || self.tolerance.linear < 0.0 {
            return Err(DriveError::InvalidConfig(format!(
                "linear tolerance must be non-negative, got {}",
                self.tolerance.linear
            )));
        }
        Ok(())
    }
}
