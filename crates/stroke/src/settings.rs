use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};

/// Drawing and control-row settings.
///
/// Every field has a default, so a settings file only needs the values it
/// wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Line thickness for every stroke, in logical pixels.
    pub stroke_width: f32,
    /// Swatch diameter as a fraction of the viewport width.
    pub swatch_fraction: f32,
    /// Horizontal margin on each side of a swatch, as a fraction of the viewport width.
    pub swatch_spacing_fraction: f32,
    /// Padding around the control row, in logical pixels.
    pub controls_padding: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stroke_width: 3.0,
            swatch_fraction: 0.08,
            swatch_spacing_fraction: 0.02,
            controls_padding: 10.0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every value is usable for layout and painting.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("stroke_width", self.stroke_width),
            ("controls_padding", self.controls_padding),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive number, got {value}");
            }
        }

        let fractions = [
            ("swatch_fraction", self.swatch_fraction),
            ("swatch_spacing_fraction", self.swatch_spacing_fraction),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value <= 0.0 || value > 0.5 {
                bail!("{name} must be in (0, 0.5], got {value}");
            }
        }

        Ok(())
    }
}
