use crate::Settings;

/// Width of the border drawn around every swatch, in logical pixels.
/// The gpui control row paints this with `border_2`.
pub const SWATCH_BORDER: f32 = 2.0;

/// Gap between items in the control row, in logical pixels.
pub const CONTROL_GAP: f32 = 1.0;

/// Sizes for the control row, derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlMetrics {
    pub swatch_diameter: f32,
    /// Margin on the left and right of each swatch.
    pub swatch_margin: f32,
    pub swatch_border: f32,
    pub padding: f32,
    pub gap: f32,
}

impl ControlMetrics {
    pub fn for_viewport(viewport_width: f32, settings: &Settings) -> Self {
        let width = viewport_width.max(0.0);
        Self {
            swatch_diameter: width * settings.swatch_fraction,
            swatch_margin: width * settings.swatch_spacing_fraction,
            swatch_border: SWATCH_BORDER,
            padding: settings.controls_padding,
            gap: CONTROL_GAP,
        }
    }

    /// Corner radius that turns a square swatch into a circle.
    pub fn swatch_radius(&self) -> f32 {
        self.swatch_diameter / 2.0
    }
}
