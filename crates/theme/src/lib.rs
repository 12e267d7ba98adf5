//! Minimal theming for the whiteboard.
//!
//! Provides colors for the drawing surface, the control row, and the
//! on-screen rendition of each palette color.

use gpui::Hsla;
use palette::{FromColor, Hsl, Srgb};
use stroke::Color;

/// Theme colors for the whiteboard.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Drawing surface background
    pub canvas_background: Hsla,

    /// Border around the selected swatch
    pub swatch_selected: Hsla,

    /// Hover background for buttons
    pub hover: Hsla,

    /// Control row background
    pub ui_background: Hsla,

    /// Button text
    pub ui_text: Hsla,

    /// Render black ink as light ink, for dark backgrounds.
    invert_black: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            canvas_background: gpui::white(),
            swatch_selected: hsla(0.0, 0.0, 0.5, 1.0), // Gray
            hover: hsla(0.0, 0.0, 0.95, 1.0),
            ui_background: gpui::white(),
            ui_text: hsla(0.58, 0.9, 0.45, 1.0), // Button blue
            invert_black: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            canvas_background: hsla(0.0, 0.0, 0.1, 1.0),
            swatch_selected: hsla(0.0, 0.0, 0.6, 1.0),
            hover: hsla(0.0, 0.0, 0.2, 1.0),
            ui_background: hsla(0.0, 0.0, 0.12, 1.0),
            ui_text: hsla(0.58, 0.9, 0.65, 1.0),
            invert_black: true,
        }
    }

    /// On-screen color for a palette entry.
    pub fn ink(&self, color: Color) -> Hsla {
        if self.invert_black && color == Color::Black {
            return hsla(0.0, 0.0, 0.92, 1.0);
        }
        srgb_to_hsla(color.to_srgb())
    }
}

/// Convert an 8-bit sRGB color to gpui's HSLA representation.
pub fn srgb_to_hsla(color: Srgb<u8>) -> Hsla {
    let hsl: Hsl = Hsl::from_color(color.into_format::<f32>());
    Hsla {
        h: hsl.hue.into_positive_degrees() / 360.0,
        s: hsl.saturation,
        l: hsl.lightness,
        a: 1.0,
    }
}

/// Helper to create Hsla from h, s, l, a values.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Hsla {
    Hsla { h, s, l, a }
}
