use palette::Srgb;
use strum_macros::{AsRefStr, Display, EnumIter};

/// A drawing color from the fixed whiteboard palette.
///
/// Variant order is the order the swatches appear in the control row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// The palette in swatch order.
    pub fn all() -> impl Iterator<Item = Color> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// The color as 8-bit sRGB, using the CSS named-color values.
    pub fn to_srgb(self) -> Srgb<u8> {
        match self {
            Color::Black => palette::named::BLACK,
            Color::Red => palette::named::RED,
            Color::Blue => palette::named::BLUE,
            Color::Green => palette::named::GREEN,
            Color::Yellow => palette::named::YELLOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_order_matches_control_row() {
        let names: Vec<_> = Color::all().map(|c| c.to_string()).collect();
        assert_eq!(names, ["black", "red", "blue", "green", "yellow"]);
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::Black);
    }

    #[test]
    fn green_is_css_green() {
        assert_eq!(Color::Green.to_srgb(), Srgb::new(0u8, 128, 0));
        assert_eq!(Color::Yellow.to_srgb(), Srgb::new(255u8, 255, 0));
    }
}
