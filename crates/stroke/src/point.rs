use glam::Vec2;
use std::fmt;

/// A sampled position in canvas-local space.
///
/// The origin is the top-left corner of the drawing surface. Points are
/// recorded exactly as delivered by the host and never modified afterwards.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Point(pub Vec2);

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Offset this point by a host origin, e.g. to move from local to window space.
    pub fn offset(&self, origin: Vec2) -> Vec2 {
        self.0 + origin
    }
}

impl From<Vec2> for Point {
    fn from(value: Vec2) -> Self {
        Self(value)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
