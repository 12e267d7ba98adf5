use crate::{Color, Point};

/// A committed freehand line.
///
/// Always holds at least one point; [`InProgressStroke::commit`] is the only
/// way to build one.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    color: Color,
}

impl Stroke {
    /// Points in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// The stroke being captured during an active gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct InProgressStroke {
    points: Vec<Point>,
    color: Color,
}

impl InProgressStroke {
    /// Begin capture, tagged with the color active at gesture start.
    pub fn new(color: Color) -> Self {
        Self {
            points: Vec::new(),
            color,
        }
    }

    /// Record a sample. Every sample is kept, including repeats.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Turn the captured samples into a [`Stroke`].
    ///
    /// Returns `None` when nothing was captured.
    pub fn commit(self) -> Option<Stroke> {
        if self.points.is_empty() {
            return None;
        }
        Some(Stroke {
            points: self.points,
            color: self.color,
        })
    }
}

/// Committed strokes in commit order (back to front).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove the most recently committed stroke.
    pub fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Remove every stroke, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.strokes.len();
        self.strokes.clear();
        removed
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
