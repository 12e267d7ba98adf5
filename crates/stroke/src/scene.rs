use crate::{Color, InProgressStroke, Point, StrokeHistory};

/// One stroke to paint as connected line segments with no fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polyline<'a> {
    pub points: &'a [Point],
    pub color: Color,
    pub width: f32,
}

impl<'a> Polyline<'a> {
    /// Consecutive point pairs. A single-point polyline has no segments.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + 'a {
        let points = self.points;
        points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Everything the host paints on the drawing surface, back to front.
///
/// The background fill comes from the host theme and is painted first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene<'a> {
    pub polylines: Vec<Polyline<'a>>,
}

impl<'a> Scene<'a> {
    /// Committed strokes in history order, then the in-progress stroke if it
    /// has any samples.
    pub fn build(
        history: &'a StrokeHistory,
        in_progress: Option<&'a InProgressStroke>,
        width: f32,
    ) -> Self {
        let committed = history.iter().map(|stroke| Polyline {
            points: stroke.points(),
            color: stroke.color(),
            width,
        });
        let capturing = in_progress
            .filter(|capture| !capture.is_empty())
            .map(|capture| Polyline {
                points: capture.points(),
                color: capture.color(),
                width,
            });

        Self {
            polylines: committed.chain(capturing).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Settings, Whiteboard};

    #[test]
    fn empty_board_has_empty_scene() {
        let board = Whiteboard::new();
        assert!(board.scene(&Settings::default()).polylines.is_empty());
    }

    #[test]
    fn committed_then_in_progress() {
        let mut board = Whiteboard::new();
        board.start_gesture();
        board.add_point(Point::new(0.0, 0.0));
        board.end_gesture();
        board.select_color(Color::Red);
        board.start_gesture();
        board.add_point(Point::new(1.0, 1.0));
        board.add_point(Point::new(2.0, 2.0));
        board.select_color(Color::Yellow);

        let scene = board.scene(&Settings::default());
        let colors: Vec<_> = scene.polylines.iter().map(|p| p.color).collect();
        assert_eq!(colors, [Color::Black, Color::Red]);
        assert_eq!(scene.polylines[1].points.len(), 2);
        assert!(scene.polylines.iter().all(|p| p.width == 3.0));
    }

    #[test]
    fn empty_capture_is_not_painted() {
        let mut board = Whiteboard::new();
        board.start_gesture();
        assert!(board.scene(&Settings::default()).polylines.is_empty());
    }

    #[test]
    fn segments_connect_consecutive_points() {
        let points = [
            Point::new(10.0, 10.0),
            Point::new(20.0, 15.0),
            Point::new(30.0, 25.0),
        ];
        let line = Polyline {
            points: &points,
            color: Color::Black,
            width: 3.0,
        };
        let segments: Vec<_> = line.segments().collect();
        assert_eq!(segments, [(points[0], points[1]), (points[1], points[2])]);

        let dot = Polyline {
            points: &points[..1],
            ..line
        };
        assert_eq!(dot.segments().count(), 0);
    }
}
