use crate::{Color, InProgressStroke, Point, Scene, Settings, StrokeHistory};

/// What a whiteboard operation changed.
///
/// Operations return `None` when they were a no-op, so a host only needs to
/// repaint when it receives `Some`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardChange {
    /// A gesture began; capture is tagged with `color`.
    CaptureStarted { color: Color },
    /// A sample was appended to the in-progress stroke, which now holds `len` points.
    PointAdded { len: usize },
    /// The in-progress stroke was committed at `index` in the history.
    StrokeCommitted { index: usize },
    /// A gesture ended without any samples.
    StrokeDiscarded,
    /// The latest stroke was removed, `remaining` strokes are left.
    StrokeUndone { remaining: usize },
    /// All `removed` strokes were removed.
    Cleared { removed: usize },
    ColorChanged { from: Color, to: Color },
}

/// Receives the gesture lifecycle from a UI host.
///
/// A host maps its own pointer or touch events onto these calls. Every call
/// reports what changed so the host can schedule a repaint.
pub trait GestureHandler {
    fn on_gesture_start(&mut self) -> Option<BoardChange>;
    fn on_gesture_move(&mut self, point: Point) -> Option<BoardChange>;
    fn on_gesture_end(&mut self) -> Option<BoardChange>;

    /// The host abandoned the gesture. Treated the same as a normal end.
    fn on_gesture_cancel(&mut self) -> Option<BoardChange> {
        self.on_gesture_end()
    }
}

/// The whiteboard state: committed strokes, the stroke being drawn and the
/// selected color.
#[derive(Clone, Debug, Default)]
pub struct Whiteboard {
    history: StrokeHistory,
    in_progress: Option<InProgressStroke>,
    active_color: Color,
}

impl Whiteboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    /// The stroke being captured, if a gesture is active.
    pub fn in_progress(&self) -> Option<&InProgressStroke> {
        self.in_progress.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Select the color for strokes started from now on.
    ///
    /// Does not affect a stroke that is already being captured.
    pub fn select_color(&mut self, color: Color) -> Option<BoardChange> {
        if self.active_color == color {
            return None;
        }
        let from = std::mem::replace(&mut self.active_color, color);
        log::debug!("active color {} -> {}", from, color);
        Some(BoardChange::ColorChanged { from, to: color })
    }

    /// Start capturing a new stroke with the active color.
    ///
    /// A start while already capturing drops the previous samples.
    pub fn start_gesture(&mut self) -> Option<BoardChange> {
        if let Some(previous) = self.in_progress.take() {
            log::debug!("restarting capture, dropping {} samples", previous.len());
        }
        self.in_progress = Some(InProgressStroke::new(self.active_color));
        Some(BoardChange::CaptureStarted {
            color: self.active_color,
        })
    }

    /// Append a sample to the in-progress stroke. Ignored while idle.
    pub fn add_point(&mut self, point: Point) -> Option<BoardChange> {
        let capture = self.in_progress.as_mut()?;
        capture.push(point);
        log::trace!("sample {:?}", point);
        Some(BoardChange::PointAdded { len: capture.len() })
    }

    /// Finish the gesture, committing the stroke if anything was captured.
    pub fn end_gesture(&mut self) -> Option<BoardChange> {
        let capture = self.in_progress.take()?;
        match capture.commit() {
            Some(stroke) => {
                log::debug!(
                    "committed {} stroke with {} points",
                    stroke.color(),
                    stroke.len()
                );
                self.history.push(stroke);
                Some(BoardChange::StrokeCommitted {
                    index: self.history.len() - 1,
                })
            }
            None => {
                log::debug!("discarded empty gesture");
                Some(BoardChange::StrokeDiscarded)
            }
        }
    }

    /// Remove the most recently committed stroke, if any.
    pub fn undo(&mut self) -> Option<BoardChange> {
        self.history.pop()?;
        log::debug!("undo, {} strokes remain", self.history.len());
        Some(BoardChange::StrokeUndone {
            remaining: self.history.len(),
        })
    }

    /// Remove all committed strokes.
    pub fn clear(&mut self) -> Option<BoardChange> {
        let removed = self.history.clear();
        if removed == 0 {
            return None;
        }
        log::debug!("cleared {} strokes", removed);
        Some(BoardChange::Cleared { removed })
    }

    /// Describe what to paint for the current state.
    pub fn scene(&self, settings: &Settings) -> Scene<'_> {
        Scene::build(&self.history, self.in_progress.as_ref(), settings.stroke_width)
    }
}

impl GestureHandler for Whiteboard {
    fn on_gesture_start(&mut self) -> Option<BoardChange> {
        self.start_gesture()
    }

    fn on_gesture_move(&mut self, point: Point) -> Option<BoardChange> {
        self.add_point(point)
    }

    fn on_gesture_end(&mut self) -> Option<BoardChange> {
        self.end_gesture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run one complete gesture through the handler interface.
    fn draw(handler: &mut impl GestureHandler, points: &[(f32, f32)]) {
        handler.on_gesture_start();
        for &p in points {
            handler.on_gesture_move(p.into());
        }
        handler.on_gesture_end();
    }

    #[test]
    fn gesture_commits_points_in_order() {
        let mut board = Whiteboard::new();
        draw(&mut board, &[(10.0, 10.0), (20.0, 15.0), (30.0, 25.0)]);

        let strokes = board.history().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0].points(),
            &[
                Point::new(10.0, 10.0),
                Point::new(20.0, 15.0),
                Point::new(30.0, 25.0)
            ]
        );
        assert_eq!(strokes[0].color(), Color::Black);
        assert!(!board.is_capturing());
    }

    #[test]
    fn committed_stroke_has_one_point_per_move() {
        for n in [1usize, 2, 7, 64] {
            let mut board = Whiteboard::new();
            let points: Vec<_> = (0..n).map(|i| (i as f32, (i * 2) as f32)).collect();
            draw(&mut board, &points);

            let stroke = board.history().strokes().last().unwrap();
            assert_eq!(stroke.len(), n);
            for (recorded, expected) in stroke.points().iter().zip(&points) {
                assert_eq!(*recorded, Point::from(*expected));
            }
        }
    }

    #[test]
    fn empty_gesture_is_discarded() {
        let mut board = Whiteboard::new();
        assert_eq!(
            board.start_gesture(),
            Some(BoardChange::CaptureStarted {
                color: Color::Black
            })
        );
        assert_eq!(board.end_gesture(), Some(BoardChange::StrokeDiscarded));
        assert!(board.history().is_empty());
        assert!(!board.is_capturing());
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut board = Whiteboard::new();
        assert_eq!(board.add_point(Point::new(1.0, 1.0)), None);
        assert_eq!(board.end_gesture(), None);
        assert!(board.history().is_empty());
    }

    #[test]
    fn restart_drops_previous_samples() {
        let mut board = Whiteboard::new();
        board.start_gesture();
        board.add_point(Point::new(1.0, 1.0));
        board.start_gesture();
        board.add_point(Point::new(2.0, 2.0));
        board.end_gesture();

        assert_eq!(board.history().len(), 1);
        assert_eq!(board.history().strokes()[0].points(), &[Point::new(2.0, 2.0)]);
    }

    #[test]
    fn color_change_mid_gesture_keeps_start_color() {
        let mut board = Whiteboard::new();
        board.select_color(Color::Red);
        board.start_gesture();
        board.add_point(Point::new(0.0, 0.0));
        board.select_color(Color::Green);
        board.add_point(Point::new(1.0, 1.0));

        assert_eq!(board.in_progress().unwrap().color(), Color::Red);
        board.end_gesture();

        assert_eq!(board.history().strokes()[0].color(), Color::Red);
        assert_eq!(board.active_color(), Color::Green);
    }

    #[test]
    fn undo_removes_latest_only() {
        let mut board = Whiteboard::new();
        draw(&mut board, &[(0.0, 0.0)]);
        board.select_color(Color::Blue);
        draw(&mut board, &[(1.0, 1.0), (2.0, 2.0)]);
        draw(&mut board, &[(3.0, 3.0)]);
        let before: Vec<_> = board.history().strokes()[..2].to_vec();

        assert_eq!(
            board.undo(),
            Some(BoardChange::StrokeUndone { remaining: 2 })
        );
        assert_eq!(board.history().strokes(), before.as_slice());
    }

    #[test]
    fn undo_after_k_commits() {
        for k in 0..5usize {
            let mut board = Whiteboard::new();
            for i in 0..k {
                draw(&mut board, &[(i as f32, 0.0)]);
            }
            board.undo();
            assert_eq!(board.history().len(), k.saturating_sub(1));
        }
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut board = Whiteboard::new();
        assert_eq!(board.undo(), None);
        assert_eq!(board.undo(), None);
        assert!(board.history().is_empty());
    }

    #[test]
    fn clear_empties_history() {
        let mut board = Whiteboard::new();
        assert_eq!(board.clear(), None);

        for i in 0..3 {
            draw(&mut board, &[(i as f32, 0.0)]);
        }
        assert_eq!(board.clear(), Some(BoardChange::Cleared { removed: 3 }));
        assert!(board.history().is_empty());
        assert_eq!(board.clear(), None);
    }

    #[test]
    fn undo_and_clear_leave_capture_alone() {
        let mut board = Whiteboard::new();
        draw(&mut board, &[(0.0, 0.0)]);
        board.start_gesture();
        board.add_point(Point::new(5.0, 5.0));

        board.undo();
        assert_eq!(board.in_progress().unwrap().len(), 1);
        board.end_gesture();
        draw(&mut board, &[(1.0, 1.0)]);
        board.start_gesture();
        board.add_point(Point::new(6.0, 6.0));
        assert_eq!(board.clear(), Some(BoardChange::Cleared { removed: 2 }));
        assert_eq!(board.in_progress().unwrap().points(), &[Point::new(6.0, 6.0)]);
    }

    #[test]
    fn reselecting_active_color_is_noop() {
        let mut board = Whiteboard::new();
        assert_eq!(
            board.select_color(Color::Red),
            Some(BoardChange::ColorChanged {
                from: Color::Black,
                to: Color::Red
            })
        );
        board.select_color(Color::Blue);
        assert_eq!(board.active_color(), Color::Blue);
        assert_eq!(board.select_color(Color::Blue), None);
        assert_eq!(board.active_color(), Color::Blue);
    }

    #[test]
    fn cancel_commits_what_was_captured() {
        let mut board = Whiteboard::new();
        board.on_gesture_start();
        board.on_gesture_move(Point::new(4.0, 4.0));
        assert_eq!(
            board.on_gesture_cancel(),
            Some(BoardChange::StrokeCommitted { index: 0 })
        );
        assert_eq!(board.history().len(), 1);
    }
}
