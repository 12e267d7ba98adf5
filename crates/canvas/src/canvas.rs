use gpui::{Context, EventEmitter, FocusHandle, Focusable};
use stroke::{BoardChange, Color, GestureHandler, Point, Settings, Whiteboard};
use theme::Theme;

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A stroke was committed; carries the new history length.
    StrokeCommitted(usize),
    ColorChanged(Color),
}

/// The canvas state.
pub struct Canvas {
    board: Whiteboard,

    /// Stroke width and control sizing.
    pub settings: Settings,

    /// Theme colors.
    pub theme: Theme,

    /// Focus handle for keyboard events.
    focus_handle: FocusHandle,
}

impl Canvas {
    pub fn new(theme: Theme, settings: Settings, cx: &mut Context<Self>) -> Self {
        Self {
            board: Whiteboard::new(),
            settings,
            theme,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn board(&self) -> &Whiteboard {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.board.active_color()
    }

    pub fn is_capturing(&self) -> bool {
        self.board.is_capturing()
    }

    /// Select the color for new strokes.
    pub fn select_color(&mut self, color: Color, cx: &mut Context<Self>) {
        let change = self.board.select_color(color);
        self.apply(change, cx);
    }

    /// Remove the latest stroke.
    pub fn undo(&mut self, cx: &mut Context<Self>) {
        let change = self.board.undo();
        self.apply(change, cx);
    }

    /// Remove all strokes.
    pub fn clear(&mut self, cx: &mut Context<Self>) {
        let change = self.board.clear();
        self.apply(change, cx);
    }

    /// Pointer pressed on the drawing surface.
    pub fn start_gesture(&mut self, cx: &mut Context<Self>) {
        let change = self.board.on_gesture_start();
        self.apply(change, cx);
    }

    /// Pointer moved during a gesture, in surface-local coordinates.
    pub fn add_point(&mut self, point: Point, cx: &mut Context<Self>) {
        let change = self.board.on_gesture_move(point);
        self.apply(change, cx);
    }

    /// Pointer released.
    pub fn end_gesture(&mut self, cx: &mut Context<Self>) {
        let change = self.board.on_gesture_end();
        self.apply(change, cx);
    }

    /// The host dropped the gesture (focus lost, escape).
    pub fn cancel_gesture(&mut self, cx: &mut Context<Self>) {
        let change = self.board.on_gesture_cancel();
        self.apply(change, cx);
    }

    /// Translate a model change into events and a repaint.
    fn apply(&mut self, change: Option<BoardChange>, cx: &mut Context<Self>) {
        let Some(change) = change else {
            return;
        };

        match change {
            BoardChange::StrokeCommitted { index } => {
                log::info!("stroke {} committed", index);
                cx.emit(CanvasEvent::StrokeCommitted(index + 1));
            }
            BoardChange::StrokeUndone { remaining } => {
                log::info!("undo, {} strokes left", remaining);
            }
            BoardChange::Cleared { removed } => {
                log::info!("cleared {} strokes", removed);
            }
            BoardChange::ColorChanged { to, .. } => {
                cx.emit(CanvasEvent::ColorChanged(to));
            }
            BoardChange::CaptureStarted { .. }
            | BoardChange::PointAdded { .. }
            | BoardChange::StrokeDiscarded => {}
        }
        cx.notify();
    }
}

impl EventEmitter<CanvasEvent> for Canvas {}

impl Focusable for Canvas {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
