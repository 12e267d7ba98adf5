use crate::canvas::Canvas;
use glam::Vec2;
use gpui::{
    point, px, App, Bounds, ContentMask, DispatchPhase, Element, ElementId, Entity, Hitbox,
    IntoElement, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, PathBuilder, Pixels,
    Style, Window,
};
use stroke::{Point, Polyline};
use theme::Theme;

/// A GPUI element that paints a Canvas and feeds pointer input into it.
pub struct CanvasElement {
    canvas: Entity<Canvas>,
}

impl CanvasElement {
    pub fn new(canvas: Entity<Canvas>) -> Self {
        Self { canvas }
    }
}

impl IntoElement for CanvasElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

pub struct CanvasElementState {
    hitbox: Hitbox,
}

impl Element for CanvasElement {
    type RequestLayoutState = ();
    type PrepaintState = CanvasElementState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (gpui::LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        let layout_id = window.request_layout(style, None, cx);
        (layout_id, ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        _cx: &mut App,
    ) -> Self::PrepaintState {
        let hitbox = window.insert_hitbox(bounds, gpui::HitboxBehavior::BlockMouse);
        CanvasElementState { hitbox }
    }

    fn paint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let canvas_entity = self.canvas.clone();

        {
            let canvas = self.canvas.read(cx);
            let scene = canvas.board().scene(&canvas.settings);
            let theme = &canvas.theme;

            window.paint_quad(gpui::fill(bounds, theme.canvas_background));

            // Strokes paint in history order, so later strokes cover earlier ones
            window.with_content_mask(Some(ContentMask { bounds }), |window| {
                for polyline in &scene.polylines {
                    paint_polyline(polyline, theme, bounds, window);
                }
            });
        }

        let hitbox = prepaint.hitbox.clone();

        // Mouse down starts a gesture only on the surface itself
        window.on_mouse_event({
            let canvas = canvas_entity.clone();
            let hitbox = hitbox.clone();
            move |event: &MouseDownEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble
                    && event.button == MouseButton::Left
                    && hitbox.is_hovered(window)
                {
                    canvas.update(cx, |canvas, cx| canvas.start_gesture(cx));
                }
            }
        });

        // Moves and release are tracked anywhere once a gesture is active
        window.on_mouse_event({
            let canvas = canvas_entity.clone();
            move |event: &MouseMoveEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble && event.dragging() {
                    handle_mouse_move(&canvas, event, bounds, cx);
                }
            }
        });

        window.on_mouse_event({
            let canvas = canvas_entity;
            move |event: &MouseUpEvent, phase, _window, cx| {
                if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                    canvas.update(cx, |canvas, cx| {
                        if canvas.is_capturing() {
                            canvas.end_gesture(cx);
                        }
                    });
                }
            }
        });
    }
}

fn handle_mouse_move(
    canvas: &Entity<Canvas>,
    event: &MouseMoveEvent,
    bounds: Bounds<Pixels>,
    cx: &mut App,
) {
    if !canvas.read(cx).is_capturing() {
        return;
    }

    let local_x: f32 = (event.position.x - bounds.origin.x).into();
    let local_y: f32 = (event.position.y - bounds.origin.y).into();

    canvas.update(cx, |canvas, cx| {
        canvas.add_point(Point::new(local_x, local_y), cx);
    });
}

/// Stroke a polyline through its points, offset into window space.
fn paint_polyline(
    polyline: &Polyline<'_>,
    theme: &Theme,
    bounds: Bounds<Pixels>,
    window: &mut Window,
) {
    let origin = Vec2::new(bounds.origin.x.into(), bounds.origin.y.into());
    let to_window = |sample: Point| {
        let pos = sample.offset(origin);
        point(px(pos.x), px(pos.y))
    };

    let mut segments = polyline.segments().peekable();
    // A lone sample has no segment to stroke
    let Some(&(start, _)) = segments.peek() else {
        return;
    };

    let mut builder = PathBuilder::stroke(px(polyline.width));
    builder.move_to(to_window(start));
    for (_, end) in segments {
        builder.line_to(to_window(end));
    }

    match builder.build() {
        Ok(path) => window.paint_path(path, theme.ink(polyline.color)),
        Err(err) => log::warn!("failed to tessellate stroke: {err}"),
    }
}
