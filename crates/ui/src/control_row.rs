//! Control row below the drawing surface.

use crate::components::{button, h_stack};
use canvas::Canvas;
use gpui::{
    div, px, Context, Div, ElementId, Entity, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use stroke::{Color, ControlMetrics};
use theme::Theme;

/// Color swatches followed by the Undo and Clear buttons.
///
/// Colors come from the canvas theme.
pub struct ControlRow {
    canvas: Entity<Canvas>,
}

impl ControlRow {
    pub fn new(canvas: Entity<Canvas>) -> Self {
        Self { canvas }
    }
}

impl Render for ControlRow {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let canvas = self.canvas.read(cx);
        let active = canvas.active_color();
        let viewport_width: f32 = window.viewport_size().width.into();
        let metrics = ControlMetrics::for_viewport(viewport_width, &canvas.settings);
        let theme = canvas.theme.clone();

        let swatches = Color::all().map(|color| {
            Swatch::new(color, active, metrics, theme.clone(), self.canvas.clone())
        });

        let undo = {
            let canvas = self.canvas.clone();
            button("undo", "Undo", &theme).on_click(move |_, _window, cx| {
                canvas.update(cx, |canvas, cx| canvas.undo(cx));
            })
        };
        let clear = {
            let canvas = self.canvas.clone();
            button("clear", "Clear", &theme).on_click(move |_, _window, cx| {
                canvas.update(cx, |canvas, cx| canvas.clear(cx));
            })
        };

        h_stack()
            .w_full()
            .flex_wrap()
            .justify_center()
            .gap(px(metrics.gap))
            .p(px(metrics.padding))
            .bg(theme.ui_background)
            .children(swatches)
            .child(undo)
            .child(clear)
    }
}

/// A round palette swatch. The selected one gets a visible border.
struct Swatch {
    id: ElementId,
    color: Color,
    is_active: bool,
    metrics: ControlMetrics,
    theme: Theme,
    canvas: Entity<Canvas>,
}

impl Swatch {
    fn new(
        color: Color,
        active: Color,
        metrics: ControlMetrics,
        theme: Theme,
        canvas: Entity<Canvas>,
    ) -> Self {
        let name: SharedString = format!("swatch-{}", color.as_ref()).into();
        Self {
            id: ElementId::Name(name),
            color,
            is_active: color == active,
            metrics,
            theme,
            canvas,
        }
    }
}

impl IntoElement for Swatch {
    type Element = gpui::Stateful<Div>;

    fn into_element(self) -> Self::Element {
        let border_color = if self.is_active {
            self.theme.swatch_selected
        } else {
            gpui::transparent_black()
        };

        let color = self.color;
        let canvas = self.canvas;

        div()
            .id(self.id)
            .size(px(self.metrics.swatch_diameter))
            .mx(px(self.metrics.swatch_margin))
            .rounded(px(self.metrics.swatch_radius()))
            .border_2()
            .border_color(border_color)
            .bg(self.theme.ink(color))
            .cursor_pointer()
            .on_click(move |_, _window, cx| {
                canvas.update(cx, |canvas, cx| canvas.select_color(color, cx));
            })
    }
}
