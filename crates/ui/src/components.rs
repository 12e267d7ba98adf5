//! Basic UI components.

use gpui::{
    div, prelude::*, px, Div, ElementId, InteractiveElement, ParentElement, SharedString,
    Stateful, Styled,
};
use theme::Theme;

/// Horizontal stack layout.
pub fn h_stack() -> Div {
    div().flex().flex_row().items_center()
}

/// Vertical stack layout.
pub fn v_stack() -> Div {
    div().flex().flex_col()
}

/// A plain text button. Attach behavior with `on_click`.
pub fn button(
    id: impl Into<ElementId>,
    label: impl Into<SharedString>,
    theme: &Theme,
) -> Stateful<Div> {
    let label = label.into();
    let text = theme.ui_text;
    let hover_bg = theme.hover;

    div()
        .id(id)
        .px(px(12.0))
        .py(px(6.0))
        .rounded(px(4.0))
        .text_color(text)
        .text_sm()
        .cursor_pointer()
        .hover(move |d| d.bg(hover_bg))
        .child(label)
}
