//! Drawing surface for the whiteboard.
//!
//! Wraps the stroke model in a gpui entity and paints it.

mod canvas;
mod element;

pub use canvas::{Canvas, CanvasEvent};
pub use element::CanvasElement;
