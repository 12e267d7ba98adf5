//! Stroke model for the whiteboard.
//!
//! Everything in this crate is independent of the UI host: a gesture is fed
//! in through [`GestureHandler`], committed strokes accumulate in a
//! [`StrokeHistory`], and [`Scene`] describes what should be painted.

mod color;
mod controls;
mod point;
mod scene;
mod settings;
mod stroke;
mod whiteboard;

pub use color::Color;
pub use controls::ControlMetrics;
pub use point::Point;
pub use scene::{Polyline, Scene};
pub use settings::Settings;
pub use stroke::{InProgressStroke, Stroke, StrokeHistory};
pub use whiteboard::{BoardChange, GestureHandler, Whiteboard};
