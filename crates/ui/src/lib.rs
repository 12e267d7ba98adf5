//! Controls for the whiteboard: color swatches, Undo and Clear.

mod components;
mod control_row;

pub use components::{button, h_stack, v_stack};
pub use control_row::ControlRow;
