//! Terminal rendering module
//!
//! `canvas` rasterizes a session [`Frame`](crate::sim::Frame) into styled
//! character cells; `terminal` flushes those cells through crossterm.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, Cell, Rgb, render_frame};
pub use terminal::TerminalRenderer;
