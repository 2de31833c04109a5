//! # Views Module
//!
//! Views are responsible for rendering and handling terminal display.
//! All drawing goes through the [`RenderStream`](crate::shop::io::RenderStream)
//! abstraction so rendering is fully testable without a TTY.

pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
