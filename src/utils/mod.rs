//! Console rendering helpers

pub mod display;

pub use display::{GridFormatter, ConsoleDisplay, ColorOutput, Color};
