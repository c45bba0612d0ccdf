//! Shared types for the Thinkview thinking-content classifier.

mod classification;
mod display;
mod ws;

pub use classification::*;
pub use display::*;
pub use ws::*;
