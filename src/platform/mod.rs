//! Platform abstraction layer
//!
//! Terminal backend for:
//! - Frame timing
//! - Keyboard input
//! - Drawing (half-block pixel canvas)

pub mod clock;
pub mod input;
pub mod terminal;

pub use clock::FrameClock;
pub use input::InputTracker;
pub use terminal::{PixelCanvas, TerminalSession};
