//! Application edge
//!
//! Handles the window, raw pointer input and cursor shapes.

pub mod cursor;
pub mod input;
mod runner;
mod scene;
mod window;

pub use cursor::Cursor;
pub use runner::App;
pub use window::{viewport_from_config, window_attributes_from_config};
