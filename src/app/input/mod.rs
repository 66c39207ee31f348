//! Pointer input collection
//!
//! The windowing edge of the pointer pipeline:
//! - Folds raw winit events into one snapshot per frame
//! - Normalizes buttons and modifier keys
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit) → InputCollector → PointerSnapshot
//!                                          ↓
//!                                     Scheduler::tick
//!                                          ↓
//!                              PointerSystem (priority 100)
//!                                          ↓
//!                                  consumer systems
//! ```
//!
//! # Usage
//!
//! ```ignore
//! // In window_event()
//! collector.handle_window_event(&event);
//!
//! // Each frame, before any consumer runs
//! let pointer = collector.take_frame();
//! scheduler.tick(delta_time, pointer);
//! ```

mod collector;
mod state;

pub use collector::InputCollector;
pub use state::{Modifiers, MouseButton, PointerAction, PointerSnapshot};
