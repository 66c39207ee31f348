//! Pointer Pick
//!
//! Resolves pointer input against on-screen entities once per frame:
//! hover, enter/leave, click, release and drag, through a 2D camera.

/// Windowing edge - input collection, cursor shapes and the demo app
pub mod app;

/// Layered runtime configuration
pub mod config;

/// Error types shared across the crate
pub mod error;

/// Startup and CI self checks
pub mod health;

/// Frame scheduler, camera and the pointer system
pub mod sim;
