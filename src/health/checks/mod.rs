//! Built-in health checks

pub mod camera;
pub mod config;
pub mod pointer_session;

pub use camera::CameraCheck;
pub use config::ConfigCheck;
pub use pointer_session::PointerSessionCheck;
