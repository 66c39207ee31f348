//! Window attributes and the initial camera viewport

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, WindowAttributes};

use crate::config::WindowConfig;
use crate::sim::camera::Viewport;

/// Creates window attributes from configuration
pub fn window_attributes_from_config(config: &WindowConfig) -> WindowAttributes {
    let mut attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
        .with_decorations(config.decorated);

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Viewport whose game size is the configured window size
///
/// The window size starts equal to it and follows `Resized` events.
pub fn viewport_from_config(config: &WindowConfig) -> Viewport {
    Viewport::uniform(config.width as f32, config.height as f32)
}
