//! Camera system for defining views into world space

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{InteractionError, InteractionResult};

/// Logical game dimensions versus physical window dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical game size in world units
    pub game_size: [f32; 2],
    /// Physical window size in pixels
    pub window_size: [f32; 2],
}

impl Viewport {
    pub fn new(game_size: [f32; 2], window_size: [f32; 2]) -> Self {
        Self {
            game_size,
            window_size,
        }
    }

    /// Viewport where one window pixel is one world unit
    pub fn uniform(width: f32, height: f32) -> Self {
        Self::new([width, height], [width, height])
    }

    /// World units per window pixel on each axis
    pub fn scale(&self) -> [f32; 2] {
        [
            self.game_size[0] / self.window_size[0],
            self.game_size[1] / self.window_size[1],
        ]
    }

    /// Rejects dimensions that would divide by zero or poison the transform
    pub fn validate(&self) -> InteractionResult<()> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if self.game_size.iter().chain(&self.window_size).all(|&v| usable(v)) {
            Ok(())
        } else {
            Err(InteractionError::InvalidViewport {
                game_width: self.game_size[0],
                game_height: self.game_size[1],
                window_width: self.window_size[0],
                window_height: self.window_size[1],
            })
        }
    }
}

/// Read-only camera snapshot taken once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    /// World position the camera is centered on
    pub position: [f32; 2],
    /// World units per game unit; 2.0 shows twice as much world
    pub zoom: f32,
    pub rotation_degrees: f32,
    pub viewport: Viewport,
}

impl CameraView {
    /// Checks that the view can map pointer coordinates
    pub fn validate(&self) -> InteractionResult<()> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(InteractionError::InvalidZoom { zoom: self.zoom });
        }
        self.viewport.validate()
    }
}

/// Anything that can describe the current camera view
pub trait CameraProvider {
    fn view(&self) -> CameraView;
}

impl<T: CameraProvider + ?Sized> CameraProvider for Rc<T> {
    fn view(&self) -> CameraView {
        (**self).view()
    }
}

impl CameraProvider for Cell<Camera> {
    fn view(&self) -> CameraView {
        self.get().view()
    }
}

/// Camera centered on a world position with zoom and rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: [f32; 2],
    zoom: f32,
    rotation_degrees: f32,
    viewport: Viewport,
}

impl Camera {
    /// Create camera looking at the middle of the game area, unzoomed
    ///
    /// With a uniform viewport this maps window pixels straight onto world
    /// coordinates.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: [viewport.game_size[0] / 2.0, viewport.game_size[1] / 2.0],
            zoom: 1.0,
            rotation_degrees: 0.0,
            viewport,
        }
    }

    /// Builder method to center on a world position
    pub fn with_position(mut self, position: [f32; 2]) -> Self {
        self.position = position;
        self
    }

    /// Builder method to set the zoom factor
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Builder method to set the rotation angle
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn position(&self) -> [f32; 2] {
        self.position
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pan the camera by delta in world units
    pub fn pan(&mut self, delta: [f32; 2]) {
        self.position[0] += delta[0];
        self.position[1] += delta[1];
    }

    /// Zoom in/out by scaling the zoom factor
    /// scale > 1.0 = zoom out, scale < 1.0 = zoom in
    pub fn zoom_by(&mut self, scale: f32) {
        self.zoom *= scale;
    }

    /// Rotate by a delta, keeping the angle within [0, 360)
    pub fn rotate(&mut self, degrees: f32) {
        self.rotation_degrees = (self.rotation_degrees + degrees).rem_euclid(360.0);
    }

    /// Track a new physical window size (e.g. after a resize event)
    pub fn resize_window(&mut self, width: f32, height: f32) {
        self.viewport.window_size = [width, height];
    }

    /// Snapshot of the current state
    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            zoom: self.zoom,
            rotation_degrees: self.rotation_degrees,
            viewport: self.viewport,
        }
    }
}

impl CameraProvider for Camera {
    fn view(&self) -> CameraView {
        Camera::view(self)
    }
}
