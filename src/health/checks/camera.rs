//! Screen → world transform check

use crate::health::check::{CheckLog, CheckResult, SystemCheck};
use crate::sim::camera::{Camera, Viewport};
use crate::sim::pointer::transform::screen_to_world;

const EPSILON: f32 = 1e-3;

fn close(a: [f32; 2], b: [f32; 2]) -> bool {
    (a[0] - b[0]).abs() < EPSILON && (a[1] - b[1]).abs() < EPSILON
}

/// Checks the camera transform against known mappings
pub struct CameraCheck {
    viewport: Viewport,
}

impl CameraCheck {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::uniform(800.0, 600.0),
        }
    }
}

impl Default for CameraCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for CameraCheck {
    fn name(&self) -> &'static str {
        "Camera"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates screen to world mapping and view validation")
    }

    fn check(&self) -> CheckResult {
        let mut log = CheckLog::new();
        let camera = Camera::new(self.viewport);

        let identity = screen_to_world([120.0, 45.0], &camera.view());
        log.expect(
            close(identity, [120.0, 45.0]),
            format!("Centered camera maps pixels 1:1 ({:.2}, {:.2})", identity[0], identity[1]),
        );

        let rotated = screen_to_world([3.0, 4.0], &camera.with_rotation(90.0).view());
        log.expect(
            close(rotated, [4.0, -3.0]),
            format!("90° rotation maps (3, 4) to ({:.2}, {:.2})", rotated[0], rotated[1]),
        );

        let zoomed = screen_to_world([400.0, 300.0], &camera.with_zoom(2.0).view());
        log.expect(
            close(zoomed, camera.position()),
            "Zoom keeps the window center on the camera",
        );

        log.expect(
            camera.with_zoom(0.0).view().validate().is_err(),
            "Zero zoom is rejected",
        );

        let mut shrunk = camera;
        shrunk.resize_window(0.0, 600.0);
        log.expect(
            shrunk.view().validate().is_err(),
            "Zero-width window is rejected",
        );

        log.finish(
            "Transform matches known mappings",
            "Transform checked with warnings",
            "Transform mismatch",
        )
    }
}
