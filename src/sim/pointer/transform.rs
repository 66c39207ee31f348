//! Screen → world coordinate mapping

use crate::sim::camera::CameraView;

/// Maps a physical window pixel position into world space
///
/// Scales by zoom and the game/window ratio, recenters on the camera, then
/// applies the camera rotation. Both rotated components are computed from the
/// same pre-rotation pair.
pub fn screen_to_world(raw: [f32; 2], view: &CameraView) -> [f32; 2] {
    let [scale_x, scale_y] = view.viewport.scale();
    let [game_w, game_h] = view.viewport.game_size;

    let x = raw[0] * view.zoom * scale_x + view.position[0] - (game_w / 2.0) * view.zoom;
    let y = raw[1] * view.zoom * scale_y + view.position[1] - (game_h / 2.0) * view.zoom;

    if view.rotation_degrees == 0.0 {
        return [x, y];
    }

    let (sin, cos) = view.rotation_degrees.to_radians().sin_cos();
    [x * cos + y * sin, y * cos - x * sin]
}
