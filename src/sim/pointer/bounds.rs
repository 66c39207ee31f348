//! Spatial bounds and render-class capabilities

use serde::{Deserialize, Serialize};

/// How a point lying exactly on an edge is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Edges are outside
    #[default]
    Exclusive,
    /// Edges are inside
    Inclusive,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Aabb {
    pub fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new([x, y], [x + width, y + height])
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    /// Check if a point is inside this box
    pub fn contains(&self, point: [f32; 2], mode: BoundaryMode) -> bool {
        let [x, y] = point;
        match mode {
            BoundaryMode::Exclusive => {
                x > self.min[0] && x < self.max[0] && y > self.min[1] && y < self.max[1]
            }
            BoundaryMode::Inclusive => {
                x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
            }
        }
    }
}

/// Source of an entity's world-space bounds, queried once per frame
///
/// Implemented for a fixed `Aabb` and for any `Fn() -> Aabb`, so moving
/// entities can hand over a closure reading their live position.
pub trait BoundsProvider {
    fn aabb(&self) -> Aabb;
}

impl BoundsProvider for Aabb {
    fn aabb(&self) -> Aabb {
        *self
    }
}

impl<F: Fn() -> Aabb> BoundsProvider for F {
    fn aabb(&self) -> Aabb {
        self()
    }
}

/// Rendering path an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderClass {
    /// Drawn through the camera
    #[default]
    World,
    /// Drawn directly in window pixels (HUD, overlays)
    ScreenFixed,
}

impl RenderClass {
    /// Whether hit-testing uses raw window coordinates
    pub fn is_screen_fixed(self) -> bool {
        matches!(self, Self::ScreenFixed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_rect() {
        let aabb = Aabb::from_rect(2.0, 3.0, 10.0, 5.0);
        assert_eq!(aabb.max, [12.0, 8.0]);
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
    }

    #[test]
    fn test_interior_point_is_inside_in_both_modes() {
        let aabb = Aabb::new([0.0, 0.0], [10.0, 10.0]);
        assert!(aabb.contains([5.0, 5.0], BoundaryMode::Exclusive));
        assert!(aabb.contains([5.0, 5.0], BoundaryMode::Inclusive));
        assert!(!aabb.contains([11.0, 5.0], BoundaryMode::Inclusive));
    }

    #[test]
    fn test_edges_follow_boundary_mode() {
        let aabb = Aabb::new([0.0, 0.0], [10.0, 10.0]);
        for edge in [[0.0, 5.0], [10.0, 5.0], [5.0, 0.0], [5.0, 10.0], [10.0, 10.0]] {
            assert!(!aabb.contains(edge, BoundaryMode::Exclusive), "{:?}", edge);
            assert!(aabb.contains(edge, BoundaryMode::Inclusive), "{:?}", edge);
        }
    }

    #[test]
    fn test_closure_provider_reports_live_bounds() {
        use std::cell::Cell;
        use std::rc::Rc;

        let cell = Rc::new(Cell::new(Aabb::new([0.0, 0.0], [1.0, 1.0])));
        let live = cell.clone();
        let provider: Box<dyn BoundsProvider> = Box::new(move || live.get());
        cell.set(Aabb::new([5.0, 5.0], [6.0, 6.0]));
        assert_eq!(provider.aabb().min, [5.0, 5.0]);

        let fixed: Box<dyn BoundsProvider> = Box::new(Aabb::from_rect(1.0, 1.0, 2.0, 2.0));
        assert_eq!(fixed.aabb().max, [3.0, 3.0]);
    }

    #[test]
    fn test_boundary_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            boundary: BoundaryMode,
        }
        let parsed: Wrapper = config::Config::builder()
            .set_override("boundary", "inclusive")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(parsed.boundary, BoundaryMode::Inclusive);
    }
}
