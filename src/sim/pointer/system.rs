//! Per-frame pointer resolution

use std::any::Any;
use std::rc::Rc;

use tracing::{debug, info, trace, warn};

use super::bounds::{BoundaryMode, BoundsProvider, RenderClass};
use super::registry::{EntityId, Registry, TrackedEntity};
use super::state::{InteractionState, SharedInteraction};
use super::transform::screen_to_world;
use crate::app::input::{MouseButton, PointerAction, PointerSnapshot};
use crate::config::InteractionConfig;
use crate::sim::camera::CameraProvider;
use crate::sim::{Frame, System};

/// Default scheduling priority, above every consumer of interaction state
pub const POINTER_SYSTEM_PRIORITY: i32 = 100;

/// Outcome of one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Every tracked entity was updated
    Resolved { entities: usize },
    /// No camera injected; nothing was touched
    NoCamera,
    /// Camera view cannot map coordinates; nothing was touched
    InvalidView,
}

/// Turns pointer snapshots into per-entity interaction state
pub struct PointerSystem {
    registry: Registry,
    camera: Option<Rc<dyn CameraProvider>>,
    boundary: BoundaryMode,
    priority: i32,
    /// Last resolved world-space pointer position
    mouse: [f32; 2],
    /// Left button held after a press landed on an entity
    button_held: bool,
    degraded: bool,
}

/// Values shared by every entity within one pass
struct PassInput<'a> {
    pointer: &'a PointerSnapshot,
    world: [f32; 2],
    boundary: BoundaryMode,
}

impl PointerSystem {
    /// Creates a system without a camera; frames are skipped until one is set
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            camera: None,
            boundary: BoundaryMode::default(),
            priority: POINTER_SYSTEM_PRIORITY,
            mouse: [0.0, 0.0],
            button_held: false,
            degraded: false,
        }
    }

    /// Creates a system bound to a camera
    pub fn with_camera(camera: Rc<dyn CameraProvider>) -> Self {
        let mut system = Self::new();
        system.camera = Some(camera);
        system
    }

    /// Builder method to apply hit-test and scheduling configuration
    pub fn with_config(mut self, config: &InteractionConfig) -> Self {
        self.boundary = config.hit_test.boundary;
        self.priority = config.scheduler.pointer_priority;
        self
    }

    /// Builder method to set the edge convention
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn set_camera(&mut self, camera: Rc<dyn CameraProvider>) {
        self.camera = Some(camera);
    }

    pub fn clear_camera(&mut self) {
        self.camera = None;
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    /// Starts reporting to an entity. Call between frames.
    pub fn add(
        &mut self,
        entity: EntityId,
        state: SharedInteraction,
        bounds: Option<Box<dyn BoundsProvider>>,
        render_class: Option<RenderClass>,
    ) {
        self.registry.add(entity, state, bounds, render_class);
    }

    /// Stops reporting to an entity; absent entities are ignored. Call between frames.
    pub fn remove(&mut self, entity: EntityId) -> bool {
        self.registry.remove(entity)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// World-space pointer position from the last resolved frame
    pub fn mouse_position(&self) -> [f32; 2] {
        self.mouse
    }

    /// Whether a drag-capable left press is currently held
    pub fn is_button_held(&self) -> bool {
        self.button_held
    }

    /// Clears pointer position and the held-button flag
    pub fn reset(&mut self) {
        self.mouse = [0.0, 0.0];
        self.button_held = false;
    }

    /// Runs one resolution pass over every tracked entity
    pub fn resolve(&mut self, pointer: &PointerSnapshot) -> FrameStatus {
        let Some(camera) = &self.camera else {
            self.report_degraded("no camera available");
            return FrameStatus::NoCamera;
        };

        let view = camera.view();
        if let Err(e) = view.validate() {
            let reason = e.to_string();
            self.report_degraded(&reason);
            return FrameStatus::InvalidView;
        }

        if self.degraded {
            info!("Pointer resolution resumed");
            self.degraded = false;
        }

        self.mouse = screen_to_world(pointer.position, &view);
        let input = PassInput {
            pointer,
            world: self.mouse,
            boundary: self.boundary,
        };

        for record in self.registry.iter() {
            let Ok(mut state) = record.state.try_borrow_mut() else {
                warn!(entity = %record.entity, "Interaction state borrowed elsewhere, entity skipped this frame");
                continue;
            };
            resolve_entity(record, &mut state, &input, &mut self.button_held);
        }

        // Any left release ends every drag, even one whose entity is gone
        if pointer.is_release(MouseButton::Left) {
            self.button_held = false;
        }

        trace!(
            world_x = self.mouse[0],
            world_y = self.mouse[1],
            action = ?pointer.action,
            entities = self.registry.len(),
            "Pointer frame resolved"
        );

        FrameStatus::Resolved {
            entities: self.registry.len(),
        }
    }

    fn report_degraded(&mut self, reason: &str) {
        if self.degraded {
            debug!(reason, "Pointer frame skipped");
        } else {
            warn!(reason, "Pointer system cannot run, frame skipped");
            self.degraded = true;
        }
    }
}

impl Default for PointerSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_entity(
    record: &TrackedEntity,
    state: &mut InteractionState,
    input: &PassInput<'_>,
    button_held: &mut bool,
) {
    let pointer = input.pointer;

    state.begin_frame();
    state.modifier = pointer.modifiers;

    if state.track {
        // Followers (e.g. a placement ghost) need the position even off-bounds
        [state.mouse_x, state.mouse_y] = input.world;
    }

    if let Some(bounds) = &record.bounds {
        let cursor = if record.uses_screen_space() {
            pointer.position
        } else {
            input.world
        };

        let inside = bounds.aabb().contains(cursor, input.boundary);
        if state.track || state.started_dragging || inside {
            state.enter = !state.hovered;
            state.hovered = true;
            state.released = false;

            if !state.track {
                [state.mouse_x, state.mouse_y] = cursor;
            }

            match (pointer.action, pointer.button) {
                (PointerAction::Press, MouseButton::Left) => {
                    state.started_dragging = true;
                    state.clicked = true;
                    *button_held = true;
                    debug!(entity = %record.entity, x = cursor[0], y = cursor[1], "Clicked");
                }
                (PointerAction::Press, MouseButton::Right) => {
                    state.right_clicked = true;
                    debug!(entity = %record.entity, "Right clicked");
                }
                (PointerAction::Release, MouseButton::Left) => state.released = true,
                (PointerAction::Release, MouseButton::Right) => state.right_released = true,
                (PointerAction::Move, _) if *button_held && state.started_dragging => {
                    state.dragged = true;
                }
                _ => {}
            }

            if state.enter {
                trace!(entity = %record.entity, "Pointer entered");
            }
        } else {
            if state.hovered {
                state.leave = true;
                trace!(entity = %record.entity, "Pointer left");
            }
            state.hovered = false;
        }
    }

    if pointer.is_release(MouseButton::Left) {
        if state.started_dragging {
            debug!(entity = %record.entity, "Drag ended");
        }
        state.dragged = false;
        state.started_dragging = false;
    }
}

impl System for PointerSystem {
    fn name(&self) -> &str {
        "pointer"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn update(&mut self, frame: &Frame) {
        self.resolve(&frame.pointer);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::app::input::Modifiers;
    use crate::sim::camera::{Camera, Viewport};
    use crate::sim::pointer::Aabb;

    fn system() -> PointerSystem {
        PointerSystem::with_camera(Rc::new(Camera::new(Viewport::uniform(800.0, 600.0))))
    }

    fn boxed(aabb: Aabb) -> Option<Box<dyn BoundsProvider>> {
        Some(Box::new(aabb))
    }

    #[test]
    fn test_missing_camera_skips_frame() {
        let mut system = PointerSystem::new();
        let state = InteractionState::tracking().shared();
        system.add(EntityId(1), state.clone(), None, None);

        let status = system.resolve(&PointerSnapshot::moved(10.0, 10.0));
        assert_eq!(status, FrameStatus::NoCamera);
        assert_eq!(state.borrow().mouse_position(), [0.0, 0.0]);

        // Second skipped frame stays degraded without failing
        assert_eq!(system.resolve(&PointerSnapshot::at(0.0, 0.0)), FrameStatus::NoCamera);
    }

    #[test]
    fn test_invalid_view_skips_frame_until_fixed() {
        let camera = Rc::new(Cell::new(Camera::new(Viewport::new([800.0, 600.0], [0.0, 0.0]))));
        let mut system = PointerSystem::with_camera(camera.clone());
        assert_eq!(system.resolve(&PointerSnapshot::at(1.0, 1.0)), FrameStatus::InvalidView);

        let mut fixed = camera.get();
        fixed.resize_window(800.0, 600.0);
        camera.set(fixed);
        assert_eq!(
            system.resolve(&PointerSnapshot::at(1.0, 1.0)),
            FrameStatus::Resolved { entities: 0 }
        );
        assert_eq!(system.mouse_position(), [1.0, 1.0]);
    }

    #[test]
    fn test_entity_without_bounds_only_gets_modifiers() {
        let mut system = system();
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state.clone(), None, None);

        let frame = PointerSnapshot::press(5.0, 5.0, MouseButton::Left).with_modifiers(Modifiers::ALT);
        system.resolve(&frame);

        let expected = InteractionState {
            modifier: Modifiers::ALT,
            ..InteractionState::default()
        };
        assert_eq!(*state.borrow(), expected);
    }

    #[test]
    fn test_modifiers_reported_while_not_hovered() {
        let mut system = system();
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state.clone(), boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])), None);

        system.resolve(&PointerSnapshot::moved(500.0, 500.0).with_modifiers(Modifiers::CONTROL));
        let state = state.borrow();
        assert!(!state.hovered);
        assert_eq!(state.modifier, Modifiers::CONTROL);
    }

    #[test]
    fn test_right_button_does_not_start_drag() {
        let mut system = system();
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state.clone(), boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])), None);

        system.resolve(&PointerSnapshot::press(5.0, 5.0, MouseButton::Right));
        assert!(state.borrow().right_clicked);
        assert!(!state.borrow().is_drag_origin());
        assert!(!system.is_button_held());

        system.resolve(&PointerSnapshot::release(5.0, 5.0, MouseButton::Right));
        assert!(state.borrow().right_released);
        assert!(!state.borrow().right_clicked);
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let mut system = system();
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state.clone(), boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])), None);

        system.resolve(&PointerSnapshot::press(50.0, 50.0, MouseButton::Left));
        assert!(!state.borrow().clicked);
        assert!(!system.is_button_held());

        system.resolve(&PointerSnapshot::moved(5.0, 5.0));
        let state = state.borrow();
        assert!(state.enter);
        assert!(!state.dragged);
    }

    #[test]
    fn test_left_release_clears_held_flag_without_entities() {
        let mut system = system();
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state, boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])), None);
        system.resolve(&PointerSnapshot::press(5.0, 5.0, MouseButton::Left));
        assert!(system.is_button_held());

        system.remove(EntityId(1));
        system.resolve(&PointerSnapshot::release(5.0, 5.0, MouseButton::Left));
        assert!(!system.is_button_held());
    }

    #[test]
    fn test_borrowed_state_is_skipped() {
        let mut system = system();
        let state = InteractionState::tracking().shared();
        system.add(EntityId(1), state.clone(), None, None);

        let guard = state.borrow();
        assert_eq!(
            system.resolve(&PointerSnapshot::moved(3.0, 4.0)),
            FrameStatus::Resolved { entities: 1 }
        );
        assert_eq!(guard.mouse_position(), [0.0, 0.0]);
        drop(guard);

        system.resolve(&PointerSnapshot::moved(3.0, 4.0));
        assert_eq!(state.borrow().mouse_position(), [3.0, 4.0]);
    }

    #[test]
    fn test_inclusive_boundary_counts_edges() {
        let mut system = system().with_boundary(BoundaryMode::Inclusive);
        let state = InteractionState::new().shared();
        system.add(EntityId(1), state.clone(), boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])), None);

        system.resolve(&PointerSnapshot::moved(10.0, 10.0));
        assert!(state.borrow().hovered);
    }

    #[test]
    fn test_reset_clears_system_state() {
        let mut system = system();
        system.add(
            EntityId(1),
            InteractionState::new().shared(),
            boxed(Aabb::new([0.0, 0.0], [10.0, 10.0])),
            None,
        );
        system.resolve(&PointerSnapshot::press(5.0, 5.0, MouseButton::Left));
        assert!(system.is_button_held());

        system.reset();
        assert!(!system.is_button_held());
        assert_eq!(system.mouse_position(), [0.0, 0.0]);
    }

    #[test]
    fn test_config_sets_priority_and_boundary() {
        let mut config = InteractionConfig::default();
        config.scheduler.pointer_priority = 500;
        config.hit_test.boundary = BoundaryMode::Inclusive;

        let system = PointerSystem::new().with_config(&config);
        assert_eq!(System::priority(&system), 500);
        assert_eq!(system.boundary, BoundaryMode::Inclusive);
    }
}
