//! Frame-by-frame pointer scenarios through the public API

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pointer_pick::app::input::{Modifiers, MouseButton, PointerSnapshot};
use pointer_pick::sim::camera::{Camera, Viewport};
use pointer_pick::sim::pointer::{
    Aabb, BoundsProvider, EntityId, FrameStatus, InteractionState, PointerSystem, RenderClass,
    SharedInteraction,
};
use pointer_pick::sim::{Frame, Scheduler, System};

const EPSILON: f32 = 1e-4;

fn camera() -> Camera {
    Camera::new(Viewport::uniform(800.0, 600.0))
}

fn pointer_with(camera: Camera) -> PointerSystem {
    PointerSystem::with_camera(Rc::new(camera))
}

fn square(min: f32, max: f32) -> Option<Box<dyn BoundsProvider>> {
    Some(Box::new(Aabb::new([min, min], [max, max])))
}

fn assert_close(actual: [f32; 2], expected: [f32; 2]) {
    assert!(
        (actual[0] - expected[0]).abs() < EPSILON && (actual[1] - expected[1]).abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_entity_without_bounds_keeps_only_modifiers() {
    let mut pointer = pointer_with(camera());
    let state = InteractionState::new().shared();
    pointer.add(EntityId(1), state.clone(), None, None);

    let frames = [
        PointerSnapshot::moved(5.0, 5.0),
        PointerSnapshot::press(5.0, 5.0, MouseButton::Left),
        PointerSnapshot::moved(50.0, 50.0).with_modifiers(Modifiers::SHIFT | Modifiers::SUPER),
    ];
    for frame in &frames {
        pointer.resolve(frame);
    }

    let mut expected = InteractionState::default();
    expected.modifier = Modifiers::SHIFT | Modifiers::SUPER;
    assert_eq!(*state.borrow(), expected);
}

#[test]
fn test_tracking_entity_follows_pointer_every_frame() {
    let mut pointer = pointer_with(camera().with_position([500.0, 400.0]));
    let with_bounds = InteractionState::tracking().shared();
    let without_bounds = InteractionState::tracking().shared();
    pointer.add(EntityId(1), with_bounds.clone(), square(0.0, 1.0), None);
    pointer.add(EntityId(2), without_bounds.clone(), None, None);

    for raw in [[0.0, 0.0], [250.0, 10.0], [799.0, 599.0]] {
        pointer.resolve(&PointerSnapshot::moved(raw[0], raw[1]));
        let world = pointer.mouse_position();
        assert_close(with_bounds.borrow().mouse_position(), world);
        assert_close(without_bounds.borrow().mouse_position(), world);
        assert!(with_bounds.borrow().hovered);
    }
}

#[test]
fn test_enter_then_leave() {
    let mut pointer = pointer_with(camera());
    let state = InteractionState::new().shared();
    pointer.add(EntityId(1), state.clone(), square(0.0, 10.0), None);

    pointer.resolve(&PointerSnapshot::moved(20.0, 20.0));
    assert!(!state.borrow().hovered);

    pointer.resolve(&PointerSnapshot::moved(5.0, 5.0));
    {
        let s = state.borrow();
        assert!(s.enter && !s.leave && s.hovered);
    }

    // Staying inside does not re-fire enter
    pointer.resolve(&PointerSnapshot::moved(6.0, 6.0));
    assert!(!state.borrow().enter);

    pointer.resolve(&PointerSnapshot::moved(20.0, 20.0));
    {
        let s = state.borrow();
        assert!(s.leave && !s.enter && !s.hovered);
    }

    pointer.resolve(&PointerSnapshot::moved(21.0, 21.0));
    assert!(!state.borrow().leave);
}

#[test]
fn test_drag_persists_outside_bounds_and_ends_on_release() {
    let mut pointer = pointer_with(camera());
    let dragged = InteractionState::new().shared();
    let bystander = InteractionState::tracking().shared();
    pointer.add(EntityId(1), dragged.clone(), square(0.0, 10.0), None);
    pointer.add(EntityId(2), bystander.clone(), square(500.0, 510.0), None);

    pointer.resolve(&PointerSnapshot::press(5.0, 5.0, MouseButton::Left));
    {
        let s = dragged.borrow();
        assert!(s.clicked);
        assert!(s.is_drag_origin());
    }
    // A tracking entity counts as hit, so it starts a drag too
    assert!(bystander.borrow().is_drag_origin());

    pointer.resolve(&PointerSnapshot::moved(50.0, 50.0));
    {
        let s = dragged.borrow();
        assert!(s.dragged);
        assert!(s.hovered);
        assert!(!s.leave);
        assert!(!s.clicked);
        assert_close(s.mouse_position(), [50.0, 50.0]);
    }

    pointer.resolve(&PointerSnapshot::release(300.0, 300.0, MouseButton::Left));
    {
        let s = dragged.borrow();
        assert!(!s.dragged);
        assert!(!s.is_drag_origin());
        assert!(s.released);
    }
    let b = bystander.borrow();
    assert!(!b.dragged);
    assert!(!b.is_drag_origin());
    assert!(!pointer.is_button_held());
}

#[test]
fn test_move_without_held_button_is_not_a_drag() {
    let mut pointer = pointer_with(camera());
    let state = InteractionState::new().shared();
    pointer.add(EntityId(1), state.clone(), square(0.0, 10.0), None);

    pointer.resolve(&PointerSnapshot::moved(5.0, 5.0));
    pointer.resolve(&PointerSnapshot::moved(6.0, 6.0));
    assert!(!state.borrow().dragged);
}

#[test]
fn test_rotation_maps_simultaneously() {
    let mut pointer = pointer_with(camera().with_rotation(90.0));
    pointer.resolve(&PointerSnapshot::moved(1.0, 0.0));
    assert_close(pointer.mouse_position(), [0.0, -1.0]);
}

#[test]
fn test_screen_fixed_entity_ignores_camera() {
    let moved_camera = camera()
        .with_position([-1000.0, 2000.0])
        .with_zoom(3.0)
        .with_rotation(45.0);
    let mut pointer = pointer_with(moved_camera);
    let hud = InteractionState::new().shared();
    let world = InteractionState::new().shared();
    pointer.add(EntityId(1), hud.clone(), square(0.0, 100.0), Some(RenderClass::ScreenFixed));
    pointer.add(EntityId(2), world.clone(), square(0.0, 100.0), Some(RenderClass::World));

    pointer.resolve(&PointerSnapshot::press(40.0, 60.0, MouseButton::Left));

    let hud = hud.borrow();
    assert!(hud.hovered && hud.clicked);
    assert_eq!(hud.mouse_position(), [40.0, 60.0]);
    assert!(!world.borrow().hovered);
}

#[test]
fn test_removing_unknown_entity_changes_nothing() {
    let mut pointer = pointer_with(camera());
    pointer.add(EntityId(1), InteractionState::new().shared(), square(0.0, 10.0), None);

    assert!(!pointer.remove(EntityId(42)));
    assert_eq!(pointer.registry().ids(), vec![EntityId(1)]);

    assert!(pointer.remove(EntityId(1)));
    assert!(!pointer.remove(EntityId(1)));
    assert_eq!(
        pointer.resolve(&PointerSnapshot::moved(1.0, 1.0)),
        FrameStatus::Resolved { entities: 0 }
    );
}

#[test]
fn test_moving_bounds_are_read_each_frame() {
    let mut pointer = pointer_with(camera());
    let position = Rc::new(Cell::new([0.0_f32, 0.0]));
    let live = position.clone();
    let state = InteractionState::new().shared();
    pointer.add(
        EntityId(1),
        state.clone(),
        Some(Box::new(move || {
            let [x, y] = live.get();
            Aabb::from_rect(x, y, 10.0, 10.0)
        })),
        None,
    );

    pointer.resolve(&PointerSnapshot::moved(105.0, 105.0));
    assert!(!state.borrow().hovered);

    position.set([100.0, 100.0]);
    pointer.resolve(&PointerSnapshot::at(105.0, 105.0));
    assert!(state.borrow().enter);
}

/// Records what the pointer system wrote before this system ran
struct Observer {
    state: SharedInteraction,
    seen: Rc<RefCell<Vec<bool>>>,
}

impl System for Observer {
    fn name(&self) -> &str {
        "observer"
    }

    fn update(&mut self, _frame: &Frame) {
        self.seen.borrow_mut().push(self.state.borrow().clicked);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_consumers_see_this_frames_state() {
    let state = InteractionState::new().shared();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let mut pointer = pointer_with(camera());
    pointer.add(EntityId(1), state.clone(), square(0.0, 10.0), None);

    let mut scheduler = Scheduler::new();
    // Registered first, still runs second
    scheduler.add_system(Box::new(Observer {
        state,
        seen: seen.clone(),
    }));
    scheduler.add_system(Box::new(pointer));

    scheduler.tick(0.016, PointerSnapshot::moved(5.0, 5.0));
    scheduler.tick(0.016, PointerSnapshot::press(5.0, 5.0, MouseButton::Left));
    scheduler.tick(0.016, PointerSnapshot::at(5.0, 5.0));

    assert_eq!(*seen.borrow(), vec![false, true, false]);
}
