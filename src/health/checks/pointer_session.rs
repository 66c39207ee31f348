//! Scripted pointer session check

use std::rc::Rc;

use crate::app::input::{MouseButton, PointerSnapshot};
use crate::health::check::{CheckLog, CheckResult, SystemCheck};
use crate::sim::camera::{Camera, Viewport};
use crate::sim::pointer::{Aabb, EntityId, FrameStatus, InteractionState, PointerSystem};

/// Drives a pointer system through hover, click, drag and release
pub struct PointerSessionCheck;

impl PointerSessionCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PointerSessionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for PointerSessionCheck {
    fn name(&self) -> &'static str {
        "Pointer session"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Runs enter, click, drag outside, release and leave against one entity")
    }

    fn check(&self) -> CheckResult {
        let mut log = CheckLog::new();

        let mut pointer = PointerSystem::new();
        log.expect(
            pointer.resolve(&PointerSnapshot::at(0.0, 0.0)) == FrameStatus::NoCamera,
            "Frame without a camera is skipped",
        );

        pointer.set_camera(Rc::new(Camera::new(Viewport::uniform(800.0, 600.0))));
        let state = InteractionState::new().shared();
        pointer.add(
            EntityId(1),
            state.clone(),
            Some(Box::new(Aabb::from_rect(100.0, 100.0, 50.0, 50.0))),
            None,
        );

        pointer.resolve(&PointerSnapshot::moved(120.0, 120.0));
        log.expect(state.borrow().enter, "Moving inside reports enter");

        pointer.resolve(&PointerSnapshot::press(120.0, 120.0, MouseButton::Left));
        log.expect(
            state.borrow().clicked && pointer.is_button_held(),
            "Left press clicks and holds",
        );

        pointer.resolve(&PointerSnapshot::moved(400.0, 400.0));
        {
            let s = state.borrow();
            log.expect(s.dragged && s.hovered, "Drag survives leaving the bounds");
            log.expect(
                s.mouse_position() == [400.0, 400.0],
                "Dragged entity follows the pointer",
            );
        }

        pointer.resolve(&PointerSnapshot::release(400.0, 400.0, MouseButton::Left));
        log.expect(
            !state.borrow().is_drag_origin() && !pointer.is_button_held(),
            "Left release ends the drag",
        );

        pointer.resolve(&PointerSnapshot::moved(401.0, 401.0));
        log.expect(
            state.borrow().leave && !state.borrow().hovered,
            "Next frame outside reports leave",
        );

        log.finish(
            "Hover, click and drag behave",
            "Pointer session finished with warnings",
            "Pointer session misbehaved",
        )
    }
}
