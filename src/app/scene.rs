//! Demo scene
//!
//! A screen-fixed HUD button, a crate that can be dragged around the world
//! and a placement ghost that tracks the pointer. `DemoScene` runs below the
//! pointer system and reads the state it wrote this frame.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, trace};

use super::cursor::Cursor;
use super::input::{Modifiers, MouseButton};
use crate::sim::pointer::{
    Aabb, EntityId, InteractionState, PointerSystem, RenderClass, SharedInteraction,
};
use crate::sim::{Frame, System};

pub const HUD_BUTTON: EntityId = EntityId(1);
pub const CRATE: EntityId = EntityId(2);
pub const GHOST: EntityId = EntityId(3);

const CRATE_SIZE: f32 = 64.0;

/// Consumer system for the demo entities
pub struct DemoScene {
    button: SharedInteraction,
    crate_state: SharedInteraction,
    ghost: SharedInteraction,
    crate_position: Rc<Cell<[f32; 2]>>,
    /// Crate center minus pointer, captured on the press that starts a drag
    grab_offset: [f32; 2],
    cursor: Rc<Cell<Cursor>>,
    presses: u32,
    /// World positions of placed markers
    markers: Vec<[f32; 2]>,
}

impl DemoScene {
    /// Registers the scene's entities with `pointer` and returns the consumer
    pub fn install(
        pointer: &mut PointerSystem,
        crate_center: [f32; 2],
        cursor: Rc<Cell<Cursor>>,
    ) -> Self {
        let button = InteractionState::new().shared();
        pointer.add(
            HUD_BUTTON,
            button.clone(),
            Some(Box::new(Aabb::from_rect(16.0, 16.0, 160.0, 48.0))),
            Some(RenderClass::ScreenFixed),
        );

        let crate_state = InteractionState::new().shared();
        let crate_position = Rc::new(Cell::new(crate_center));
        let live_position = crate_position.clone();
        pointer.add(
            CRATE,
            crate_state.clone(),
            Some(Box::new(move || {
                let [x, y] = live_position.get();
                let half = CRATE_SIZE / 2.0;
                Aabb::from_rect(x - half, y - half, CRATE_SIZE, CRATE_SIZE)
            })),
            Some(RenderClass::World),
        );

        let ghost = InteractionState::tracking().shared();
        pointer.add(GHOST, ghost.clone(), None, None);

        Self {
            button,
            crate_state,
            ghost,
            crate_position,
            grab_offset: [0.0, 0.0],
            cursor,
            presses: 0,
            markers: Vec::new(),
        }
    }

    /// Current world position of the crate's center
    pub fn crate_position(&self) -> [f32; 2] {
        self.crate_position.get()
    }

    /// Number of HUD button presses so far
    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn markers(&self) -> &[[f32; 2]] {
        &self.markers
    }
}

impl System for DemoScene {
    fn name(&self) -> &str {
        "demo_scene"
    }

    fn update(&mut self, frame: &Frame) {
        let button = self.button.borrow();
        if button.enter {
            debug!(entity = %HUD_BUTTON, "Hovering HUD button");
        }
        if button.clicked {
            self.presses += 1;
            info!(presses = self.presses, "HUD button pressed");
        }

        let crate_state = self.crate_state.borrow();
        let [mx, my] = crate_state.mouse_position();
        let [cx, cy] = self.crate_position.get();
        if crate_state.clicked {
            self.grab_offset = [cx - mx, cy - my];
            debug!(entity = %CRATE, x = cx, y = cy, "Crate picked up");
        }
        if crate_state.dragged {
            let moved = [mx + self.grab_offset[0], my + self.grab_offset[1]];
            self.crate_position.set(moved);
            trace!(entity = %CRATE, x = moved[0], y = moved[1], tick = frame.tick, "Crate moved");
        }
        if crate_state.released {
            info!(entity = %CRATE, x = cx, y = cy, "Crate dropped");
        }

        // The ghost has no bounds, so placement reads the raw press
        let ghost = self.ghost.borrow();
        let placing = ghost.modifier.contains(Modifiers::SHIFT);
        if placing
            && frame.pointer.is_press(MouseButton::Left)
            && !crate_state.clicked
            && !button.clicked
        {
            let [gx, gy] = ghost.mouse_position();
            self.markers.push([gx, gy]);
            info!(x = gx, y = gy, markers = self.markers.len(), "Marker placed");
        }

        let cursor = if crate_state.is_drag_origin() || crate_state.hovered || button.hovered {
            Cursor::Hand
        } else if placing {
            Cursor::Crosshair
        } else {
            Cursor::Arrow
        };
        self.cursor.set(cursor);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
