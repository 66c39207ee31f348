//! Per-entity interaction state

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::input::Modifiers;

/// Pointer interaction results for one entity, rewritten every frame
///
/// Only `track`, `hovered` and the drag-origin flag survive from one frame
/// to the next; everything else describes this frame alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Left button pressed over the entity this frame
    pub clicked: bool,
    /// Left button released over the entity this frame
    pub released: bool,
    pub right_clicked: bool,
    pub right_released: bool,
    /// Pointer is over the entity, or the entity is tracking or being dragged
    pub hovered: bool,
    /// Hover began this frame
    pub enter: bool,
    /// Hover ended this frame
    pub leave: bool,
    /// Pointer moved while a drag that started on this entity is held
    pub dragged: bool,
    /// Last pointer position in this entity's coordinate space
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Caller-set: always receive the pointer position and count as hit.
    /// Costly with many entities; keep it to the few that need it.
    pub track: bool,
    /// Modifiers held this frame, reported whether or not hovered
    pub modifier: Modifiers,
    pub(crate) started_dragging: bool,
}

/// Interaction state shared between its entity and the pointer system
pub type SharedInteraction = Rc<RefCell<InteractionState>>;

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State that follows the pointer regardless of bounds
    pub fn tracking() -> Self {
        Self {
            track: true,
            ..Self::default()
        }
    }

    /// Wraps the state for registration
    pub fn shared(self) -> SharedInteraction {
        Rc::new(RefCell::new(self))
    }

    /// True from a left press on this entity until the next left release
    pub fn is_drag_origin(&self) -> bool {
        self.started_dragging
    }

    /// Pointer position as a pair
    pub fn mouse_position(&self) -> [f32; 2] {
        [self.mouse_x, self.mouse_y]
    }

    /// Resets every per-frame field, keeping `track`, `hovered` and the
    /// drag-origin flag
    pub(crate) fn begin_frame(&mut self) {
        *self = Self {
            track: self.track,
            hovered: self.hovered,
            started_dragging: self.started_dragging,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_keeps_only_persistent_fields() {
        let mut state = InteractionState {
            clicked: true,
            released: true,
            right_clicked: true,
            right_released: true,
            hovered: true,
            enter: true,
            leave: true,
            dragged: true,
            mouse_x: 4.0,
            mouse_y: 2.0,
            track: true,
            modifier: Modifiers::SHIFT,
            started_dragging: true,
        };

        state.begin_frame();

        assert_eq!(
            state,
            InteractionState {
                track: true,
                hovered: true,
                started_dragging: true,
                ..InteractionState::default()
            }
        );
    }

    #[test]
    fn test_begin_frame_on_fresh_state_is_noop() {
        let mut state = InteractionState::new();
        state.begin_frame();
        assert_eq!(state, InteractionState::default());
    }

    #[test]
    fn test_tracking_constructor() {
        let state = InteractionState::tracking();
        assert!(state.track);
        assert!(!state.is_drag_origin());
        assert_eq!(state.mouse_position(), [0.0, 0.0]);
    }
}
