//! Raw input collection from winit events

use super::state::{Modifiers, MouseButton, PointerAction, PointerSnapshot};
use winit::event::{ElementState, WindowEvent};

/// Folds winit events into one `PointerSnapshot` per frame
///
/// A button event beats cursor motion within the same frame, and the last
/// button event wins, so a click is never masked by the motion that follows it.
/// The one exception is a left release, which no later button event replaces.
#[derive(Debug, Default)]
pub struct InputCollector {
    frame: PointerSnapshot,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved([position.x as f32, position.y as f32]);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = MouseButton::from_winit(*button) {
                    self.button_input(*state == ElementState::Pressed, button);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state().into());
            }

            _ => {}
        }
    }

    /// Records cursor motion in physical window pixels
    pub fn cursor_moved(&mut self, position: [f32; 2]) {
        self.frame.position = position;
        if self.frame.action == PointerAction::Neutral {
            self.frame.action = PointerAction::Move;
        }
    }

    /// Records a button transition
    ///
    /// A pending left release holds for the rest of the frame so a drag
    /// always ends, even when another press follows it before the tick.
    pub fn button_input(&mut self, pressed: bool, button: MouseButton) {
        if self.frame.is_release(MouseButton::Left) {
            return;
        }
        self.frame.action = if pressed {
            PointerAction::Press
        } else {
            PointerAction::Release
        };
        self.frame.button = button;
    }

    /// Records the current modifier set
    pub fn modifiers_changed(&mut self, modifiers: Modifiers) {
        self.frame.modifiers = modifiers;
    }

    /// Snapshot being accumulated for the current frame
    pub fn peek(&self) -> &PointerSnapshot {
        &self.frame
    }

    /// Takes this frame's snapshot and starts the next frame
    ///
    /// Position, button and modifiers carry over; the action resets to
    /// `Neutral` so a press is reported exactly once.
    pub fn take_frame(&mut self) -> PointerSnapshot {
        let frame = self.frame;
        self.frame.action = PointerAction::Neutral;
        frame
    }
}
