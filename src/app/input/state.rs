//! Per-frame pointer snapshot

use bitflags::bitflags;

/// What the pointer did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerAction {
    /// No pointer event this frame
    #[default]
    Neutral,
    Press,
    Release,
    Move,
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    /// Carried through, never changes interaction state
    Middle,
}

impl MouseButton {
    /// Maps a winit button, ignoring back/forward/other buttons
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

bitflags! {
    /// Keyboard modifiers held while the pointer event happened
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const SHIFT = 0x0001;
        const CONTROL = 0x0002;
        const ALT = 0x0004;
        const SUPER = 0x0008;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Self::empty();
        modifiers.set(Self::SHIFT, state.shift_key());
        modifiers.set(Self::CONTROL, state.control_key());
        modifiers.set(Self::ALT, state.alt_key());
        modifiers.set(Self::SUPER, state.super_key());
        modifiers
    }
}

/// Raw pointer state snapshot for a single frame
///
/// `position` is in physical window pixels, exactly as the windowing layer
/// reported it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    pub position: [f32; 2],
    pub action: PointerAction,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl PointerSnapshot {
    /// Pointer resting at a position with no event
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: [x, y],
            ..Self::default()
        }
    }

    /// Button pressed at a position
    pub fn press(x: f32, y: f32, button: MouseButton) -> Self {
        Self {
            action: PointerAction::Press,
            button,
            ..Self::at(x, y)
        }
    }

    /// Button released at a position
    pub fn release(x: f32, y: f32, button: MouseButton) -> Self {
        Self {
            action: PointerAction::Release,
            button,
            ..Self::at(x, y)
        }
    }

    /// Pointer moved to a position
    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Move,
            ..Self::at(x, y)
        }
    }

    /// Builder method to attach held modifiers
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns true if this frame carries a press of `button`
    pub fn is_press(&self, button: MouseButton) -> bool {
        self.action == PointerAction::Press && self.button == button
    }

    /// Returns true if this frame carries a release of `button`
    pub fn is_release(&self, button: MouseButton) -> bool {
        self.action == PointerAction::Release && self.button == button
    }
}
