//! Cursor shapes
//!
//! The small set of shapes interaction code asks for, mapped onto the
//! window system's cursor icons.

use winit::window::{CursorIcon, Window};

/// Cursor shape requested by interaction code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Hidden
    None,
    #[default]
    Arrow,
    Crosshair,
    /// Something clickable or draggable is under the pointer
    Hand,
    /// Text entry
    IBeam,
    /// Horizontal resize
    HResize,
    /// Vertical resize
    VResize,
}

impl Cursor {
    /// Window system icon for this shape; `None` for the hidden cursor
    pub fn icon(self) -> Option<CursorIcon> {
        match self {
            Cursor::None => None,
            Cursor::Arrow => Some(CursorIcon::Default),
            Cursor::Crosshair => Some(CursorIcon::Crosshair),
            Cursor::Hand => Some(CursorIcon::Pointer),
            Cursor::IBeam => Some(CursorIcon::Text),
            Cursor::HResize => Some(CursorIcon::EwResize),
            Cursor::VResize => Some(CursorIcon::NsResize),
        }
    }

    /// Shows this shape on the window
    pub fn apply(self, window: &Window) {
        match self.icon() {
            Some(icon) => {
                window.set_cursor_visible(true);
                window.set_cursor(icon);
            }
            None => window.set_cursor_visible(false),
        }
    }
}
