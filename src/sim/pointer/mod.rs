//! Pointer → entity interaction
//!
//! Once per frame, before anything reads interaction state:
//! 1. The pointer is mapped from window pixels into world space
//! 2. Every tracked entity is reset, hit-tested and run through the
//!    hover / click / drag state machine
//!
//! Screen-fixed entities (HUD, overlays) skip the camera and are tested
//! against raw window coordinates.
//!
//! ```text
//!            enter                 left press
//!   Idle ────────────▶ Hovered ────────────────▶ Dragging
//!    ▲                  │   ▲                      │
//!    └──────────────────┘   └──── left release ────┘
//!           leave          (pinned as hovered while dragging)
//! ```

mod bounds;
mod registry;
mod state;
mod system;
pub mod transform;

pub use bounds::{Aabb, BoundaryMode, BoundsProvider, RenderClass};
pub use registry::{EntityId, Registry, TrackedEntity};
pub use state::{InteractionState, SharedInteraction};
pub use system::{FrameStatus, POINTER_SYSTEM_PRIORITY, PointerSystem};
