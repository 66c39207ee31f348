//! Tracked entity registry

use std::fmt;

use tracing::debug;

use super::bounds::{BoundsProvider, RenderClass};
use super::state::SharedInteraction;

/// Entity identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An entity the pointer system reports to
pub struct TrackedEntity {
    pub entity: EntityId,
    pub state: SharedInteraction,
    /// Absent: never hit-tested, only tracking behavior applies
    pub bounds: Option<Box<dyn BoundsProvider>>,
    pub render_class: Option<RenderClass>,
}

impl TrackedEntity {
    /// Whether hit-testing and reporting use raw window coordinates
    pub fn uses_screen_space(&self) -> bool {
        self.render_class.is_some_and(RenderClass::is_screen_fixed)
    }
}

impl fmt::Debug for TrackedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackedEntity")
            .field("entity", &self.entity)
            .field("has_bounds", &self.bounds.is_some())
            .field("render_class", &self.render_class)
            .finish()
    }
}

/// Ordered list of tracked entities
///
/// Registration order is resolution order. Duplicate identities are not
/// rejected; each registration is its own record.
#[derive(Debug, Default)]
pub struct Registry {
    entities: Vec<TrackedEntity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tracked record
    pub fn add(
        &mut self,
        entity: EntityId,
        state: SharedInteraction,
        bounds: Option<Box<dyn BoundsProvider>>,
        render_class: Option<RenderClass>,
    ) {
        debug!(
            entity = %entity,
            has_bounds = bounds.is_some(),
            ?render_class,
            "Tracking entity"
        );
        self.entities.push(TrackedEntity {
            entity,
            state,
            bounds,
            render_class,
        });
    }

    /// Removes the first record for `entity`
    ///
    /// Returns false (and changes nothing) if the entity is not tracked.
    pub fn remove(&mut self, entity: EntityId) -> bool {
        match self.entities.iter().position(|e| e.entity == entity) {
            Some(index) => {
                self.entities.remove(index);
                debug!(entity = %entity, "Stopped tracking entity");
                true
            }
            None => {
                debug!(entity = %entity, "Remove ignored, entity not tracked");
                false
            }
        }
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.iter().any(|e| e.entity == entity)
    }

    /// Shared state of the first record for `entity`
    pub fn state(&self, entity: EntityId) -> Option<SharedInteraction> {
        self.entities
            .iter()
            .find(|e| e.entity == entity)
            .map(|e| e.state.clone())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedEntity> {
        self.entities.iter()
    }

    /// Tracked identities in resolution order
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.entity).collect()
    }
}
