//! Frame-stepped simulation
//!
//! Runs registered systems once per frame in priority order.

pub mod camera;
pub mod pointer;

use std::any::Any;

use tracing::debug;

use crate::app::input::PointerSnapshot;

/// Everything a system sees for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame {
    /// Scaled time elapsed since the previous frame, in seconds
    pub delta_time: f32,
    /// Frame number, starting at 1
    pub tick: u64,
    /// Pointer input collected since the previous frame
    pub pointer: PointerSnapshot,
}

/// Trait that all frame systems must implement
///
/// Priority ranges:
/// - 100+: Input resolution (the pointer system sits at 100)
/// - 0-99: Game logic reading input results
/// - below 0: Late bookkeeping
pub trait System {
    /// Returns the name/identifier of this system
    fn name(&self) -> &str;

    /// Higher priorities run earlier in the frame
    fn priority(&self) -> i32 {
        0
    }

    /// Advances the system by one frame
    fn update(&mut self, frame: &Frame);

    /// Returns true if the system should run this frame
    fn is_active(&self) -> bool {
        true
    }

    /// Allows downcasting to concrete types for specific operations
    fn as_any(&self) -> &dyn Any;

    /// Mutable version of as_any for type-safe mutable access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Priority-ordered system runner
pub struct Scheduler {
    /// Total number of frames run
    tick_count: u64,
    /// Total simulated time in seconds
    sim_time: f64,
    /// Time scale multiplier (1.0 = normal speed, 2.0 = 2x speed)
    time_scale: f32,
    paused: bool,
    /// Sorted by priority, highest first; ties keep registration order
    systems: Vec<Box<dyn System>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the time scale
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale.max(0.0);
        self
    }

    /// Registers a system at its priority
    pub fn add_system(&mut self, system: Box<dyn System>) {
        debug!(system = system.name(), priority = system.priority(), "Registering system");
        self.systems.push(system);
        // Stable sort keeps registration order among equal priorities
        self.systems.sort_by_key(|s| std::cmp::Reverse(s.priority()));
    }

    /// Removes a system by name, returning it
    pub fn remove_system(&mut self, name: &str) -> Option<Box<dyn System>> {
        let index = self.systems.iter().position(|s| s.name() == name)?;
        Some(self.systems.remove(index))
    }

    /// Runs one frame through every active system
    ///
    /// Does nothing while paused.
    pub fn tick(&mut self, delta_time: f32, pointer: PointerSnapshot) {
        if self.paused {
            return;
        }

        let scaled_delta = delta_time * self.time_scale;
        self.tick_count += 1;
        self.sim_time += scaled_delta as f64;

        let frame = Frame {
            delta_time: scaled_delta,
            tick: self.tick_count,
            pointer,
        };

        for system in &mut self.systems {
            if system.is_active() {
                system.update(&frame);
            }
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// System names in execution order
    pub fn execution_order(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    pub fn get_system(&self, name: &str) -> Option<&dyn System> {
        self.systems
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Gets a typed reference to a specific system
    ///
    /// # Example
    /// ```ignore
    /// if let Some(pointer) = scheduler.get_system_typed::<PointerSystem>("pointer") {
    ///     let [x, y] = pointer.mouse_position();
    /// }
    /// ```
    pub fn get_system_typed<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get_system(name)
            .and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Gets a mutable typed reference to a specific system
    pub fn get_system_typed_mut<T: 'static>(&mut self, name: &str) -> Option<&mut T> {
        self.systems
            .iter_mut()
            .find(|s| s.name() == name)
            .and_then(|s| s.as_any_mut().downcast_mut::<T>())
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            tick_count: 0,
            sim_time: 0.0,
            time_scale: 1.0,
            paused: false,
            systems: Vec::new(),
        }
    }
}
