//! Main application handler for the pointer demo

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::cursor::Cursor;
use super::input::InputCollector;
use super::scene::DemoScene;
use super::window::{viewport_from_config, window_attributes_from_config};
use crate::config::InteractionConfig;
use crate::sim::Scheduler;
use crate::sim::camera::Camera;
use crate::sim::pointer::PointerSystem;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const PAN_STEP: f32 = 16.0;
const ROTATE_STEP: f32 = 15.0;

/// Pointer demo application
pub struct App {
    config: InteractionConfig,
    window: Option<Window>,
    camera: Rc<Cell<Camera>>,
    scheduler: Scheduler,
    input_collector: InputCollector,
    /// Shape requested by the scene this frame
    cursor: Rc<Cell<Cursor>>,
    /// Shape currently shown on the window
    shown_cursor: Option<Cursor>,
    last_update: Option<Instant>,
}

impl App {
    /// Creates the demo application with the provided configuration
    pub fn new(config: InteractionConfig) -> Self {
        info!(profile = %config.profile, "Starting pointer demo");
        info!(?config.window, boundary = ?config.hit_test.boundary, "Configuration");

        let viewport = viewport_from_config(&config.window);
        let camera = Rc::new(Cell::new(Camera::new(viewport)));
        let cursor = Rc::new(Cell::new(Cursor::default()));

        let mut pointer = PointerSystem::with_camera(camera.clone()).with_config(&config);
        let center = camera.get().position();
        let scene = DemoScene::install(&mut pointer, center, cursor.clone());

        let mut scheduler = Scheduler::new();
        scheduler.add_system(Box::new(pointer));
        scheduler.add_system(Box::new(scene));

        Self {
            config,
            window: None,
            camera,
            scheduler,
            input_collector: InputCollector::new(),
            cursor,
            shown_cursor: None,
            last_update: None,
        }
    }

    /// Creates the demo application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = InteractionConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            InteractionConfig::default()
        });
        Self::new(config)
    }

    fn update_camera(&self, update: impl FnOnce(&mut Camera)) {
        let mut camera = self.camera.get();
        update(&mut camera);
        self.camera.set(camera);
        debug!(
            x = camera.position()[0],
            y = camera.position()[1],
            zoom = camera.zoom(),
            rotation = camera.rotation_degrees(),
            "Camera moved"
        );
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Space => {
                self.scheduler.toggle_pause();
                info!(paused = self.scheduler.is_paused(), "Pause toggled");
            }
            KeyCode::ArrowLeft => self.update_camera(|c| c.pan([-PAN_STEP, 0.0])),
            KeyCode::ArrowRight => self.update_camera(|c| c.pan([PAN_STEP, 0.0])),
            KeyCode::ArrowUp => self.update_camera(|c| c.pan([0.0, -PAN_STEP])),
            KeyCode::ArrowDown => self.update_camera(|c| c.pan([0.0, PAN_STEP])),
            KeyCode::KeyQ => self.update_camera(|c| c.rotate(-ROTATE_STEP)),
            KeyCode::KeyE => self.update_camera(|c| c.rotate(ROTATE_STEP)),
            KeyCode::KeyR => {
                let viewport = *self.camera.get().viewport();
                self.update_camera(|c| *c = Camera::new(viewport));
            }
            _ => {}
        }
    }

    /// Runs one frame
    ///
    /// While paused the collector keeps folding events, so a release made
    /// during the pause reaches the pointer system on the first tick after.
    fn step(&mut self, delta_time: f32) {
        if self.scheduler.is_paused() {
            return;
        }

        // One snapshot per frame; the pointer system runs first inside the tick
        let pointer = self.input_collector.take_frame();
        self.scheduler.tick(delta_time, pointer);
        self.apply_cursor();
    }

    fn log_summary(&self) {
        if let Some(scene) = self.scheduler.get_system_typed::<DemoScene>("demo_scene") {
            let [x, y] = scene.crate_position();
            info!(
                frames = self.scheduler.tick_count(),
                presses = scene.presses(),
                markers = scene.markers().len(),
                crate_x = x,
                crate_y = y,
                "Session summary"
            );
        }
    }

    fn apply_cursor(&mut self) {
        let requested = self.cursor.get();
        if self.shown_cursor == Some(requested) {
            return;
        }
        if let Some(window) = &self.window {
            requested.apply(window);
            self.shown_cursor = Some(requested);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.update_camera(|c| c.resize_window(size.width as f32, size.height as f32));
                self.window = Some(window);
                self.last_update = Some(Instant::now());
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(last_update) = self.last_update else {
            return;
        };

        let now = Instant::now();
        let delta_time = (now - last_update).as_secs_f32();
        self.last_update = Some(now);

        self.step(delta_time);

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + FRAME_INTERVAL));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Feed every event to the collector before anything else sees it
        self.input_collector.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                self.log_summary();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.update_camera(|c| c.resize_window(size.width as f32, size.height as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / 40.0,
                };
                if lines != 0.0 {
                    let scale = if lines > 0.0 { 0.9 } else { 1.0 / 0.9 };
                    self.update_camera(|c| c.zoom_by(scale));
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code);
                }
            }
            _ => {}
        }
    }
}
