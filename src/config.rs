//! Runtime configuration
//!
//! Supports multiple profiles (debug, release) layered with environment
//! overrides. Every section has defaults, so an empty environment loads.

use std::path::Path;

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};

use crate::error::InteractionResult;
use crate::sim::pointer::{BoundaryMode, POINTER_SYSTEM_PRIORITY};

/// Hit-testing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestConfig {
    /// Whether a pointer exactly on an edge counts as inside
    pub boundary: BoundaryMode,
}

/// Frame scheduler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Priority of the pointer pass; must stay above every consumer
    pub pointer_priority: i32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            pointer_priority: POINTER_SYSTEM_PRIORITY,
        }
    }
}

/// Window configuration for the demo application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width, also used as the logical game width
    pub width: f64,
    /// Window height, also used as the logical game height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pointer Pick".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info,pointer_pick=debug".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub hit_test: HitTestConfig,
    pub scheduler: SchedulerConfig,
    pub window: WindowConfig,
    pub log: LogConfig,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            profile: "debug".to_string(),
            hit_test: HitTestConfig::default(),
            scheduler: SchedulerConfig::default(),
            window: WindowConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl InteractionConfig {
    /// Loads configuration for a profile
    ///
    /// Sources, later ones winning:
    /// 1. config/{profile}.toml (optional)
    /// 2. Environment variables with prefix APP_ (e.g., APP_HIT_TEST__BOUNDARY=inclusive)
    pub fn load(profile: &str) -> InteractionResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(&format!("config/{}", profile)).required(false));
        Self::finish(builder, profile)
    }

    /// Loads configuration from an explicit file, still honoring APP_ overrides
    ///
    /// The profile is taken from the file stem.
    pub fn load_file(path: &Path) -> InteractionResult<Self> {
        let profile = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        let builder = Config::builder().add_source(File::from(path).required(true));
        Self::finish(builder, &profile)
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "debug" if not set
    pub fn load_from_env() -> InteractionResult<Self> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile)
    }

    fn finish(builder: ConfigBuilder<DefaultState>, profile: &str) -> InteractionResult<Self> {
        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        let config = builder
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
