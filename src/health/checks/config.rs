//! Configuration loading check

use crate::config::InteractionConfig;
use crate::health::check::{CheckLog, CheckResult, SystemCheck};

/// Checks that every profile loads and keeps the pointer pass ahead of
/// its consumers
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Checks the debug and release profiles
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates profile loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut log = CheckLog::new();

        for profile in &self.profiles {
            match InteractionConfig::load(profile) {
                Ok(config) => {
                    log.ok(format!(
                        "Profile '{}': boundary {:?}, pointer priority {}",
                        profile, config.hit_test.boundary, config.scheduler.pointer_priority
                    ));
                    // Consumers default to priority 0
                    if config.scheduler.pointer_priority <= 0 {
                        log.warn(format!(
                            "Profile '{profile}': pointer priority does not outrank default systems"
                        ));
                    }
                }
                Err(e) => log.fail(format!("Profile '{profile}': {e}")),
            }
        }

        match InteractionConfig::load_from_env() {
            Ok(config) => log.ok(format!("Environment profile '{}' loaded", config.profile)),
            Err(e) => log.warn(format!("Environment config: {e}")),
        }

        let pass = format!("{} profiles validated", self.profiles.len());
        log.finish(&pass, "Config loaded with warnings", "Failed to load one or more profiles")
    }
}
