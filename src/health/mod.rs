//! Self checks for startup and CI
//!
//! Each check exercises one subsystem headlessly and reports pass, warn or
//! fail. The demo binary runs them with `--health`.
//!
//! # Example
//!
//! ```no_run
//! use pointer_pick::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(PointerSessionCheck::new())
//!     .run();
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckLog, CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs the built-in checks
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::CameraCheck::new())
        .add_check(checks::PointerSessionCheck::new())
        .run()
}
