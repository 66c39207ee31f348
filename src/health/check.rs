//! Core health check trait and types

use std::time::Duration;

use colored::{ColoredString, Colorize};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// Usable, but something looks off
    Warn,
    Fail,
}

impl CheckStatus {
    /// Pass or Warn
    pub fn is_ok(self) -> bool {
        !self.is_fail()
    }

    pub fn is_fail(self) -> bool {
        self == CheckStatus::Fail
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warn => "WARN",
            CheckStatus::Fail => "FAIL",
        }
    }

    /// Label colored for terminal output
    pub fn colored(self) -> ColoredString {
        match self {
            CheckStatus::Pass => self.label().green(),
            CheckStatus::Warn => self.label().yellow(),
            CheckStatus::Fail => self.label().red(),
        }
    }
}

/// Result of a check, with optional multi-line details
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
    pub details: Option<String>,
    /// Filled in by the runner
    pub duration: Duration,
}

impl CheckResult {
    pub fn new(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    pub fn pass(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(CheckStatus::Fail, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Detail lines collected while a check runs
///
/// The worst line logged decides the final status.
#[derive(Debug, Default)]
pub struct CheckLog {
    lines: Vec<String>,
    worst: Option<CheckStatus>,
}

impl CheckLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(&mut self, line: impl AsRef<str>) {
        self.push(CheckStatus::Pass, "✓", line.as_ref());
    }

    pub fn warn(&mut self, line: impl AsRef<str>) {
        self.push(CheckStatus::Warn, "⚠", line.as_ref());
    }

    pub fn fail(&mut self, line: impl AsRef<str>) {
        self.push(CheckStatus::Fail, "✗", line.as_ref());
    }

    /// Logs `what` as passed or failed; returns `condition`
    pub fn expect(&mut self, condition: bool, what: impl AsRef<str>) -> bool {
        if condition {
            self.ok(what);
        } else {
            self.fail(what);
        }
        condition
    }

    pub fn status(&self) -> CheckStatus {
        self.worst.unwrap_or(CheckStatus::Pass)
    }

    /// Builds the result, picking the message that matches the worst line
    pub fn finish(self, pass: &str, warn: &str, fail: &str) -> CheckResult {
        let status = self.status();
        let message = match status {
            CheckStatus::Pass => pass,
            CheckStatus::Warn => warn,
            CheckStatus::Fail => fail,
        };
        CheckResult::new(status, message).with_details(self.lines.join("\n"))
    }

    fn push(&mut self, status: CheckStatus, mark: &str, line: &str) {
        self.lines.push(format!("  {mark} {line}"));
        let rank = |s: CheckStatus| s as u8;
        if self.worst.is_none_or(|w| rank(status) > rank(w)) {
            self.worst = Some(status);
        }
    }
}

/// Trait for system health checks
pub trait SystemCheck {
    /// Name of the system being checked
    fn name(&self) -> &'static str;

    fn check(&self) -> CheckResult;

    /// What this check validates
    fn description(&self) -> Option<&'static str> {
        None
    }
}
