//! Table formatting for health reports

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::check::CheckStatus;
use super::runner::HealthCheckReport;

/// Formats a report as a table followed by a one-line verdict
pub fn format_report(report: &HealthCheckReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Check", "Status", "Time", "Result"]);

    for (name, result) in &report.results {
        builder.push_record([
            name.clone(),
            result.status.colored().to_string(),
            format!("{:.2?}", result.duration),
            result.message.clone(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    format!("{table}\n\n{}\n", verdict(report))
}

fn verdict(report: &HealthCheckReport) -> String {
    let counts = format!(
        "{} checks: {} passed, {} warned, {} failed",
        report.total(),
        report.passed(),
        report.warned(),
        report.failed()
    );

    let overall = match (report.is_healthy(), report.has_warnings()) {
        (false, _) => "UNHEALTHY".red().bold(),
        (true, true) => "HEALTHY (with warnings)".yellow().bold(),
        (true, false) => "HEALTHY".green().bold(),
    };

    format!("{overall}  {counts}")
}

/// Prints the table, then details for every check that is not a clean pass
/// (or for all checks when everything passed)
pub fn print_report(report: &HealthCheckReport) {
    println!("{}", format_report(report));

    let everything_passed = report.passed() == report.total();
    for (name, result) in &report.results {
        let interesting = everything_passed || result.status != CheckStatus::Pass;
        if let (true, Some(details)) = (interesting, &result.details) {
            println!("{}\n{}\n", name.bold(), details);
        }
    }
}
