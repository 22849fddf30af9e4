use crate::commands::{run_check, run_parse, run_report, CheckArgs, ParseArgs, ReportArgs};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use resignee_core::config::AppConfig;
use resignee_core::error::AppError;
use resignee_core::telemetry;
use resignee_core::workflows::deactivation::DeactivationCategory;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Resignee Tracker",
    about = "Parse HR resignation notices and report late account deactivations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse pasted resignation notices into records (printed as JSON)
    Parse(ParseArgs),
    /// Classify a single deactivation as late, on time, pending, or no account
    Check(CheckArgs),
    /// Summarize deactivation lateness from a resignee table export
    Report(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "resignee tracker starting");

    match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
        Command::Report(args) => run_report(args),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// HR notices are often recorded with the time the e-mail arrived; only the day counts.
pub(crate) fn parse_notice_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    parse_date(trimmed)
}

pub(crate) fn parse_category(raw: &str) -> Result<DeactivationCategory, String> {
    raw.parse().map_err(|err| format!("{err}"))
}
