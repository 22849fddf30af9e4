use chrono::NaiveDate;
use clap::Args;
use resignee_core::error::AppError;
use resignee_core::workflows::deactivation::report::views::DeactivationReportSummary;
use resignee_core::workflows::deactivation::{
    evaluate, DeactivationCategory, DeactivationReport, DeactivationVerdict, ReportWindow,
    SnapshotImporter,
};
use resignee_core::workflows::intake::{parse_with_diagnostics, ResigneeDisplay};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// File holding the pasted notice text, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub(crate) input: String,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Deactivation category (batch_um, third_party, email, windows)
    #[arg(long, value_parser = crate::cli::parse_category)]
    pub(crate) category: DeactivationCategory,
    /// Employee's last working day (YYYY-MM-DD)
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) resigned: NaiveDate,
    /// When HR notified IT (YYYY-MM-DD, optionally with a time)
    #[arg(long, value_parser = crate::cli::parse_notice_date)]
    pub(crate) hr_notified: NaiveDate,
    /// Deactivation date (YYYY-MM-DD); omit when not yet deactivated
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) deactivated: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV export of the resignee table
    #[arg(long)]
    pub(crate) snapshots: PathBuf,
    /// First last-working-day to include (YYYY-MM-DD)
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// Last last-working-day to include (YYYY-MM-DD)
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) to: Option<NaiveDate>,
    /// Only include resignees already marked processed
    #[arg(long)]
    pub(crate) processed_only: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_parse(args: ParseArgs) -> Result<(), AppError> {
    let raw = read_input(&args.input)?;
    println!("{}", intake_json(&raw)?);
    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let verdict = check_verdict(&args);
    info!(category = args.category.key(), verdict = verdict.label(), "deactivation checked");
    println!("{}: {}", args.category.label(), verdict.label());
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let snapshots = SnapshotImporter::from_path(&args.snapshots)?;
    let window = ReportWindow {
        from: args.from,
        to: args.to,
        processed_only: args.processed_only,
    };
    let report = DeactivationReport::build(&snapshots, window);
    info!(
        imported = snapshots.len(),
        reported = report.rows.len(),
        late = report.late_employees().len(),
        "deactivation report built"
    );

    let summary = report.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_report(&summary));
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String, AppError> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

pub(crate) fn intake_json(raw: &str) -> Result<String, AppError> {
    let outcome = parse_with_diagnostics(raw);
    for rejected in &outcome.rejected {
        warn!(
            chunk = rejected.index,
            employee_no = %rejected.employee_no,
            reason = %rejected.reason,
            "resignee notice skipped"
        );
    }
    if outcome.dropped_lines > 0 {
        warn!(
            lines = outcome.dropped_lines,
            "incomplete trailing notice ignored"
        );
    }
    info!(accepted = outcome.records.len(), "resignee notices parsed");

    let displays: Vec<ResigneeDisplay> = outcome
        .records
        .iter()
        .map(|record| record.to_display())
        .collect();
    Ok(serde_json::to_string_pretty(&displays)?)
}

pub(crate) fn check_verdict(args: &CheckArgs) -> DeactivationVerdict {
    evaluate(
        args.resigned,
        args.deactivated,
        args.hr_notified,
        args.category,
    )
}

pub(crate) fn render_report(summary: &DeactivationReportSummary) -> String {
    let mut out = String::new();
    out.push_str("Deactivation report\n");
    let bound =
        |date: Option<NaiveDate>| date.map_or_else(|| "any".to_string(), |d| d.to_string());
    out.push_str(&format!(
        "Last working day: {} -> {}\n",
        bound(summary.from),
        bound(summary.to)
    ));

    if summary.resignees.is_empty() {
        out.push_str("\nResignees: none\n");
    } else {
        out.push_str("\nResignees\n");
        for row in &summary.resignees {
            out.push_str(&format!(
                "- {} {} ({}), last day {}, HR notified {}\n",
                row.employee_no, row.name, row.department, row.last_day, row.hr_notified_on
            ));
            for outcome in &row.outcomes {
                let when = match outcome.deactivated_on {
                    Some(date) => format!(" on {date}"),
                    None => String::new(),
                };
                out.push_str(&format!(
                    "    {}: {}{}\n",
                    outcome.category_label, outcome.verdict_label, when
                ));
            }
            if !row.remarks.is_empty() {
                out.push_str(&format!("    Remarks: {}\n", row.remarks));
            }
        }
    }

    out.push_str("\nBy system\n");
    for tally in &summary.category_tallies {
        out.push_str(&format!(
            "- {}: {} late, {} on time, {} pending, {} no account\n",
            tally.category_label, tally.late, tally.on_time, tally.pending, tally.no_account
        ));
    }

    if summary.late_employees.is_empty() {
        out.push_str("\nLate deactivations: none\n");
    } else {
        out.push_str(&format!(
            "\nLate deactivations: {}\n",
            summary.late_employees.join(", ")
        ));
    }

    out
}
