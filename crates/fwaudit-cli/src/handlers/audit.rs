//! Audit command handler.
//!
//! Runs the pipeline over the selected inventory, prints progress and a
//! summary, and writes the HTML report.

use anyhow::{Context, Result};
use chrono::Local;
use fwaudit_core::{AuditMode, AuditReport, AuditStatus};
use fwaudit_report::write_report;

use crate::bootstrap::CliContext;
use crate::commands::AuditArgs;
use crate::presentation::{print_banner, print_separator, truncate_string};

const BANNER_WIDTH: usize = 60;

/// Execute the audit command.
///
/// With `--json` the progress lines and summary are suppressed and the
/// report is printed as JSON instead; the HTML report is written either way.
///
/// # Errors
///
/// Fails when the inventory cannot be loaded or the report cannot be
/// written. Advisory lookup failures never fail the run.
pub async fn execute(ctx: &CliContext, args: &AuditArgs) -> Result<()> {
    let devices = args
        .source
        .load()
        .with_context(|| format!("Cannot audit {}", args.source.describe()))?;

    let quiet = args.json;
    let generated_at = Local::now();
    if !quiet {
        print_banner(
            &format!(
                "STARTING INFRASTRUCTURE AUDIT - {}",
                generated_at.format("%Y-%m-%d %H:%M")
            ),
            BANNER_WIDTH,
        );
        println!(
            "Mode: {} | Inventory: {} ({} devices)",
            ctx.audit().mode(),
            args.source.describe(),
            devices.len()
        );
    }

    let report = ctx
        .audit()
        .run_with(&devices, generated_at, |row| {
            if !quiet {
                println!("[DONE] {} processed.", row.device.name);
            }
        })
        .await;

    write_report(&args.output, &report)?;

    if quiet {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    println!(
        "\n[FINISH] Audit complete. Report generated: {}",
        args.output.display()
    );
    Ok(())
}

/// Column titles for the recommendation columns of a mode.
const fn recommendation_headers(mode: AuditMode) -> (&'static str, &'static str) {
    match mode {
        AuditMode::Branch => ("Maintenance", "Evolution"),
        AuditMode::Advisory => ("Recommended", "CVEs"),
    }
}

fn print_summary(report: &AuditReport) {
    let (primary, secondary) = recommendation_headers(report.mode);

    println!();
    println!(
        "{:<20} {:<20} {:<20} {:<24} Status",
        "Device", "Current", primary, secondary
    );
    print_separator(100);
    for row in &report.rows {
        println!(
            "{:<20} {:<20} {:<20} {:<24} {}",
            truncate_string(&row.device.name, 19),
            truncate_string(&row.device.current, 19),
            truncate_string(row.recommendation.primary(), 19),
            truncate_string(&row.recommendation.secondary(), 23),
            row.status
        );
    }
    print_separator(100);

    let mut counts = vec![
        format!("{} OK", report.count(AuditStatus::Ok)),
        format!(
            "{} upgrade needed",
            report.count(AuditStatus::UpgradeNeeded)
        ),
    ];
    if report.mode.is_advisory() {
        counts.push(format!(
            "{} newer than recommended",
            report.count(AuditStatus::CurrentNewer)
        ));
    }
    counts.push(format!("{} unknown", report.count(AuditStatus::Unknown)));
    println!("{} device(s): {}", report.rows.len(), counts.join(", "));
    if report.needs_attention() {
        println!("[WARN] Some devices run firmware below the recommended release.");
    }
}
