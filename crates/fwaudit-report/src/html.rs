//! HTML document rendering.

use std::fmt;

use fwaudit_core::{AuditMode, AuditReport, AuditRow, AuditStatus};

use crate::escape::Escaped;

/// Where the report goes when no path is configured.
pub const DEFAULT_REPORT_PATH: &str = "infra_audit_report.html";

const STYLE: &str = "\
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background:#f1f5f9; padding:40px; color:#1e293b; }
        .container { max-width: 1200px; margin: auto; background:white; padding:25px; border-radius:12px; box-shadow:0 10px 15px -3px rgba(0,0,0,0.1); }
        table { width:100%; border-collapse:collapse; margin-top:20px; }
        th { background:#1e293b; color:white; padding:12px; text-align:left; font-size:12px; text-transform:uppercase; }
        td { border-bottom: 1px solid #e2e8f0; font-size:14px; padding:10px; }
        h2 { margin-top:0; color:#0f172a; }
        .info { color:#64748b; font-size:14px; margin-bottom:20px; }
";

/// Text and background color for a status.
#[must_use]
pub const fn status_palette(status: AuditStatus) -> (&'static str, &'static str) {
    match status {
        AuditStatus::UpgradeNeeded => ("#dc2626", "#fff5f5"),
        AuditStatus::Ok => ("#16a34a", "#f0fff4"),
        AuditStatus::CurrentNewer => ("#2563eb", "#eff6ff"),
        AuditStatus::Unknown => ("#64748b", "#f8fafc"),
    }
}

const fn headers(mode: AuditMode) -> [&'static str; 6] {
    match mode {
        AuditMode::Branch => [
            "Device Name",
            "Hardware Model",
            "Current Version",
            "Maintenance (Same Branch)",
            "Evolution (Next Gen)",
            "Status",
        ],
        AuditMode::Advisory => [
            "Device Name",
            "Hardware Model",
            "Current Version",
            "Recommended",
            "CVEs",
            "Status",
        ],
    }
}

/// Render a report as a standalone HTML document.
///
/// Every interpolated value is escaped. The output depends only on the
/// report, including its timestamp.
#[must_use]
pub fn render_html(report: &AuditReport) -> String {
    Document(report).to_string()
}

struct Document<'a>(&'a AuditReport);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(f, "    <title>Infrastructure Audit Report</title>")?;
        writeln!(f, "    <style>\n{STYLE}    </style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <h2>Infrastructure Firmware Audit Report</h2>")?;
        writeln!(
            f,
            "        <div class=\"info\">Generated on {} | {} audit | {} devices, {} need an upgrade</div>",
            report.generated_at.format("%Y-%m-%d at %H:%M"),
            Escaped(report.mode.as_str()),
            report.rows.len(),
            report.count(AuditStatus::UpgradeNeeded),
        )?;
        writeln!(f, "        <table>")?;
        writeln!(f, "            <thead>")?;
        writeln!(f, "                <tr>")?;
        for header in headers(report.mode) {
            writeln!(f, "                    <th>{}</th>", Escaped(header))?;
        }
        writeln!(f, "                </tr>")?;
        writeln!(f, "            </thead>")?;
        writeln!(f, "            <tbody>")?;
        for row in &report.rows {
            write_row(f, row)?;
        }
        writeln!(f, "            </tbody>")?;
        writeln!(f, "        </table>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &AuditRow) -> fmt::Result {
    let (color, background) = status_palette(row.status);
    let secondary = row.recommendation.secondary();

    writeln!(f, "                <tr style=\"background:{background};\">")?;
    writeln!(
        f,
        "                    <td style=\"padding:12px; font-weight:bold;\">{}</td>",
        Escaped(&row.device.name)
    )?;
    writeln!(f, "                    <td>{}</td>", Escaped(&row.device.hardware))?;
    writeln!(
        f,
        "                    <td><code>{}</code></td>",
        Escaped(&row.device.current)
    )?;
    writeln!(
        f,
        "                    <td style=\"color:#2563eb; font-weight:bold;\">{}</td>",
        Escaped(row.recommendation.primary())
    )?;
    writeln!(
        f,
        "                    <td style=\"color:#7c3aed;\">{}</td>",
        Escaped(&secondary)
    )?;
    writeln!(
        f,
        "                    <td style=\"color:{color}; font-weight:bold;\">{}</td>",
        Escaped(row.status.label())
    )?;
    writeln!(f, "                </tr>")
}
