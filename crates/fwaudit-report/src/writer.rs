//! Writing reports to disk.

use std::path::Path;

use fwaudit_core::AuditReport;
use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::html::render_html;

/// Render `report` and write it to `path`, creating missing parent
/// directories. An existing file is overwritten.
pub fn write_report(path: &Path, report: &AuditReport) -> ReportResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let html = render_html(report);
    std::fs::write(path, html.as_bytes()).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), rows = report.rows.len(), "Report written");
    Ok(())
}
