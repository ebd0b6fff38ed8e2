//! HTML rendering of audit reports.
//!
//! [`render_html`] is a pure function of the report, so the same report
//! always yields the same document. [`write_report`] puts it on disk.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod error;
mod escape;
mod html;
mod writer;

pub use error::{ReportError, ReportResult};
pub use escape::Escaped;
pub use html::{DEFAULT_REPORT_PATH, render_html, status_palette};
pub use writer::write_report;

// Silence unused dev-dependency warnings
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use tempfile as _;
