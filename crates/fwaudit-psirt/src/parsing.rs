//! Text extraction from advisory pages.
//!
//! Pages are treated as plain text. Nothing here understands the markup;
//! candidates are whatever the family pattern matches.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use fwaudit_core::sort_newest_first;
use regex::Regex;

use crate::error::PsirtResult;

static CVE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CVE-\d{4}-\d{4,7}").expect("CVE pattern is valid"));

/// Extract candidate versions with a family pattern.
///
/// Capture group 1 is taken when the pattern has one, the whole match
/// otherwise. The result is de-duplicated and sorted newest first.
pub fn extract_versions(pattern: &str, body: &str) -> PsirtResult<Vec<String>> {
    let regex = Regex::new(pattern)?;
    let mut versions: Vec<String> = regex
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect();
    sort_newest_first(&mut versions);
    Ok(versions)
}

/// Extract CVE identifiers, sorted and unique.
pub fn extract_cves(body: &str) -> Vec<String> {
    CVE_ID
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
