//! Firmware version tuples.
//!
//! Vendor version strings are wildly inconsistent (`FortiOS 7.4.7M`,
//! `NX-OS 10.3(6)(M)`, `17.9.6a`). Rather than modelling each scheme, a
//! version is reduced to the ordered sequence of its digit groups and
//! compared lexicographically.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

static DIGIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit group pattern is valid"));

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:\.\d+)+(?:\(\d+\))?").expect("version token pattern is valid")
});

/// A version reduced to its numeric components.
///
/// Ordering is lexicographic over the components, so a strict prefix sorts
/// before any extension of it: `(7, 4) < (7, 4, 0)`.
///
/// # Example
///
/// ```
/// use fwaudit_core::Version;
///
/// assert_eq!(Version::parse("7.4.7M").components(), &[7, 4, 7]);
/// assert!(Version::parse("").is_empty());
/// assert!(Version::parse("FortiOS 7.2.5M") < Version::parse("7.4.8 (M)"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version(Vec<u32>);

impl Version {
    /// Parse every digit group of `raw`, in order.
    ///
    /// Strings without any digits parse to the empty tuple. Groups too large
    /// for a `u32` saturate instead of failing.
    pub fn parse(raw: &str) -> Self {
        let components = DIGIT_GROUP
            .find_iter(raw)
            .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
            .collect();
        Self(components)
    }

    /// The numeric components.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// True if the source string contained no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The major.minor branch: the first two components (fewer if the
    /// version is shorter).
    #[must_use]
    pub fn branch(&self) -> &[u32] {
        &self.0[..self.0.len().min(2)]
    }

    /// True if both versions sit on the same major.minor branch.
    #[must_use]
    pub fn same_branch(&self, other: &Self) -> bool {
        self.branch() == other.branch()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Extract the dotted version substring used to query advisory pages.
///
/// A trailing parenthesized number is kept so NX-OS style versions survive:
/// `"NX-OS 10.3(6)(M)"` yields `"10.3(6)"`.
pub fn version_token(raw: &str) -> Option<&str> {
    VERSION_TOKEN.find(raw).map(|m| m.as_str())
}

/// Sort candidate version strings newest first and drop duplicates.
///
/// Strings that reduce to the same tuple but differ in text are all kept;
/// ties are ordered by their text so the result is deterministic.
pub fn sort_newest_first(candidates: &mut Vec<String>) {
    candidates.sort_by(|a, b| {
        Version::parse(b)
            .cmp(&Version::parse(a))
            .then_with(|| a.cmp(b))
    });
    candidates.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_suffixes() {
        assert_eq!(Version::parse("7.4.7M").components(), &[7, 4, 7]);
        assert_eq!(Version::parse("FortiOS 7.4.7M").components(), &[7, 4, 7]);
        assert_eq!(Version::parse("17.9.6a").components(), &[17, 9, 6]);
        assert_eq!(Version::parse("7.4.8 (M)").components(), &[7, 4, 8]);
    }

    #[test]
    fn test_parse_nexus_parenthesized() {
        assert_eq!(
            Version::parse("NX-OS 10.3(6)(M)").components(),
            &[10, 3, 6]
        );
        assert_eq!(Version::parse("10.4(6)M").components(), &[10, 4, 6]);
    }

    #[test]
    fn test_parse_empty_and_non_numeric() {
        assert!(Version::parse("").is_empty());
        assert!(Version::parse("N/A").is_empty());
        assert!(Version::parse("IOS-XE").is_empty());
    }

    #[test]
    fn test_parse_saturates_huge_groups() {
        let v = Version::parse("99999999999.1");
        assert_eq!(v.components(), &[u32::MAX, 1]);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Version::parse("7.4.7") < Version::parse("7.4.8"));
        assert!(Version::parse("7.4.10") > Version::parse("7.4.9"));
        assert!(Version::parse("17.12.4") > Version::parse("17.9.6a"));
        assert!(Version::parse("7.4") < Version::parse("7.4.0"));
        assert!(Version::parse("") < Version::parse("0"));
        assert_eq!(
            Version::parse("BIG-IP 17.1.3").cmp(&Version::parse("17.1.3")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_branch() {
        assert_eq!(Version::parse("7.4.7").branch(), &[7, 4]);
        assert_eq!(Version::parse("7").branch(), &[7]);
        assert!(Version::parse("").branch().is_empty());
        assert!(Version::parse("7.4.1").same_branch(&Version::parse("FortiOS 7.4.7M")));
        assert!(!Version::parse("7.6.1").same_branch(&Version::parse("7.4.7")));
    }

    #[test]
    fn test_version_token() {
        assert_eq!(version_token("FortiOS 7.4.7M"), Some("7.4.7"));
        assert_eq!(version_token("NX-OS 10.3(6)(M)"), Some("10.3(6)"));
        assert_eq!(version_token("IOS-XE 17.9.4"), Some("17.9.4"));
        assert_eq!(version_token("FortiManager"), None);
        assert_eq!(version_token("v7"), None);
    }

    #[test]
    fn test_sort_newest_first_dedups() {
        let mut candidates = vec![
            "7.2.8".to_string(),
            "7.4.3".to_string(),
            "7.2.10".to_string(),
            "7.4.3".to_string(),
            "7.6.0".to_string(),
        ];
        sort_newest_first(&mut candidates);
        assert_eq!(candidates, vec!["7.6.0", "7.4.3", "7.2.10", "7.2.8"]);
    }
}
