//! Recommendation rules.
//!
//! Pure functions of (family profile, current version, scraped candidates).
//! No I/O: the audit service feeds these with whatever the advisory source
//! returned, an empty candidate list standing in for any failure.

use std::cmp::Ordering;

use crate::domain::{
    AuditMode, AuditStatus, CveFindings, Device, FamilyProfile, NOT_AVAILABLE, Recommendation,
    Version,
};

/// The FortiManager release that is pinned as current.
const PINNED_FORTIMANAGER: &str = "7.6.4";

/// Highest candidate on the same major.minor branch as `current`.
pub fn select_maintenance<'a>(current: &Version, candidates: &'a [String]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|raw| (Version::parse(raw), raw))
        .filter(|(version, _)| !version.is_empty() && version.same_branch(current))
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, raw)| raw.as_str())
}

/// Newest candidate on the next branch after the one `current` is on.
///
/// The next branch is the smallest major.minor branch strictly greater than
/// the current one among the candidates.
pub fn select_evolution<'a>(current: &Version, candidates: &'a [String]) -> Option<&'a str> {
    let parsed: Vec<(Version, &'a String)> = candidates
        .iter()
        .map(|raw| (Version::parse(raw), raw))
        .filter(|(version, _)| !version.is_empty())
        .collect();

    let next_branch = parsed
        .iter()
        .map(|(version, _)| version.branch())
        .filter(|branch| *branch > current.branch())
        .min()?
        .to_vec();

    parsed
        .iter()
        .filter(|(version, _)| version.branch() == next_branch.as_slice())
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|&(_, raw)| raw.as_str())
}

/// Branch-mode recommendation.
///
/// Families scraped in branch mode pick their maintenance and evolution
/// versions from the candidates, falling back to the table literals when no
/// candidate qualifies. The others always get the literals.
pub fn recommend_branch(
    profile: &FamilyProfile,
    current: &str,
    candidates: &[String],
) -> Recommendation {
    let current = Version::parse(current);
    let (maintenance, evolution) = if profile.scraped_in_branch_mode {
        (
            select_maintenance(&current, candidates).unwrap_or(profile.fallback_maintenance),
            select_evolution(&current, candidates).unwrap_or(profile.fallback_evolution),
        )
    } else {
        (profile.fallback_maintenance, profile.fallback_evolution)
    };

    Recommendation::Branch {
        maintenance: format!("{maintenance}{}", profile.display_suffix),
        evolution: format!("{evolution}{}", profile.display_suffix),
    }
}

/// Advisory-mode recommendation: the newest same-branch candidate, or the
/// fallback maintenance literal, labelled with the product name.
pub fn recommend_advisory(
    profile: &FamilyProfile,
    current: &str,
    candidates: &[String],
    cves: CveFindings,
) -> Recommendation {
    let current = Version::parse(current);
    let version =
        select_maintenance(&current, candidates).unwrap_or(profile.fallback_maintenance);

    Recommendation::Advisory {
        recommended: format!("{} {version}", profile.product),
        cves,
    }
}

/// Derive the upgrade status from the current version and the
/// recommendation.
///
/// A device ahead of its recommendation is `OK` in branch mode and
/// `CurrentNewer` in advisory mode. Versions without digits, on either side,
/// give `Unknown`.
pub fn derive_status(
    mode: AuditMode,
    current: &str,
    recommendation: &Recommendation,
) -> AuditStatus {
    let Some(target) = recommendation.target() else {
        return AuditStatus::Unknown;
    };
    let target = Version::parse(target);
    let current = Version::parse(current);
    if target.is_empty() || current.is_empty() {
        return AuditStatus::Unknown;
    }

    match current.cmp(&target) {
        Ordering::Less => AuditStatus::UpgradeNeeded,
        Ordering::Equal => AuditStatus::Ok,
        Ordering::Greater if mode.is_advisory() => AuditStatus::CurrentNewer,
        Ordering::Greater => AuditStatus::Ok,
    }
}

/// Apply per-device overrides.
///
/// A FortiManager already on the pinned release is always `OK`, with the
/// pinned release as its recommendation and no evolution path.
pub fn apply_overrides(
    device: &Device,
    recommendation: Recommendation,
    status: AuditStatus,
) -> (Recommendation, AuditStatus) {
    if !(device.hardware.contains("FortiManager") && device.current.contains(PINNED_FORTIMANAGER)) {
        return (recommendation, status);
    }

    let pinned = match recommendation {
        Recommendation::Advisory { cves, .. } => Recommendation::Advisory {
            recommended: format!("FortiManager {PINNED_FORTIMANAGER}"),
            cves,
        },
        Recommendation::Branch { .. } | Recommendation::Unavailable => Recommendation::Branch {
            maintenance: PINNED_FORTIMANAGER.to_string(),
            evolution: NOT_AVAILABLE.to_string(),
        },
    };
    (pinned, AuditStatus::Ok)
}
