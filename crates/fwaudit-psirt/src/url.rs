//! URL construction for the advisory pages.

use fwaudit_core::FamilyProfile;
use url::Url;

use crate::error::{PsirtError, PsirtResult};

/// Placeholder substituted with the encoded version token.
const VERSION_PLACEHOLDER: &str = "{version}";

fn no_source(profile: &FamilyProfile) -> PsirtError {
    PsirtError::NoSource {
        family: profile.family,
    }
}

/// URL of the page listing a family's releases.
pub fn build_versions_url(profile: &FamilyProfile) -> PsirtResult<Url> {
    let raw = profile.versions_url.ok_or_else(|| no_source(profile))?;
    Ok(Url::parse(raw)?)
}

/// URL of the advisory page for one release of a family.
///
/// The version token is percent-encoded, so NX-OS tokens such as
/// `10.3(6)` survive as a single query value.
pub fn build_cve_url(profile: &FamilyProfile, version: &str) -> PsirtResult<Url> {
    let template = profile.cve_url_template.ok_or_else(|| no_source(profile))?;
    let encoded = urlencoding::encode(version);
    Ok(Url::parse(&template.replace(VERSION_PLACEHOLDER, &encoded))?)
}
