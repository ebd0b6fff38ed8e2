//! Families command handler.

use anyhow::Result;
use fwaudit_core::VendorFamily;

use crate::presentation::{print_separator, yes_no};

/// Print every supported vendor family with its scraping behaviour and
/// fallback versions.
pub fn execute() -> Result<()> {
    println!(
        "{:<15} {:<9} {:<13} {:<8} {:<10} {:<6} {:<12} Evolution",
        "Family", "Vendor", "Product", "Branch", "Advisory", "CVEs", "Maintenance"
    );
    print_separator(90);

    for family in VendorFamily::ALL {
        let profile = family.profile();
        println!(
            "{:<15} {:<9} {:<13} {:<8} {:<10} {:<6} {:<12} {}",
            family.as_str(),
            family.vendor(),
            profile.product,
            yes_no(profile.scrapes_versions(false)),
            yes_no(profile.scrapes_versions(true)),
            yes_no(profile.supports_cve_lookup()),
            profile.fallback_maintenance,
            profile.fallback_evolution,
        );
    }

    println!();
    println!("Branch/Advisory: whether candidate versions are scraped in that mode.");
    println!("Maintenance/Evolution: versions used when nothing could be scraped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_prints() {
        execute().unwrap();
    }
}
