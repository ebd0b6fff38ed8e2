//! Build and version metadata for the `fwaudit` binary.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Short git SHA emitted by the build script, or `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// True if the git SHA looks like a short hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string for `--version`: `0.1.0 (a1b2c3d)`, or plain `0.1.0`
/// when git data is unavailable.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(is_short_hex("ABCDEF0"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3d4"));
    }

    #[test]
    fn test_long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
        if HAS_GIT_SHA {
            assert!(LONG_VERSION.contains(GIT_SHA_SHORT));
        }
    }
}
