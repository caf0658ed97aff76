//! Version extraction and comparison.

use regex::Regex;
use std::sync::LazyLock;

/// Current version of relwatch.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything that is not part of a dotted numeric version.
static NON_VERSION_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d.]").expect("NON_VERSION_CHARS must compile"));

/// Strip a release tag down to its dotted numeric version.
///
/// `v0.8.4` becomes `0.8.4`; `release-1.2` becomes `1.2`.
pub fn normalize_version(tag: &str) -> String {
    NON_VERSION_CHARS
        .replace_all(tag, "")
        .trim_matches('.')
        .to_string()
}

/// Compare versions to check if `latest` is newer than `current`.
///
/// Both sides are normalized first. Full semver versions compare with
/// semver precedence; anything else falls back to a component-wise
/// numeric comparison.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    let latest = normalize_version(latest);
    let current = normalize_version(current);

    if let (Ok(l), Ok(c)) = (
        semver::Version::parse(&latest),
        semver::Version::parse(&current),
    ) {
        return l > c;
    }

    let parse_version = |v: &str| -> Vec<u64> {
        v.split('.')
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect()
    };

    let latest_parts = parse_version(&latest);
    let current_parts = parse_version(&current);

    // Compare component by component
    for (l, c) in latest_parts.iter().zip(current_parts.iter()) {
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }

    // If all components equal, a longer non-zero tail is newer
    latest_parts
        .iter()
        .skip(current_parts.len())
        .any(|part| *part > 0)
}
