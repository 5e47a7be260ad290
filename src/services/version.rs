//! Staleness check for the plugin version recorded at import time.

use crate::constants::MINIMUM_SUPPORTED_VERSION_SCORE;

/// Whether `version` is older than `9.0`.
///
/// Anything that cannot be read as `major.minor[...]` is treated as outdated:
/// a missing value, a single component, or a first or second component that
/// is not a base-10 integer.
///
/// ```
/// use hybris_context::services::version::is_outdated;
///
/// assert!(!is_outdated(Some("9.0.0")));
/// assert!(is_outdated(Some("8.9")));
/// assert!(is_outdated(Some("abc.1")));
/// assert!(is_outdated(None));
/// ```
pub fn is_outdated(version: Option<&str>) -> bool {
    let Some(version) = version else {
        return true;
    };

    match version_score(version) {
        Some(score) => score < MINIMUM_SUPPORTED_VERSION_SCORE,
        None => {
            tracing::debug!("Unreadable imported-by version {:?}, treating as outdated", version);
            true
        }
    }
}

/// `major * 100 + minor`, or `None` when the first two components are not integers.
fn version_score(version: &str) -> Option<i64> {
    let mut parts = version.split('.');
    let major: i32 = parts.next()?.parse().ok()?;
    let minor: i32 = parts.next()?.parse().ok()?;
    Some(i64::from(major) * 100 + i64::from(minor))
}
