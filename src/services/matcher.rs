//! Wildcard matching of unit names.
//!
//! A pattern is literal text where `*` stands for any run of zero or more
//! characters. Nothing else is special: `.`, `+`, `?`, brackets and
//! backslashes all match themselves.
//!
//! ```
//! use hybris_context::services::matcher::WildcardPattern;
//!
//! let pattern = WildcardPattern::new("*core");
//! assert!(pattern.matches("ycommercewebservicescore"));
//! assert!(!WildcardPattern::new("hmc").matches("hmc2"));
//! ```

use std::fmt;

/// A parsed wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    raw: String,
    /// Literal pieces between `*`. Length is `wildcard count + 1`.
    segments: Vec<String>,
}

impl WildcardPattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('*').map(str::to_string).collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.len() > 1
    }

    /// Whether `name` matches the whole pattern.
    pub fn matches(&self, name: &str) -> bool {
        let Some((first, rest)) = self.segments.split_first() else {
            return name.is_empty();
        };
        let Some((last, middle)) = rest.split_last() else {
            return name == first;
        };

        let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
            return false;
        };

        // Leftmost placement of each middle piece leaves the most room for the rest.
        for segment in middle {
            match remaining.find(segment.as_str()) {
                Some(index) => remaining = &remaining[index + segment.len()..],
                None => return false,
            }
        }

        remaining.ends_with(last.as_str())
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for WildcardPattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// True iff at least one of `names` matches `pattern`.
pub fn matches<S: AsRef<str>>(pattern: &WildcardPattern, names: &[S]) -> bool {
    names.iter().any(|name| pattern.matches(name.as_ref()))
}

/// True iff every pattern matches at least one of `names`.
///
/// Two patterns may be satisfied by the same name. An empty pattern set is
/// vacuously satisfied.
pub fn match_all<S: AsRef<str>>(patterns: &[WildcardPattern], names: &[S]) -> bool {
    patterns.iter().all(|pattern| matches(pattern, names))
}
