//! Interval notation for version ranges: `[1.0,2.0)`, `(1.0,1.5]`

use std::fmt;
use std::str::FromStr;

use super::VersionRange;
use crate::{VersionInterface, VersionParserError};

impl<V> VersionRange<V>
where
    V: VersionInterface + FromStr<Err = VersionParserError>,
{
    /// Parse a range in interval notation.
    ///
    /// `[` and `]` mark inclusive bounds, `(` and `)` exclusive ones. The
    /// text is split on its first `,` and is not trimmed.
    pub fn parse(range: &str) -> Result<Self, VersionParserError> {
        let (start, end) = range.split_once(',').ok_or(VersionParserError::MissingSeparator)?;

        let (start_inclusive, start) = if let Some(start) = start.strip_prefix('[') {
            (true, start)
        } else if let Some(start) = start.strip_prefix('(') {
            (false, start)
        } else {
            return Err(VersionParserError::MissingStartBoundType);
        };

        let (end_inclusive, end) = if let Some(end) = end.strip_suffix(']') {
            (true, end)
        } else if let Some(end) = end.strip_suffix(')') {
            (false, end)
        } else {
            return Err(VersionParserError::MissingEndBoundType);
        };

        let start_bound: V = start.parse()?;
        let end_bound: V = end.parse()?;

        let range = VersionRange::builder()
            .start_bound(Some(start_bound))
            .start_inclusive(start_inclusive)
            .end_bound(Some(end_bound))
            .end_inclusive(end_inclusive)
            .build()?;

        Ok(range)
    }
}

impl<V> FromStr for VersionRange<V>
where
    V: VersionInterface + FromStr<Err = VersionParserError>,
{
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

impl<V: VersionInterface> fmt::Display for VersionRange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.start_inclusive() { '[' } else { '(' },
            self.start_bound(),
            self.end_bound(),
            if self.end_inclusive() { ']' } else { ')' }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Version;

    fn v(version: &str) -> Version {
        Version::parse(version).unwrap()
    }

    #[test]
    fn test_parse() {
        let range = Version::range_notation("[0.0,1.0)").unwrap();
        assert!(range.start_inclusive());
        assert!(!range.end_inclusive());
        assert_eq!(range.start_bound(), &v("0.0"));
        assert_eq!(range.end_bound(), &v("1.0"));
    }

    #[test]
    fn test_parse_bound_types() {
        let range = Version::range_notation("(1.0,2.0]").unwrap();
        assert!(!range.start_inclusive());
        assert!(range.end_inclusive());

        let range = Version::range_notation("[1.0,2.0]").unwrap();
        assert!(range.start_inclusive());
        assert!(range.end_inclusive());

        let range = Version::range_notation("(1.0,2.0)").unwrap();
        assert!(!range.start_inclusive());
        assert!(!range.end_inclusive());
    }

    #[test]
    fn test_parse_labels() {
        let range = Version::range_notation("[1.0-alpha.1,1.0-rc+build]").unwrap();
        assert_eq!(range.start_bound().pre_release(), Some("alpha.1"));
        assert_eq!(range.end_bound().pre_release(), Some("rc"));
        assert_eq!(range.end_bound().build_metadata(), Some("build"));
    }

    #[test]
    fn test_parse_fails() {
        assert_eq!(Version::range_notation("[1.0"), Err(VersionParserError::MissingSeparator));
        assert_eq!(Version::range_notation("1.0,2.0)"), Err(VersionParserError::MissingStartBoundType));
        assert_eq!(Version::range_notation("{1.0,2.0)"), Err(VersionParserError::MissingStartBoundType));
        assert_eq!(Version::range_notation("[1.0,2.0"), Err(VersionParserError::MissingEndBoundType));
        assert_eq!(Version::range_notation("[1.0,2.0}"), Err(VersionParserError::MissingEndBoundType));
        assert_eq!(Version::range_notation("[1.0,"), Err(VersionParserError::MissingEndBoundType));
        assert_eq!(Version::range_notation(",2.0)"), Err(VersionParserError::MissingStartBoundType));
    }

    #[test]
    fn test_parse_is_whitespace_sensitive() {
        assert!(Version::range_notation("[1.0, 2.0)").is_err());
        assert!(Version::range_notation(" [1.0,2.0)").is_err());
    }

    #[test]
    fn test_parse_invalid_bound() {
        assert!(matches!(
            Version::range_notation("[1.x,2.0)"),
            Err(VersionParserError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Version::range_notation("[1.0,2.0,3.0)"),
            Err(VersionParserError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_empty_bounds() {
        let range = Version::range_notation("[,)").unwrap();
        assert_eq!(range.start_bound(), &Version::new(0, 0, 0));
        assert_eq!(range.end_bound(), &Version::new(0, 0, 0));
    }

    #[test]
    fn test_from_str() {
        let range: VersionRange<Version> = "[1.0,2.0)".parse().unwrap();
        assert!(range.matches(&v("1.2")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::range(v("1.0"), v("2.0")).to_string(), "[1.0,2.0)");
        assert_eq!(Version::range_notation("(1.0-rc.1,2.0.1]").unwrap().to_string(), "(1.0-rc.1,2.0.1]");
    }

    #[test]
    fn test_display_parses_back() {
        for notation in ["[0.0,1.0)", "(1.2.3,4.5]", "[1.0-alpha,1.0+build)"] {
            let range = Version::range_notation(notation).unwrap();
            assert_eq!(Version::range_notation(&range.to_string()).unwrap(), range);
        }
    }
}
