//! Java runtime versions: a semantic version plus an `_N` update number

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::range::VersionRange;
use crate::version_parser::{parse_number, Field};
use crate::{UnstableVersionType, Version, VersionBuilder, VersionInterface, VersionParserError};

/// Provides the version string of the host runtime, e.g. `1.8.0_181`
pub trait HostVersionSource {
    fn host_version(&self) -> Option<String>;
}

impl<F> HostVersionSource for F
where
    F: Fn() -> Option<String>,
{
    fn host_version(&self) -> Option<String> {
        self()
    }
}

/// A Java version such as `1.8.0_181`.
///
/// Compares like its semantic [`Version`] and falls back to the update
/// number when those are equal.
#[derive(Debug, Clone)]
pub struct JavaVersion {
    version: Version,
    update_number: u64,
}

impl JavaVersion {
    pub const JAVA_1_5: JavaVersion = JavaVersion::from_version(Version::new(1, 5, 0), 0);
    pub const JAVA_1_6: JavaVersion = JavaVersion::from_version(Version::new(1, 6, 0), 0);
    pub const JAVA_1_7: JavaVersion = JavaVersion::from_version(Version::new(1, 7, 0), 0);
    pub const JAVA_1_8: JavaVersion = JavaVersion::from_version(Version::new(1, 8, 0), 0);

    pub const fn from_version(version: Version, update_number: u64) -> Self {
        JavaVersion { version, update_number }
    }

    pub fn builder() -> JavaVersionBuilder {
        JavaVersionBuilder::new()
    }

    pub fn builder_from(version: &JavaVersion) -> JavaVersionBuilder {
        JavaVersionBuilder {
            base: Version::builder_from(&version.version),
            update_number: version.update_number,
        }
    }

    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        let parsed = JavaVersionBuilder::new().parse(version)?.build();
        log::trace!("Parsed Java version {} from {:?}", parsed, version);
        Ok(parsed)
    }

    /// Parse the version reported by the host runtime
    pub fn current(source: &impl HostVersionSource) -> Result<Self, VersionParserError> {
        let version = source
            .host_version()
            .ok_or(VersionParserError::MissingHostVersion)?;
        Self::parse(&version)
    }

    /// The semantic part of this version
    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn major(&self) -> u64 {
        self.version.major()
    }

    pub fn minor(&self) -> u64 {
        self.version.minor()
    }

    pub fn patch(&self) -> u64 {
        self.version.patch()
    }

    pub fn update_number(&self) -> u64 {
        self.update_number
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.version.pre_release()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.version.build_metadata()
    }

    pub fn stable(&self) -> bool {
        self.version.stable()
    }

    pub fn unstable(&self) -> bool {
        self.version.unstable()
    }

    pub fn with_major(&self, value: u64) -> Self {
        JavaVersion::from_version(self.version.with_major(value), self.update_number)
    }

    pub fn with_minor(&self, value: u64) -> Self {
        JavaVersion::from_version(self.version.with_minor(value), self.update_number)
    }

    pub fn with_patch(&self, value: u64) -> Self {
        JavaVersion::from_version(self.version.with_patch(value), self.update_number)
    }

    pub fn with_update_number(&self, value: u64) -> Self {
        JavaVersion::from_version(self.version.clone(), value)
    }

    pub fn with_pre_release(&self, value: Option<&str>) -> Result<Self, VersionParserError> {
        Ok(JavaVersion::from_version(self.version.with_pre_release(value)?, self.update_number))
    }

    pub fn with_build_metadata(&self, value: Option<&str>) -> Result<Self, VersionParserError> {
        Ok(JavaVersion::from_version(self.version.with_build_metadata(value)?, self.update_number))
    }

    /// Create a range from `start` (inclusive) to `end` (exclusive)
    pub fn range(start: JavaVersion, end: JavaVersion) -> VersionRange<JavaVersion> {
        VersionRange::new(start, true, end, false)
    }
}

impl VersionInterface for JavaVersion {
    fn major(&self) -> u64 {
        self.version.major()
    }

    fn minor(&self) -> u64 {
        self.version.minor()
    }

    fn patch(&self) -> u64 {
        self.version.patch()
    }

    fn unstable_version_type(&self) -> Option<UnstableVersionType> {
        self.version.unstable_version_type()
    }

    fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.cmp(other),
            None => Ordering::Greater,
        }
    }

    fn stable(&self) -> bool {
        self.version.stable()
    }
}

impl PartialEq for JavaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.update_number == other.update_number && self.version == other.version
    }
}

impl Eq for JavaVersion {}

impl Hash for JavaVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.version.hash(state);
        self.update_number.hash(state);
    }
}

impl PartialOrd for JavaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JavaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then(self.update_number.cmp(&other.update_number))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if self.update_number != 0 {
            write!(f, "_{}", self.update_number)?;
        }
        Ok(())
    }
}

impl FromStr for JavaVersion {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JavaVersion::parse(s)
    }
}

impl From<Version> for JavaVersion {
    fn from(version: Version) -> Self {
        JavaVersion::from_version(version, 0)
    }
}

/// Factory for [`JavaVersion`] instances
#[derive(Debug, Clone, Default)]
pub struct JavaVersionBuilder {
    base: VersionBuilder,
    update_number: u64,
}

impl JavaVersionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the builder from a version string.
    ///
    /// The `_N` suffix runs from the first `_` up to the next `-` or `+`. A
    /// malformed update number is read as zero instead of failing the parse.
    pub fn parse(&mut self, version: &str) -> Result<&mut Self, VersionParserError> {
        let Some(update_index) = version.find('_') else {
            self.base.parse(version)?;
            return Ok(self);
        };

        let tail = &version[update_index + 1..];
        let end = tail.find(|c: char| c == '-' || c == '+').unwrap_or(tail.len());

        let update_number = match parse_number(&tail[..end], Field::UpdateNumber) {
            Ok(update_number) => update_number,
            Err(err) => {
                log::debug!("Ignoring update number of {:?}: {}", version, err);
                0
            }
        };

        let remainder = format!("{}{}", &version[..update_index], &tail[end..]);
        self.base.parse(&remainder)?;
        self.update_number = update_number;

        Ok(self)
    }

    /// Build a version and reset the builder
    pub fn build(&mut self) -> JavaVersion {
        let update_number = std::mem::take(&mut self.update_number);
        JavaVersion::from_version(self.base.build(), update_number)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.base.reset();
        self.update_number = 0;
        self
    }

    pub fn major(&mut self, major: u64) -> &mut Self {
        self.base.major(major);
        self
    }

    pub fn minor(&mut self, minor: u64) -> &mut Self {
        self.base.minor(minor);
        self
    }

    pub fn patch(&mut self, patch: u64) -> &mut Self {
        self.base.patch(patch);
        self
    }

    pub fn update_number(&mut self, update_number: u64) -> &mut Self {
        self.update_number = update_number;
        self
    }

    pub fn pre_release(&mut self, pre_release: Option<&str>) -> Result<&mut Self, VersionParserError> {
        self.base.pre_release(pre_release)?;
        Ok(self)
    }

    pub fn build_metadata(&mut self, build_metadata: Option<&str>) -> Result<&mut Self, VersionParserError> {
        self.base.build_metadata(build_metadata)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn java(major: u64, minor: u64, patch: u64, update_number: u64) -> JavaVersion {
        JavaVersion::builder()
            .major(major)
            .minor(minor)
            .patch(patch)
            .update_number(update_number)
            .build()
    }

    #[test]
    fn test_parse() {
        let version = JavaVersion::parse("1.8.0_181").unwrap();
        assert_eq!((version.major(), version.minor(), version.patch()), (1, 8, 0));
        assert_eq!(version.update_number(), 181);
        assert_eq!(version.pre_release(), None);

        let version = JavaVersion::parse("1.8.0_45-ea+b13").unwrap();
        assert_eq!(version.update_number(), 45);
        assert_eq!(version.pre_release(), Some("ea"));
        assert_eq!(version.build_metadata(), Some("b13"));

        let version = JavaVersion::parse("1.7.0_80+b15").unwrap();
        assert_eq!(version.update_number(), 80);
        assert_eq!(version.build_metadata(), Some("b15"));
    }

    #[test]
    fn test_parse_without_update_number() {
        let version = JavaVersion::parse("11.0.2+9").unwrap();
        assert_eq!((version.major(), version.minor(), version.patch()), (11, 0, 2));
        assert_eq!(version.update_number(), 0);
        assert_eq!(version.build_metadata(), Some("9"));
    }

    #[test]
    fn test_parse_swallows_malformed_update_number() {
        let version = JavaVersion::parse("1.6.0_xx").unwrap();
        assert_eq!(version.update_number(), 0);
        assert_eq!(version, JavaVersion::JAVA_1_6);

        let version = JavaVersion::parse("1.6.0_-beta").unwrap();
        assert_eq!(version.update_number(), 0);
        assert_eq!(version.pre_release(), Some("beta"));
    }

    #[test]
    fn test_parse_fails_on_base_version() {
        assert!(JavaVersion::parse("1.x.0_10").is_err());
        assert!(JavaVersion::parse("one_10").is_err());
    }

    #[test]
    fn test_compare() {
        let ordered = [java(1, 5, 0, 0), java(1, 5, 0, 1), java(1, 6, 0, 0), java(1, 6, 0, 1)];

        for pair in ordered.windows(2) {
            assert_eq!(pair[0].compare_to(Some(&pair[1])), Ordering::Less);
            assert_eq!(pair[1].compare_to(Some(&pair[0])), Ordering::Greater);
            assert!(pair[0].older_than(&pair[1]));
            assert!(!pair[0].newer_than(&pair[1]));
            assert!(pair[1].newer_than(&pair[0]));
            assert!(!pair[1].older_than(&pair[0]));
        }

        assert_eq!(java(1, 5, 0, 0).compare_to(None), Ordering::Greater);
    }

    #[test]
    fn test_equals() {
        assert_eq!(java(1, 6, 0, 0), java(1, 6, 0, 0));
        assert_eq!(java(1, 6, 0, 1), java(1, 6, 0, 1));
        assert_ne!(java(1, 6, 0, 0), java(1, 6, 0, 1));
        assert_ne!(java(1, 6, 0, 1), java(1, 7, 0, 1));
        assert_ne!(java(1, 7, 0, 0), java(1, 7, 0, 1));
    }

    #[test]
    fn test_current() {
        let current = JavaVersion::current(&|| Some("1.8.0_181".to_string())).unwrap();

        assert!(current.newer_than(&JavaVersion::JAVA_1_5));
        assert!(current.newer_than(&JavaVersion::JAVA_1_6));
        assert!(current.newer_than(&JavaVersion::JAVA_1_7));
        assert!(current.newer_than(&JavaVersion::JAVA_1_8));
    }

    #[test]
    fn test_current_without_host_version() {
        assert_eq!(
            JavaVersion::current(&|| None::<String>),
            Err(VersionParserError::MissingHostVersion)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(java(1, 8, 0, 0).to_string(), "1.8");
        assert_eq!(java(1, 8, 0, 181).to_string(), "1.8_181");
        assert_eq!(java(1, 8, 1, 5).to_string(), "1.8.1_5");
        assert_eq!(JavaVersion::parse("1.8.0_45-ea+b13").unwrap().to_string(), "1.8-ea+b13_45");
        assert_eq!(JavaVersion::parse("1.7.0_80-rc.2").unwrap().to_string(), "1.7-rc.2_80");
    }

    #[test]
    fn test_parse_appended_update_number() {
        let version = JavaVersion::parse("1.8-ea+b13_45").unwrap();
        assert_eq!(version.update_number(), 45);
        assert_eq!(version.pre_release(), Some("ea"));
        assert_eq!(version.build_metadata(), Some("b13"));
        assert_eq!(version, JavaVersion::parse("1.8.0_45-ea+b13").unwrap());
    }

    #[test]
    fn test_display_parses_back() {
        for input in ["1.8.0_181", "1.8.0_45-ea+b13", "9.0.4+11", "1.7.0_80-rc.2"] {
            let version = JavaVersion::parse(input).unwrap();
            let reparsed = JavaVersion::parse(&version.to_string()).unwrap();
            assert_eq!(reparsed, version);
            assert_eq!(reparsed.update_number(), version.update_number());
            assert_eq!(reparsed.pre_release(), version.pre_release());
            assert_eq!(reparsed.build_metadata(), version.build_metadata());
        }
    }

    #[test]
    fn test_with_methods_copy() {
        let original = java(1, 8, 0, 100);
        let updated = original.with_update_number(101);
        let minor = original.with_minor(9);

        assert_eq!(original.update_number(), 100);
        assert_eq!(updated.update_number(), 101);
        assert_eq!(minor.minor(), 9);
        assert_eq!(minor.update_number(), 100);
        assert!(original.with_pre_release(Some("ea")).unwrap().unstable());
    }

    #[test]
    fn test_builder_resets_after_build() {
        let mut builder = JavaVersion::builder();
        builder.major(1).minor(8).update_number(20);
        let first = builder.build();
        let second = builder.build();

        assert_eq!(first.to_string(), "1.8_20");
        assert_eq!(second.to_string(), "0.0");
        assert_eq!(second.update_number(), 0);
    }

    #[test]
    fn test_range() {
        let range = JavaVersion::range(JavaVersion::JAVA_1_7, JavaVersion::JAVA_1_8);
        assert!(range.matches(&java(1, 7, 0, 0)));
        assert!(range.matches(&java(1, 7, 0, 80)));
        assert!(!range.matches(&java(1, 8, 0, 0)));

        let range: VersionRange<JavaVersion> = "[1.8.0_20,1.8.0_100]".parse().unwrap();
        assert!(range.matches(&java(1, 8, 0, 60)));
        assert!(range.matches(&java(1, 8, 0, 100)));
        assert!(!range.matches(&java(1, 8, 0, 101)));
    }
}
