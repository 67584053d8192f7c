//! Semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::range::VersionRange;
use crate::version_parser::{validate_label, Field, VersionParser, VersionParserError};
use crate::{UnstableVersionType, VersionInterface};

/// An immutable semantic version.
///
/// Equality, hashing and ordering look at the numeric bits, stability, the
/// pre-release category and (for named categories) the pre-release revision.
/// Build metadata is carried along for display only.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
    unstable_version_type: Option<UnstableVersionType>,
}

impl Version {
    /// Create a version without pre-release or metadata labels
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
            unstable_version_type: None,
        }
    }

    /// Get a new builder
    pub fn builder() -> VersionBuilder {
        VersionBuilder::new()
    }

    /// Get a builder that replicates every bit of `version`
    pub fn builder_from(version: &Version) -> VersionBuilder {
        VersionBuilder {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: version.pre_release.clone(),
            build_metadata: version.build_metadata.clone(),
            unstable_version_type: version.unstable_version_type,
        }
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        let parsed = VersionBuilder::new().parse(version)?.build();
        log::trace!("Parsed version {} from {:?}", parsed, version);
        Ok(parsed)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    pub fn unstable_version_type(&self) -> Option<UnstableVersionType> {
        self.unstable_version_type
    }

    /// The number after the first `.` of the pre-release label, or zero when
    /// there is none or it does not parse
    pub fn pre_release_revision(&self) -> u64 {
        self.pre_release
            .as_deref()
            .and_then(|label| label.split_once('.'))
            .and_then(|(_, revision)| revision.parse().ok())
            .unwrap_or(0)
    }

    /// A version is stable when it has no pre-release label and a non-zero
    /// major bit. Every `0.x` release is unstable.
    pub fn stable(&self) -> bool {
        self.unstable_version_type.is_none() && self.major > 0
    }

    pub fn unstable(&self) -> bool {
        !self.stable()
    }

    pub fn with_major(&self, value: u64) -> Self {
        Version { major: value, ..self.clone() }
    }

    pub fn with_minor(&self, value: u64) -> Self {
        Version { minor: value, ..self.clone() }
    }

    pub fn with_patch(&self, value: u64) -> Self {
        Version { patch: value, ..self.clone() }
    }

    pub fn with_pre_release(&self, value: Option<&str>) -> Result<Self, VersionParserError> {
        Ok(Version::builder_from(self).pre_release(value)?.build())
    }

    pub fn with_build_metadata(&self, value: Option<&str>) -> Result<Self, VersionParserError> {
        Ok(Version::builder_from(self).build_metadata(value)?.build())
    }

    /// Create a range from `start` (inclusive) to `end` (exclusive)
    pub fn range(start: Version, end: Version) -> VersionRange<Version> {
        VersionRange::new(start, true, end, false)
    }

    /// Parse both bounds and create a range from `start` (inclusive) to `end`
    /// (exclusive)
    pub fn range_str(start: &str, end: &str) -> Result<VersionRange<Version>, VersionParserError> {
        Ok(Self::range(Self::parse(start)?, Self::parse(end)?))
    }

    /// Parse a range in interval notation such as `[1.0,2.0)`
    pub fn range_notation(range: &str) -> Result<VersionRange<Version>, VersionParserError> {
        VersionRange::parse(range)
    }

    /// Category ordinal and revision as seen by equality and hashing
    fn precedence_key(&self) -> Option<(UnstableVersionType, u64)> {
        self.unstable_version_type.map(|version_type| {
            let revision = match version_type {
                UnstableVersionType::Unknown => 0,
                _ => self.pre_release_revision(),
            };
            (version_type, revision)
        })
    }

    fn compare_versions(&self, other: &Version) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        let numeric = self
            .major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch));
        if numeric != Ordering::Equal {
            return numeric;
        }

        // Same numbers: the unstable one is older.
        match (self.unstable(), other.unstable()) {
            (false, true) => return Ordering::Greater,
            (true, false) => return Ordering::Less,
            _ => {}
        }

        // Both unstable. An unlabelled 0.x release outranks any labelled one,
        // e.g. 0.0 vs 0.0-alpha.
        match (self.unstable_version_type, other.unstable_version_type) {
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(this_type), Some(other_type)) if this_type != other_type => this_type.cmp(&other_type),
            _ => self.pre_release_revision().cmp(&other.pre_release_revision()),
        }
    }
}

impl VersionInterface for Version {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> u64 {
        self.minor
    }

    fn patch(&self) -> u64 {
        self.patch
    }

    fn unstable_version_type(&self) -> Option<UnstableVersionType> {
        self.unstable_version_type
    }

    fn compare_to(&self, other: Option<&Self>) -> Ordering {
        match other {
            Some(other) => self.compare_versions(other),
            None => Ordering::Greater,
        }
    }

    fn stable(&self) -> bool {
        Version::stable(self)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.stable() == other.stable()
            && self.precedence_key() == other.precedence_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        match self.precedence_key() {
            Some((version_type, revision)) => {
                version_type.ordinal().hash(state);
                revision.hash(state);
            }
            None => usize::MAX.hash(state),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_versions(other)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.patch > 0 {
            write!(f, ".{}", self.patch)?;
        }
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build_metadata) = &self.build_metadata {
            write!(f, "+{}", build_metadata)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// Factory for [`Version`] instances.
///
/// A builder is scratch state for one thread; [`VersionBuilder::build`]
/// resets it so it can be reused.
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
    unstable_version_type: Option<UnstableVersionType>,
}

impl VersionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the builder from a version string
    pub fn parse(&mut self, version: &str) -> Result<&mut Self, VersionParserError> {
        let parsed = VersionParser::parse(version)?;

        self.pre_release(parsed.pre_release)?
            .build_metadata(parsed.build_metadata)?
            .major(parsed.major)
            .minor(parsed.minor)
            .patch(parsed.patch);

        Ok(self)
    }

    /// Build a version and reset the builder
    pub fn build(&mut self) -> Version {
        let builder = std::mem::take(self);
        Version {
            major: builder.major,
            minor: builder.minor,
            patch: builder.patch,
            pre_release: builder.pre_release,
            build_metadata: builder.build_metadata,
            unstable_version_type: builder.unstable_version_type,
        }
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn major(&mut self, major: u64) -> &mut Self {
        self.major = major;
        self
    }

    pub fn minor(&mut self, minor: u64) -> &mut Self {
        self.minor = minor;
        self
    }

    pub fn patch(&mut self, patch: u64) -> &mut Self {
        self.patch = patch;
        self
    }

    /// Set the pre-release label and classify it by the text before its
    /// first `.`
    pub fn pre_release(&mut self, pre_release: Option<&str>) -> Result<&mut Self, VersionParserError> {
        match pre_release {
            Some(label) => {
                validate_label(Field::PreRelease, label)?;
                let identifier = label.split_once('.').map_or(label, |(identifier, _)| identifier);
                self.unstable_version_type = Some(UnstableVersionType::by_alias(identifier));
                self.pre_release = Some(label.to_string());
            }
            None => {
                self.unstable_version_type = None;
                self.pre_release = None;
            }
        }
        Ok(self)
    }

    pub fn build_metadata(&mut self, build_metadata: Option<&str>) -> Result<&mut Self, VersionParserError> {
        if let Some(label) = build_metadata {
            validate_label(Field::BuildMetadata, label)?;
        }
        self.build_metadata = build_metadata.map(str::to_string);
        Ok(self)
    }
}
