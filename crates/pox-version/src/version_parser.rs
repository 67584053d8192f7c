//! Version string tokenizer and parse errors

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

use crate::range::VersionRangeError;

/// Version component named in parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    UpdateNumber,
    PreRelease,
    BuildMetadata,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major bit",
            Field::Minor => "minor bit",
            Field::Patch => "patch bit",
            Field::UpdateNumber => "update number",
            Field::PreRelease => "pre-release bit",
            Field::BuildMetadata => "metadata bit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid {field} \"{segment}\": {source}")]
    InvalidNumber {
        field: Field,
        segment: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid special character in {field}: {character}")]
    InvalidCharacter { field: Field, character: char },
    #[error("Invalid version range: Missing separator")]
    MissingSeparator,
    #[error("Invalid version range: Missing starting bound type")]
    MissingStartBoundType,
    #[error("Invalid version range: Missing ending bound type")]
    MissingEndBoundType,
    #[error("Host runtime did not report a version")]
    MissingHostVersion,
    #[error(transparent)]
    Range(#[from] VersionRangeError),
}

/// Components of a version string, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedVersion<'a> {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<&'a str>,
    pub build_metadata: Option<&'a str>,
}

/// Tokenizer for `MAJOR[.MINOR[.PATCH]][-PRERELEASE][+METADATA]`.
///
/// The pre-release and metadata markers may appear in either order, so both
/// `1.0-alpha+meta` and `1.0+meta-alpha` carry the same components. Labels
/// are returned as found; character validation happens when they are handed
/// to a builder.
pub struct VersionParser;

impl VersionParser {
    /// Split a version string into its numeric head, pre-release label and
    /// build metadata label
    pub fn split(version: &str) -> (&str, Option<&str>, Option<&str>) {
        let extra_offset = version.find('-');
        let metadata_offset = version.find('+');

        let mut pre_release = extra_offset.map(|offset| &version[offset + 1..]);
        let mut build_metadata = metadata_offset.map(|offset| &version[offset + 1..]);

        // Whichever marker comes first owns the text up to the other one.
        match (extra_offset, metadata_offset) {
            (Some(extra), Some(metadata)) if metadata > extra => {
                pre_release = Some(&version[extra + 1..metadata]);
            }
            (Some(extra), Some(metadata)) => {
                build_metadata = Some(&version[metadata + 1..extra]);
            }
            _ => {}
        }

        let head_end = match (extra_offset, metadata_offset) {
            (Some(extra), Some(metadata)) => extra.min(metadata),
            (Some(offset), None) | (None, Some(offset)) => offset,
            (None, None) => version.len(),
        };

        (&version[..head_end], pre_release, build_metadata)
    }

    /// Tokenize a version string.
    ///
    /// Missing numeric segments default to zero and segments past the patch
    /// bit are not inspected.
    pub fn parse(version: &str) -> Result<ParsedVersion<'_>, VersionParserError> {
        let (head, pre_release, build_metadata) = Self::split(version);

        let mut parsed = ParsedVersion {
            pre_release,
            build_metadata,
            ..ParsedVersion::default()
        };

        let (major, rest) = take_segment(head, Field::Major)?;
        let (minor, rest) = take_segment(rest, Field::Minor)?;
        let (patch, _) = take_segment(rest, Field::Patch)?;

        if let Some(major) = major {
            parsed.major = major;
        }
        if let Some(minor) = minor {
            parsed.minor = minor;
        }
        if let Some(patch) = patch {
            parsed.patch = patch;
        }

        Ok(parsed)
    }
}

/// Consume one dot-separated numeric segment
fn take_segment(input: &str, field: Field) -> Result<(Option<u64>, &str), VersionParserError> {
    if input.is_empty() {
        return Ok((None, input));
    }

    let (segment, rest) = input.split_once('.').unwrap_or((input, ""));
    let value = parse_number(segment, field)?;

    Ok((Some(value), rest))
}

pub(crate) fn parse_number(segment: &str, field: Field) -> Result<u64, VersionParserError> {
    segment
        .parse::<u64>()
        .map_err(|source| VersionParserError::InvalidNumber {
            field,
            segment: segment.to_string(),
            source,
        })
}

/// Reject labels containing the `-` or `+` delimiters
pub(crate) fn validate_label(field: Field, label: &str) -> Result<(), VersionParserError> {
    for character in ['-', '+'] {
        if label.contains(character) {
            return Err(VersionParserError::InvalidCharacter { field, character });
        }
    }
    Ok(())
}
