//! Semantic versions with stability-aware ordering
//!
//! This crate provides immutable versions (`MAJOR.MINOR[.PATCH][-PRE][+META]`),
//! a pre-release classifier that ranks `snapshot < alpha < beta < rc`, and
//! intervals between versions written in `[1.0,2.0)` notation. Java runtime
//! versions with an `_N` update number plug into the same range machinery.

mod java_version;
pub mod range;
#[cfg(feature = "serde")]
mod serde_impl;
mod unstable_version_type;
mod version;
mod version_interface;
mod version_parser;

pub use java_version::{HostVersionSource, JavaVersion, JavaVersionBuilder};
pub use range::{VersionRange, VersionRangeBuilder, VersionRangeError};
pub use unstable_version_type::UnstableVersionType;
pub use version::{Version, VersionBuilder};
pub use version_interface::VersionInterface;
pub use version_parser::{Field, ParsedVersion, VersionParser, VersionParserError};
