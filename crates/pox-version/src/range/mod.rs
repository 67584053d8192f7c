//! Version ranges and their interval notation

mod notation;
mod version_range;

pub use version_range::{VersionRange, VersionRangeBuilder, VersionRangeError};
