//! Version interface trait

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::UnstableVersionType;

/// Trait for all version types that can be compared and placed in ranges
pub trait VersionInterface: fmt::Debug + fmt::Display + Clone + Eq + Hash + Send + Sync {
    /// Get the major version bit
    fn major(&self) -> u64;

    /// Get the minor version bit
    fn minor(&self) -> u64;

    /// Get the patch version bit
    fn patch(&self) -> u64;

    /// Get the pre-release category, if a pre-release label is present
    fn unstable_version_type(&self) -> Option<UnstableVersionType>;

    /// Compare against another version. An absent version is always older.
    fn compare_to(&self, other: Option<&Self>) -> Ordering;

    /// Check if this version is stable
    fn stable(&self) -> bool;

    /// Check if this version is unstable
    fn unstable(&self) -> bool {
        !self.stable()
    }

    /// Check if this version is newer than `other`
    fn newer_than<'v>(&self, other: impl Into<Option<&'v Self>>) -> bool
    where
        Self: 'v,
    {
        self.compare_to(other.into()) == Ordering::Greater
    }

    /// Check if this version is older than `other`
    fn older_than<'v>(&self, other: impl Into<Option<&'v Self>>) -> bool
    where
        Self: 'v,
    {
        self.compare_to(other.into()) == Ordering::Less
    }

    /// Run `consumer` if this version equals `other`
    fn if_equal(&self, other: &Self, consumer: impl FnOnce(&Self)) -> &Self {
        if self == other {
            consumer(self);
        }
        self
    }

    /// Run `consumer` if this version is newer than `other`
    fn if_newer_than<'v>(&self, other: impl Into<Option<&'v Self>>, consumer: impl FnOnce(&Self)) -> &Self
    where
        Self: 'v,
    {
        if self.newer_than(other) {
            consumer(self);
        }
        self
    }

    /// Run `consumer` if this version is older than `other`
    fn if_older_than<'v>(&self, other: impl Into<Option<&'v Self>>, consumer: impl FnOnce(&Self)) -> &Self
    where
        Self: 'v,
    {
        if self.older_than(other) {
            consumer(self);
        }
        self
    }

    /// Run `consumer` if this version is stable
    fn if_stable(&self, consumer: impl FnOnce(&Self)) -> &Self {
        if self.stable() {
            consumer(self);
        }
        self
    }

    /// Run `consumer` if this version is unstable
    fn if_unstable(&self, consumer: impl FnOnce(&Self)) -> &Self {
        if self.unstable() {
            consumer(self);
        }
        self
    }
}
