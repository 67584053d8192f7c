//! Range between two versions

use std::collections::HashSet;

use thiserror::Error;

use crate::VersionInterface;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionRangeError {
    #[error("Missing starting bound")]
    MissingStartBound,
    #[error("Missing ending bound")]
    MissingEndBound,
}

/// An interval between two versions of the same kind.
///
/// Bounds are not checked against each other: an inverted range is valid and
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange<V> {
    start_bound: V,
    start_inclusive: bool,
    end_bound: V,
    end_inclusive: bool,
}

impl<V: VersionInterface> VersionRange<V> {
    pub(crate) fn new(start_bound: V, start_inclusive: bool, end_bound: V, end_inclusive: bool) -> Self {
        VersionRange {
            start_bound,
            start_inclusive,
            end_bound,
            end_inclusive,
        }
    }

    /// Get a new builder
    pub fn builder() -> VersionRangeBuilder<V> {
        VersionRangeBuilder::new()
    }

    /// Get a builder that replicates the bounds of `range`
    pub fn builder_from(range: &VersionRange<V>) -> VersionRangeBuilder<V> {
        let mut builder = VersionRangeBuilder::new();
        builder
            .start_bound(Some(range.start_bound.clone()))
            .start_inclusive(range.start_inclusive)
            .end_bound(Some(range.end_bound.clone()))
            .end_inclusive(range.end_inclusive);
        builder
    }

    pub fn start_bound(&self) -> &V {
        &self.start_bound
    }

    pub fn end_bound(&self) -> &V {
        &self.end_bound
    }

    /// Check whether the starting version is part of the range
    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    /// Check whether the ending version is part of the range
    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    pub fn with_start_bound(&self, start_bound: V) -> Self {
        VersionRange {
            start_bound,
            ..self.clone()
        }
    }

    pub fn with_end_bound(&self, end_bound: V) -> Self {
        VersionRange {
            end_bound,
            ..self.clone()
        }
    }

    pub fn with_start_inclusive(&self, value: bool) -> Self {
        VersionRange {
            start_inclusive: value,
            ..self.clone()
        }
    }

    pub fn with_end_inclusive(&self, value: bool) -> Self {
        VersionRange {
            end_inclusive: value,
            ..self.clone()
        }
    }

    /// Check whether `version` is part of this range. An absent version
    /// never matches.
    pub fn matches<'v>(&self, version: impl Into<Option<&'v V>>) -> bool
    where
        V: 'v,
    {
        let Some(version) = version.into() else {
            return false;
        };

        if !self.start_inclusive && self.start_bound == *version {
            return false;
        }
        if !self.end_inclusive && self.end_bound == *version {
            return false;
        }

        !self.start_bound.newer_than(version) && !self.end_bound.older_than(version)
    }

    /// Collect every version in `versions` that is part of this range
    pub fn matching<'v, I>(&self, versions: I) -> HashSet<V>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        versions
            .into_iter()
            .filter(|version| self.matches(*version))
            .cloned()
            .collect()
    }
}

/// Factory for [`VersionRange`] instances.
///
/// Starts with an inclusive start and an exclusive end. Not meant to be
/// shared between threads; [`VersionRangeBuilder::build`] resets it.
#[derive(Debug, Clone)]
pub struct VersionRangeBuilder<V> {
    start_bound: Option<V>,
    start_inclusive: bool,
    end_bound: Option<V>,
    end_inclusive: bool,
}

impl<V> Default for VersionRangeBuilder<V> {
    fn default() -> Self {
        VersionRangeBuilder {
            start_bound: None,
            start_inclusive: true,
            end_bound: None,
            end_inclusive: false,
        }
    }
}

impl<V: VersionInterface> VersionRangeBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a range and reset the builder, whether or not both bounds were
    /// set
    pub fn build(&mut self) -> Result<VersionRange<V>, VersionRangeError> {
        let builder = std::mem::take(self);

        let start_bound = builder.start_bound.ok_or(VersionRangeError::MissingStartBound)?;
        let end_bound = builder.end_bound.ok_or(VersionRangeError::MissingEndBound)?;

        Ok(VersionRange::new(
            start_bound,
            builder.start_inclusive,
            end_bound,
            builder.end_inclusive,
        ))
    }

    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn start_bound(&mut self, start_bound: Option<V>) -> &mut Self {
        self.start_bound = start_bound;
        self
    }

    pub fn start_inclusive(&mut self, start_inclusive: bool) -> &mut Self {
        self.start_inclusive = start_inclusive;
        self
    }

    pub fn end_bound(&mut self, end_bound: Option<V>) -> &mut Self {
        self.end_bound = end_bound;
        self
    }

    pub fn end_inclusive(&mut self, end_inclusive: bool) -> &mut Self {
        self.end_inclusive = end_inclusive;
        self
    }
}
