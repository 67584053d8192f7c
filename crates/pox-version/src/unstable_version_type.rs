//! Pre-release categories used to order unstable versions

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Coarse category of a pre-release label.
///
/// Variants are declared in precedence order: a snapshot is older than an
/// alpha, an alpha older than a beta and so on. `Unknown` covers every label
/// without a registered alias and ranks below all named categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnstableVersionType {
    Unknown,
    Snapshot,
    Alpha,
    Beta,
    ReleaseCandidate,
}

lazy_static! {
    // First registration wins when two categories claim the same alias.
    static ref ALIASES: HashMap<&'static str, UnstableVersionType> = {
        let mut map = HashMap::new();
        for version_type in UnstableVersionType::ALL {
            for alias in version_type.aliases() {
                map.entry(*alias).or_insert(version_type);
            }
        }
        map
    };
}

impl UnstableVersionType {
    /// All categories in declaration order
    pub const ALL: [UnstableVersionType; 5] = [
        UnstableVersionType::Unknown,
        UnstableVersionType::Snapshot,
        UnstableVersionType::Alpha,
        UnstableVersionType::Beta,
        UnstableVersionType::ReleaseCandidate,
    ];

    /// Resolve a pre-release identifier (case-sensitive)
    pub fn by_alias(alias: &str) -> Self {
        ALIASES
            .get(alias)
            .copied()
            .unwrap_or(UnstableVersionType::Unknown)
    }

    /// Aliases owned by this category, in registration order
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            UnstableVersionType::Unknown => &[],
            UnstableVersionType::Snapshot => &["snapshot"],
            UnstableVersionType::Alpha => &["a", "alpha"],
            UnstableVersionType::Beta => &["b", "beta"],
            UnstableVersionType::ReleaseCandidate => &["rc"],
        }
    }

    /// Position of the category in declaration order
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnstableVersionType::Unknown => "unknown",
            UnstableVersionType::Snapshot => "snapshot",
            UnstableVersionType::Alpha => "alpha",
            UnstableVersionType::Beta => "beta",
            UnstableVersionType::ReleaseCandidate => "rc",
        }
    }
}

impl fmt::Display for UnstableVersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
