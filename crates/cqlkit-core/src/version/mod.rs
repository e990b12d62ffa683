//! Module: version
//! Responsibility: store version descriptors and their canonical ordering.
//! Does not own: discovery of the running store's version.
//! Boundary: consumed by config gating and by callers comparing releases.

mod feature;


use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error as ThisError;

// re-exports
pub use feature::StoreFeature;

///
/// VersionError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("invalid version component '{component}'")]
    InvalidComponent { component: String },

    #[error("version has {count} numeric components; at most 3 are allowed")]
    TooManyComponents { count: usize },

    #[error("version qualifier is empty")]
    EmptyQualifier,
}

///
/// Version
///
/// `major.minor.patch` with an optional pre-release qualifier.
/// Missing minor/patch components parse as zero.
///

#[derive(Clone, Debug)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub qualifier: Option<String>,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            qualifier: None,
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    #[must_use]
    pub const fn is_prerelease(&self) -> bool {
        self.qualifier.is_some()
    }

    /// Canonical three-way ordering.
    ///
    /// Numeric components compare first. A release ranks above any
    /// qualified build of the same numbers. Qualifiers compare identifier
    /// by identifier: numeric ones numerically and below alphanumeric ones,
    /// alphanumeric ones lexicographically, and a shorter prefix ranks lower.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.qualifier, &other.qualifier) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => cmp_qualifiers(a, b),
            })
    }

    /// `-1`, `0`, or `1` as `self` is below, equal to, or above `other`.
    #[must_use]
    pub fn three_way(&self, other: &Self) -> i8 {
        match self.canonical_cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    #[must_use]
    pub fn supports(&self, feature: StoreFeature) -> bool {
        *self >= feature.min_version()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(4, 0, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{qualifier}")?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let (numbers, qualifier) = match s.split_once('-') {
            Some((_, "")) => return Err(VersionError::EmptyQualifier),
            Some((numbers, qualifier)) => (numbers, Some(qualifier.to_string())),
            None => (s, None),
        };

        let components = numbers
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| VersionError::InvalidComponent {
                        component: part.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (major, minor, patch) = match components.as_slice() {
            [major] => (*major, 0, 0),
            [major, minor] => (*major, *minor, 0),
            [major, minor, patch] => (*major, *minor, *patch),
            _ => {
                return Err(VersionError::TooManyComponents {
                    count: components.len(),
                });
            }
        };

        Ok(Self {
            major,
            minor,
            patch,
            qualifier,
        })
    }
}

// ----------------------------------------------------------------------
// Relational surface (delegates to canonical_cmp)
// ----------------------------------------------------------------------

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_cmp(other)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ----------------------------------------------------------------------
// Internal helpers
// ----------------------------------------------------------------------

fn cmp_qualifiers(a: &str, b: &str) -> Ordering {
    let split = |c: char| c == '.' || c == '-';
    let mut left = a.split(split);
    let mut right = b.split(split);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = cmp_identifiers(l, r);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn cmp_identifiers(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match (numeric(a), numeric(b)) {
        (true, true) => {
            // digit strings: width first, then lexically
            let a = a.trim_start_matches('0');
            let b = b.trim_start_matches('0');
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}
