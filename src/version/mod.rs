//! Version facts: normalization, resolution and precision-aware comparison.
//!
//! Versions found in identity strings are noisy (`10_15_7`, `8.0;`, `3.07`).
//! They are always reduced to a fully populated [`VersionTriple`], which is
//! compared against a textual [`VersionQuery`] at the precision the query
//! itself specifies: the query `"3"` matches every `3.x.y`.

use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

mod normalize;
#[doc(inline)]
pub use normalize::normalize;

mod resolve;
#[doc(inline)]
pub use resolve::{VERSION_TOKEN_TERMINATOR, resolve_version_token};

mod compare;
#[doc(inline)]
pub use compare::{VersionQuery, compare_at_precision};

/// A fixed-width `major.minor.patch` version.
///
/// Missing trailing components are always `0`,
/// such that a [`VersionTriple`] is never partially defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    /// Most significant component.
    pub major: u32,
    /// Second component.
    pub minor: u32,
    /// Least significant component.
    pub patch: u32,
}

impl VersionTriple {
    /// The `0.0.0` version, used whenever no version is known.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new [`VersionTriple`].
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

}

/// Parse one version component.
///
/// A component made only of ASCII digits saturates at [`u32::MAX`]
/// when it does not fit. Anything else (empty, signs, letters) is `0`.
fn parse_component(part: &str) -> u32 {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    part.parse().unwrap_or(u32::MAX)
}

impl From<(u32, u32, u32)> for VersionTriple {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<[u32; 3]> for VersionTriple {
    fn from([major, minor, patch]: [u32; 3]) -> Self {
        Self::new(major, minor, patch)
    }
}

impl From<VersionTriple> for [u32; 3] {
    fn from(version: VersionTriple) -> Self {
        [version.major, version.minor, version.patch]
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = Infallible;

    /// Parses using [`normalize`], which accepts any input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize(s))
    }
}

impl Serialize for VersionTriple {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionTriple {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(normalize(&s))
    }
}
