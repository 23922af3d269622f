use super::{VersionTriple, parse_component};
use std::{cmp::Ordering, convert::Infallible, fmt, str::FromStr};

/// A textual version query, compared at its own precision.
///
/// The query is split on `.` and only its first three components are kept.
/// The amount of kept components is the precision of the query:
/// components of the target beyond that precision are not compared,
/// such that `"3"` is equal to `3.5.1` and `"3.5"` is equal to `3.5.9`.
///
/// A component which is not a base-10 integer compares as `0`,
/// an integer too large for a `u32` compares as [`u32::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionQuery {
    components: [u32; 3],
    precision: usize,
}

impl VersionQuery {
    /// Parse a [`VersionQuery`] from its textual representation.
    ///
    /// Any input is accepted, see the type documentation for the details.
    #[must_use]
    pub fn new(query: &str) -> Self {
        let mut components = [0u32; 3];
        let mut precision = 0;
        for (component, part) in components.iter_mut().zip(query.split('.')) {
            *component = parse_component(part);
            precision += 1;
        }
        Self {
            components,
            precision,
        }
    }

    /// Amount of significant components (`1..=3`).
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Compare this query against `target`, limited to the precision of the query.
    ///
    /// [`Ordering::Less`] means the query is lower than the target.
    #[must_use]
    pub fn cmp_triple(&self, target: &VersionTriple) -> Ordering {
        let target: [u32; 3] = (*target).into();
        self.components
            .iter()
            .zip(target.iter())
            .take(self.precision)
            .map(|(query, target)| query.cmp(target))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns `true` if `target` equals this query at its precision.
    #[must_use]
    pub fn matches(&self, target: &VersionTriple) -> bool {
        self.cmp_triple(target).is_eq()
    }

    /// Returns `true` if `target` is at least this query at its precision.
    #[must_use]
    pub fn is_reached_by(&self, target: &VersionTriple) -> bool {
        self.cmp_triple(target).is_le()
    }

    /// Returns `true` if `target` is below this query at its precision.
    #[must_use]
    pub fn is_above(&self, target: &VersionTriple) -> bool {
        self.cmp_triple(target).is_gt()
    }
}

impl From<&str> for VersionQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl FromStr for VersionQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for VersionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, component) in self.components.iter().take(self.precision).enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Compare the textual `query` against `target` at the precision of the query,
/// returning `if_less`, `if_equal` or `if_more` depending on whether the query
/// is lower than, equal to or higher than the target.
///
/// Passing different outcomes turns this into different predicates:
///
/// - `(false, true, false)`: `target` matches the query;
/// - `(true, true, false)`: `target` is at least the query;
/// - `(false, false, true)`: `target` is below the query.
///
/// ```
/// use uafacts::version::{VersionTriple, compare_at_precision};
///
/// let target = VersionTriple::new(3, 5, 1);
/// assert!(compare_at_precision("3", &target, false, true, false));
/// assert!(!compare_at_precision("3.0", &target, false, true, false));
/// assert!(compare_at_precision("3.5.2", &target, false, false, true));
/// ```
pub fn compare_at_precision<T>(
    query: &str,
    target: &VersionTriple,
    if_less: T,
    if_equal: T,
    if_more: T,
) -> T {
    match VersionQuery::new(query).cmp_triple(target) {
        Ordering::Less => if_less,
        Ordering::Equal => if_equal,
        Ordering::Greater => if_more,
    }
}
