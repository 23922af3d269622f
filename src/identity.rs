use crate::{Classifier, PropertyRecord};
use std::{convert::Infallible, fmt, ops::Deref, str::FromStr, sync::Arc};

/// An identity string together with the facts resolved for it.
///
/// Resolved once, at creation, and immutable afterwards. It derefs
/// to its [`PropertyRecord`] such that the facts can be queried directly.
///
/// ```
/// use uafacts::AgentIdentity;
///
/// let identity = AgentIdentity::new(
///     "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
/// );
/// assert!(identity.is_agent("Firefox"));
/// assert!(identity.agent_version_at_least("125"));
/// assert!(identity.is_platform("Windows"));
/// assert!(identity.is_desktop());
/// ```
#[derive(Debug, Clone)]
pub struct AgentIdentity {
    raw: Arc<str>,
    record: Arc<PropertyRecord>,
}

impl AgentIdentity {
    /// Resolve the identity string using the builtin rules.
    pub fn new(raw: impl Into<Arc<str>>) -> Self {
        Self::with_classifier(raw, &Classifier::default())
    }

    /// Resolve the identity string using the given [`Classifier`].
    pub fn with_classifier(raw: impl Into<Arc<str>>, classifier: &Classifier) -> Self {
        let raw = raw.into();
        let record = Arc::new(classifier.classify(&raw));
        Self { raw, record }
    }

    /// returns the raw identity string.
    #[must_use]
    pub fn raw_str(&self) -> &str {
        &self.raw
    }

    /// returns the resolved [`PropertyRecord`].
    #[must_use]
    pub fn record(&self) -> &PropertyRecord {
        &self.record
    }
}

impl Deref for AgentIdentity {
    type Target = PropertyRecord;

    fn deref(&self) -> &Self::Target {
        &self.record
    }
}

impl fmt::Display for AgentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for AgentIdentity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
