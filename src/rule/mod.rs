//! Ordered substring rules.
//!
//! A [`Rule`] pairs a lowercase match key with a [`RulePatch`]. Rules are
//! applied in the order of their [`RuleTable`]: for every field the first
//! matching rule that sets it wins, so narrow rules are listed before the
//! general rules they refine.
//!
//! Rule tables can be loaded from JSON, as an array of rules:
//!
//! ```json
//! [
//!   { "key": "ipad", "device_class": "desktop", "device_name": "iPad" },
//!   { "key": "mobile", "device_class": "mobile" }
//! ]
//! ```
//!
//! Array position, not object key order, defines the precedence.

use crate::{
    DeviceClass,
    error::{ErrorContext as _, OpaqueError},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{io::Read, sync::Arc};

mod builtin;

/// A partial set of facts, contributed by a matching [`Rule`].
///
/// Versions can either be given as a raw literal (`agent_version`, `platform_version`)
/// or be located in the identity string using a marker (`agent_version_marker`,
/// `platform_version_marker`), in which case the text following the marker is used.
/// A literal takes precedence over a marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePatch {
    /// Class of the device, e.g. [`DeviceClass::Mobile`].
    pub device_class: Option<DeviceClass>,
    /// Name of the agent (e.g. `Chrome`).
    pub agent_name: Option<String>,
    /// Raw (literal) version of the agent.
    pub agent_version: Option<String>,
    /// Marker after which the agent version can be found.
    pub agent_version_marker: Option<String>,
    /// Name of the platform (e.g. `Windows`).
    pub platform_name: Option<String>,
    /// Raw (literal) version of the platform.
    pub platform_version: Option<String>,
    /// Marker after which the platform version can be found.
    pub platform_version_marker: Option<String>,
    /// Name of the device (e.g. `iPad`).
    pub device_name: Option<String>,
}

impl RulePatch {
    /// Create an empty [`RulePatch`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`DeviceClass`].
    #[must_use]
    pub fn with_device_class(mut self, class: DeviceClass) -> Self {
        self.device_class = Some(class);
        self
    }

    /// Set the agent name.
    #[must_use]
    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Set a literal agent version.
    #[must_use]
    pub fn with_agent_version(mut self, version: impl Into<String>) -> Self {
        self.agent_version = Some(version.into());
        self
    }

    /// Set the marker which locates the agent version.
    #[must_use]
    pub fn with_agent_version_marker(mut self, marker: impl Into<String>) -> Self {
        self.agent_version_marker = Some(marker.into());
        self
    }

    /// Set the platform name.
    #[must_use]
    pub fn with_platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = Some(name.into());
        self
    }

    /// Set a literal platform version.
    #[must_use]
    pub fn with_platform_version(mut self, version: impl Into<String>) -> Self {
        self.platform_version = Some(version.into());
        self
    }

    /// Set the marker which locates the platform version.
    #[must_use]
    pub fn with_platform_version_marker(mut self, marker: impl Into<String>) -> Self {
        self.platform_version_marker = Some(marker.into());
        self
    }

    /// Set the device name.
    #[must_use]
    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    /// Returns `true` if the patch does not set any field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A substring match key with the [`RulePatch`] it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRow", into = "RuleRow")]
pub struct Rule {
    key: String,
    patch: RulePatch,
}

impl Rule {
    /// Create a new [`Rule`].
    ///
    /// The key is lowercased (ASCII), as it is matched
    /// against the lowercased identity string.
    pub fn new(key: impl Into<String>, patch: RulePatch) -> Self {
        let mut key = key.into();
        key.make_ascii_lowercase();
        Self { key, patch }
    }

    /// The (lowercase) substring this rule matches on.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The facts contributed by this rule.
    #[must_use]
    pub fn patch(&self) -> &RulePatch {
        &self.patch
    }

    /// Returns `true` if this rule applies to the already lowercased identity string.
    #[must_use]
    pub fn matches(&self, lowercased_identity: &str) -> bool {
        lowercased_identity.contains(self.key.as_str())
    }
}

/// Flat (JSON) representation of a [`Rule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleRow {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_class: Option<DeviceClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_version_marker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_version_marker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_name: Option<String>,
}

impl From<RuleRow> for Rule {
    fn from(row: RuleRow) -> Self {
        Self::new(
            row.key,
            RulePatch {
                device_class: row.device_class,
                agent_name: row.agent_name,
                agent_version: row.agent_version,
                agent_version_marker: row.agent_version_marker,
                platform_name: row.platform_name,
                platform_version: row.platform_version,
                platform_version_marker: row.platform_version_marker,
                device_name: row.device_name,
            },
        )
    }
}

impl From<Rule> for RuleRow {
    fn from(rule: Rule) -> Self {
        let Rule { key, patch } = rule;
        Self {
            key,
            device_class: patch.device_class,
            agent_name: patch.agent_name,
            agent_version: patch.agent_version,
            agent_version_marker: patch.agent_version_marker,
            platform_name: patch.platform_name,
            platform_version: patch.platform_version,
            platform_version_marker: patch.platform_version_marker,
            device_name: patch.device_name,
        }
    }
}

/// An ordered, immutable sequence of [`Rule`]s.
///
/// Cloning a [`RuleTable`] is cheap, the rules are shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: Arc<[Rule]>,
}

impl RuleTable {
    /// The rule table bundled with this crate.
    ///
    /// It recognises the mainstream browsers, platforms and devices.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::table()
    }

    /// Create a [`RuleTableBuilder`] to build a custom [`RuleTable`].
    #[must_use]
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Load a [`RuleTable`] from a JSON array of rules.
    pub fn from_json_str(s: &str) -> Result<Self, OpaqueError> {
        let table: Self = serde_json::from_str(s).context("decode json rule table")?;
        tracing::debug!(rules = table.len(), "rule table loaded from json");
        Ok(table)
    }

    /// Load a [`RuleTable`] from a reader producing a JSON array of rules.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, OpaqueError> {
        let table: Self = serde_json::from_reader(reader).context("read json rule table")?;
        tracing::debug!(rules = table.len(), "rule table loaded from json");
        Ok(table)
    }

    /// Iterate over the rules, in order of precedence.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Amount of rules in this table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if this table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for RuleTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_seq(self.rules.iter())
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rules = Vec::<Rule>::deserialize(deserializer)?;
        Ok(rules.into_iter().collect())
    }
}

/// Builder for a [`RuleTable`], keeping rules in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RuleTableBuilder {
    rules: Vec<Rule>,
}

impl RuleTableBuilder {
    /// Append a rule, with lower precedence than all rules added before it.
    #[must_use]
    pub fn with_rule(mut self, key: impl Into<String>, patch: RulePatch) -> Self {
        self.rules.push(Rule::new(key, patch));
        self
    }

    /// Build the [`RuleTable`].
    #[must_use]
    pub fn build(self) -> RuleTable {
        self.rules.into_iter().collect()
    }
}
