use crate::{
    DeviceClass, PropertyRecord,
    record::{DEFAULT_DEVICE, UNKNOWN_AGENT, UNKNOWN_PLATFORM},
    rule::{RulePatch, RuleTable},
    version::{VersionTriple, normalize, resolve_version_token},
};

/// Classifies identity strings using an ordered [`RuleTable`].
///
/// The [`Default`] classifier uses the [builtin](RuleTable::builtin) rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleTable,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleTable::builtin())
    }
}

impl Classifier {
    /// Create a new [`Classifier`] using the given rules.
    #[must_use]
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// The rules used by this [`Classifier`].
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classify `identity` into a [`PropertyRecord`].
    #[must_use]
    pub fn classify(&self, identity: &str) -> PropertyRecord {
        classify(identity, &self.rules)
    }
}

/// Classify `identity` into a [`PropertyRecord`] using `rules`.
///
/// Every rule whose key is contained in the (ASCII) lowercased identity
/// contributes the fields of its patch which are not yet set by an earlier rule.
/// Fields that no rule sets keep their default.
///
/// ```
/// use uafacts::{DeviceClass, RulePatch, RuleTable, classify};
///
/// let rules = RuleTable::builder()
///     .with_rule("ipad", RulePatch::new().with_device_class(DeviceClass::Desktop).with_device_name("iPad"))
///     .with_rule("mobile", RulePatch::new().with_device_class(DeviceClass::Mobile))
///     .build();
///
/// let record = classify("Mozilla/5.0 (iPad) Mobile/15E148", &rules);
/// assert_eq!(record.device_class(), DeviceClass::Desktop);
/// assert_eq!(record.device_name(), "iPad");
/// ```
#[must_use]
pub fn classify(identity: &str, rules: &RuleTable) -> PropertyRecord {
    let identity = identity.to_ascii_lowercase();

    let patch = rules
        .iter()
        .filter(|rule| rule.matches(&identity))
        .fold(WorkingPatch::default(), |mut patch, rule| {
            patch.absorb(rule.patch());
            patch
        });

    let record = patch.finish(&identity);
    tracing::trace!(
        agent.name = %record.agent_name,
        agent.version = %record.agent_version,
        platform.name = %record.platform_name,
        platform.version = %record.platform_version,
        device.name = %record.device_name,
        device.class = %record.device_class,
        "identity classified",
    );
    record
}

/// Facts accumulated while walking the rules, first one set wins.
#[derive(Debug, Default)]
struct WorkingPatch<'a> {
    device_class: Option<DeviceClass>,
    agent_name: Option<&'a str>,
    agent_version: Option<&'a str>,
    agent_version_marker: Option<&'a str>,
    platform_name: Option<&'a str>,
    platform_version: Option<&'a str>,
    platform_version_marker: Option<&'a str>,
    device_name: Option<&'a str>,
}

impl<'a> WorkingPatch<'a> {
    fn absorb(&mut self, patch: &'a RulePatch) {
        fn set_if_absent<'p>(slot: &mut Option<&'p str>, value: Option<&'p String>) {
            if slot.is_none() {
                *slot = value.map(String::as_str);
            }
        }

        if self.device_class.is_none() {
            self.device_class = patch.device_class;
        }
        set_if_absent(&mut self.agent_name, patch.agent_name.as_ref());
        set_if_absent(&mut self.agent_version, patch.agent_version.as_ref());
        set_if_absent(
            &mut self.agent_version_marker,
            patch.agent_version_marker.as_ref(),
        );
        set_if_absent(&mut self.platform_name, patch.platform_name.as_ref());
        set_if_absent(&mut self.platform_version, patch.platform_version.as_ref());
        set_if_absent(
            &mut self.platform_version_marker,
            patch.platform_version_marker.as_ref(),
        );
        set_if_absent(&mut self.device_name, patch.device_name.as_ref());
    }

    fn finish(self, identity: &str) -> PropertyRecord {
        PropertyRecord {
            device_class: self.device_class.unwrap_or_default(),
            agent_name: self.agent_name.unwrap_or(UNKNOWN_AGENT).to_owned(),
            agent_version: resolve_version(
                self.agent_version,
                self.agent_version_marker,
                identity,
            ),
            platform_name: self.platform_name.unwrap_or(UNKNOWN_PLATFORM).to_owned(),
            platform_version: resolve_version(
                self.platform_version,
                self.platform_version_marker,
                identity,
            ),
            device_name: self.device_name.unwrap_or(DEFAULT_DEVICE).to_owned(),
        }
    }
}

fn resolve_version(literal: Option<&str>, marker: Option<&str>, identity: &str) -> VersionTriple {
    match (literal, marker) {
        (Some(raw), _) => normalize(raw),
        (None, Some(marker)) => normalize(resolve_version_token(marker, identity)),
        (None, None) => VersionTriple::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn precedence_rules() -> RuleTable {
        RuleTable::builder()
            .with_rule(
                "ipad",
                RulePatch::new()
                    .with_device_class(DeviceClass::Desktop)
                    .with_device_name("iPad"),
            )
            .with_rule(
                "mobile",
                RulePatch::new().with_device_class(DeviceClass::Mobile),
            )
            .build()
    }

    #[test]
    fn test_first_match_wins_per_field() {
        let record = classify(
            "Mozilla/5.0 (iPad; CPU OS 17_4) Mobile/15E148",
            &precedence_rules(),
        );
        assert_eq!(record.device_class(), DeviceClass::Desktop);
        assert_eq!(record.device_name(), "iPad");

        let record = classify("Mozilla/5.0 (Linux; Android 14) Mobile", &precedence_rules());
        assert_eq!(record.device_class(), DeviceClass::Mobile);
        assert_eq!(record.device_name(), "PC");
    }

    #[test]
    fn test_order_is_the_precedence() {
        let reversed: RuleTable = {
            let rules: Vec<_> = precedence_rules().iter().cloned().collect();
            rules.into_iter().rev().collect()
        };
        let record = classify("Mozilla/5.0 (iPad) Mobile/15E148", &reversed);
        assert_eq!(record.device_class(), DeviceClass::Mobile);
        // not set by the mobile rule, so still contributed by the ipad rule
        assert_eq!(record.device_name(), "iPad");
    }

    #[test]
    fn test_no_match_gives_defaults() {
        for identity in ["", "curl/8.4.0", "mybot/0.2.0"] {
            assert_eq!(
                classify(identity, &precedence_rules()),
                PropertyRecord::default(),
                "test_case: '{identity}'",
            );
        }
        assert_eq!(
            classify("Mozilla/5.0 (iPad)", &RuleTable::default()),
            PropertyRecord::default()
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let record = classify("MOZILLA/5.0 (IPAD)", &precedence_rules());
        assert_eq!(record.device_name(), "iPad");
    }

    #[test]
    fn test_version_from_marker() {
        let rules = RuleTable::builder()
            .with_rule(
                "msie ",
                RulePatch::new()
                    .with_agent_name("IE")
                    .with_agent_version_marker("msie "),
            )
            .with_rule(
                "windows nt",
                RulePatch::new()
                    .with_platform_name("Windows")
                    .with_platform_version_marker("windows nt "),
            )
            .build();

        let record = classify(
            "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)",
            &rules,
        );
        assert_eq!(record.agent_name(), "IE");
        assert_eq!(record.agent_version(), VersionTriple::new(8, 0, 0));
        assert_eq!(record.platform_name(), "Windows");
        assert_eq!(record.platform_version(), VersionTriple::new(6, 1, 0));
    }

    #[test]
    fn test_literal_version_skips_marker() {
        let rules = RuleTable::builder()
            .with_rule(
                "special",
                RulePatch::new()
                    .with_agent_version("2.5")
                    .with_agent_version_marker("special/"),
            )
            .build();
        let record = classify("special/9.9", &rules);
        assert_eq!(record.agent_version(), VersionTriple::new(2, 5, 0));
    }

    #[test]
    fn test_literal_version_from_later_rule_beats_earlier_marker() {
        // literal and marker are separate fields, each first-match-wins,
        // and a resolved literal always takes precedence over a marker
        let rules = RuleTable::builder()
            .with_rule(
                "acme/",
                RulePatch::new()
                    .with_agent_name("Acme")
                    .with_agent_version_marker("acme/")
                    .with_platform_version_marker("os "),
            )
            .with_rule(
                "legacy",
                RulePatch::new()
                    .with_agent_version("1.0")
                    .with_platform_version("7"),
            )
            .build();

        let record = classify("Acme/9.9 (OS 12_1; legacy)", &rules);
        assert_eq!(record.agent_name(), "Acme");
        assert_eq!(record.agent_version(), VersionTriple::new(1, 0, 0));
        assert_eq!(record.platform_version(), VersionTriple::new(7, 0, 0));

        // without the literal rule matching, the marker is used
        let record = classify("Acme/9.9 (OS 12_1)", &rules);
        assert_eq!(record.agent_version(), VersionTriple::new(9, 9, 0));
        assert_eq!(record.platform_version(), VersionTriple::new(12, 1, 0));
    }

    #[test]
    fn test_version_marker_from_override_rule() {
        // a narrow rule only overrides the version marker of the general rule after it
        let rules = RuleTable::builder()
            .with_rule(
                "trident/",
                RulePatch::new().with_agent_version_marker("rv:"),
            )
            .with_rule(
                "msie",
                RulePatch::new()
                    .with_agent_name("IE")
                    .with_agent_version_marker("msie "),
            )
            .build();

        let record = classify(
            "Mozilla/5.0 (compatible; MSIE 10.0; Trident/7.0; rv:11.0) like Gecko",
            &rules,
        );
        assert_eq!(record.agent_name(), "IE");
        assert_eq!(record.agent_version(), VersionTriple::new(11, 0, 0));
    }

    #[test]
    fn test_missing_marker_gives_zero_version() {
        let rules = RuleTable::builder()
            .with_rule(
                "safari",
                RulePatch::new()
                    .with_agent_name("Safari")
                    .with_agent_version_marker("version/"),
            )
            .build();
        let record = classify("Safari/605.1.15", &rules);
        assert_eq!(record.agent_name(), "Safari");
        assert_eq!(record.agent_version(), VersionTriple::ZERO);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let classifier = Classifier::default();
        let identity = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
        assert_eq!(classifier.classify(identity), classifier.classify(identity));
    }

    #[test]
    fn test_classifier_rules() {
        let classifier = Classifier::new(precedence_rules());
        assert_eq!(classifier.rules(), &precedence_rules());
        assert_eq!(Classifier::default().rules(), &RuleTable::builtin());
    }
}
