use crate::{
    error::OpaqueError,
    version::{VersionTriple, compare_at_precision},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Agent name used when no rule names the agent.
pub const UNKNOWN_AGENT: &str = "Unknown";
/// Platform name used when no rule names the platform.
pub const UNKNOWN_PLATFORM: &str = "Unknown";
/// Device name used when no rule names the device.
pub const DEFAULT_DEVICE: &str = "PC";

/// Class of device on which the agent operates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Personal Computers, also used when the class is unknown
    #[default]
    Desktop,
    /// Phones and other mobile devices
    Mobile,
}

impl DeviceClass {
    /// returns the lowercase name of the [`DeviceClass`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("desktop") {
            Ok(Self::Desktop)
        } else if s.eq_ignore_ascii_case("mobile") {
            Ok(Self::Mobile)
        } else {
            Err(OpaqueError::from_display(format!(
                "invalid device class: {s}"
            )))
        }
    }
}

impl Serialize for DeviceClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// The facts resolved for one identity string.
///
/// Every field is always defined, defaults are used for
/// facts that no rule contributed. A [`PropertyRecord`] is
/// immutable once created by the [`Classifier`](crate::Classifier).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyRecord {
    pub(crate) device_class: DeviceClass,
    pub(crate) agent_name: String,
    pub(crate) agent_version: VersionTriple,
    pub(crate) platform_name: String,
    pub(crate) platform_version: VersionTriple,
    pub(crate) device_name: String,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        Self {
            device_class: DeviceClass::Desktop,
            agent_name: UNKNOWN_AGENT.to_owned(),
            agent_version: VersionTriple::ZERO,
            platform_name: UNKNOWN_PLATFORM.to_owned(),
            platform_version: VersionTriple::ZERO,
            device_name: DEFAULT_DEVICE.to_owned(),
        }
    }
}

impl PropertyRecord {
    /// returns the [`DeviceClass`] of the agent.
    #[must_use]
    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }

    /// returns the name of the agent, `"Unknown"` if not known.
    #[must_use]
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// returns the version of the agent, `0.0.0` if not known.
    #[must_use]
    pub fn agent_version(&self) -> VersionTriple {
        self.agent_version
    }

    /// returns the name of the platform, `"Unknown"` if not known.
    #[must_use]
    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    /// returns the version of the platform, `0.0.0` if not known.
    #[must_use]
    pub fn platform_version(&self) -> VersionTriple {
        self.platform_version
    }

    /// returns the name of the device, `"PC"` if not known.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Returns `true` if the agent name is exactly `name` (case sensitive).
    #[must_use]
    pub fn is_agent(&self, name: &str) -> bool {
        self.agent_name == name
    }

    /// Returns `true` if the platform name is exactly `name` (case sensitive).
    #[must_use]
    pub fn is_platform(&self, name: &str) -> bool {
        self.platform_name == name
    }

    /// Returns `true` if the device name is exactly `name` (case sensitive).
    #[must_use]
    pub fn is_device(&self, name: &str) -> bool {
        self.device_name == name
    }

    /// Returns `true` if the device is of the given [`DeviceClass`].
    #[must_use]
    pub fn is_device_class(&self, class: DeviceClass) -> bool {
        self.device_class == class
    }

    /// Returns `true` for [`DeviceClass::Mobile`] devices.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_device_class(DeviceClass::Mobile)
    }

    /// Returns `true` for [`DeviceClass::Desktop`] devices, the default class.
    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.is_device_class(DeviceClass::Desktop)
    }

    /// Returns `true` if the agent version equals `query`,
    /// compared only up to the precision of the query (e.g. `"124"` or `"17.4"`).
    #[must_use]
    pub fn agent_version_is(&self, query: &str) -> bool {
        compare_at_precision(query, &self.agent_version, false, true, false)
    }

    /// Returns `true` if the agent version is at least `query`,
    /// compared only up to the precision of the query.
    #[must_use]
    pub fn agent_version_at_least(&self, query: &str) -> bool {
        compare_at_precision(query, &self.agent_version, true, true, false)
    }

    /// Returns `true` if the agent version is below `query`,
    /// compared only up to the precision of the query.
    #[must_use]
    pub fn agent_version_below(&self, query: &str) -> bool {
        compare_at_precision(query, &self.agent_version, false, false, true)
    }

    /// Same as [`Self::agent_version_is`], for the platform version.
    #[must_use]
    pub fn platform_version_is(&self, query: &str) -> bool {
        compare_at_precision(query, &self.platform_version, false, true, false)
    }

    /// Same as [`Self::agent_version_at_least`], for the platform version.
    #[must_use]
    pub fn platform_version_at_least(&self, query: &str) -> bool {
        compare_at_precision(query, &self.platform_version, true, true, false)
    }

    /// Same as [`Self::agent_version_below`], for the platform version.
    #[must_use]
    pub fn platform_version_below(&self, query: &str) -> bool {
        compare_at_precision(query, &self.platform_version, false, false, true)
    }

    /// One line, human readable, summary of this record.
    ///
    /// ```
    /// use uafacts::PropertyRecord;
    ///
    /// assert_eq!(
    ///     PropertyRecord::default().summary().to_string(),
    ///     "Unknown 0.0.0 on Unknown 0.0.0 on a PC (desktop)",
    /// );
    /// ```
    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Diagnostic [`Display`](fmt::Display) of a [`PropertyRecord`],
/// created by [`PropertyRecord::summary`].
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a>(&'a PropertyRecord);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let article = if record.device_name.starts_with('i') {
            "an"
        } else {
            "a"
        };
        write!(
            f,
            "{} {} on {} {} on {article} {} ({})",
            record.agent_name,
            record.agent_version,
            record.platform_name,
            record.platform_version,
            record.device_name,
            record.device_class,
        )
    }
}
