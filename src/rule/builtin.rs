use super::{Rule, RulePatch, RuleTable};
use crate::DeviceClass;
use std::sync::OnceLock;

pub(super) fn table() -> RuleTable {
    static BUILTIN: OnceLock<RuleTable> = OnceLock::new();
    BUILTIN.get_or_init(|| rules().collect()).clone()
}

fn agent(name: &str, marker: &str) -> RulePatch {
    RulePatch::new()
        .with_agent_name(name)
        .with_agent_version_marker(marker)
}

fn platform(name: &str, marker: &str) -> RulePatch {
    RulePatch::new()
        .with_platform_name(name)
        .with_platform_version_marker(marker)
}

// Agents built on top of another engine advertise that engine as well
// (e.g. Edge also advertises `chrome/` and `safari/`), so they come first.
// The same holds for platforms: iOS devices advertise `mac os x`,
// Android advertises `linux` and Windows Phone advertises both.
fn rules() -> impl Iterator<Item = Rule> {
    [
        // agents
        ("edge/", agent("Edge", "edge/")),
        ("edg/", agent("Edge", "edg/")),
        ("edgios/", agent("Edge", "edgios/")),
        ("edga/", agent("Edge", "edga/")),
        ("opr/", agent("Opera", "opr/")),
        ("opera", agent("Opera", "version/")),
        ("samsungbrowser/", agent("Samsung Internet", "samsungbrowser/")),
        ("crios/", agent("Chrome", "crios/")),
        ("chrome/", agent("Chrome", "chrome/")),
        ("fxios/", agent("Firefox", "fxios/")),
        ("firefox/", agent("Firefox", "firefox/")),
        ("iemobile/", agent("IE Mobile", "iemobile/")),
        ("msie ", agent("IE", "msie ")),
        ("trident/", agent("IE", "rv:")),
        ("safari/", agent("Safari", "version/")),
        // platforms and devices
        (
            "windows phone",
            platform("Windows Phone", "windows phone ")
                .with_device_class(DeviceClass::Mobile)
                .with_device_name("Phone"),
        ),
        (
            "ipad",
            platform("iOS", "cpu os ")
                .with_device_class(DeviceClass::Desktop)
                .with_device_name("iPad"),
        ),
        (
            "iphone",
            platform("iOS", "iphone os ")
                .with_device_class(DeviceClass::Mobile)
                .with_device_name("iPhone"),
        ),
        (
            "ipod",
            platform("iOS", "iphone os ")
                .with_device_class(DeviceClass::Mobile)
                .with_device_name("iPod"),
        ),
        ("windows nt", platform("Windows", "windows nt ")),
        (
            "android",
            platform("Android", "android ")
                .with_device_class(DeviceClass::Mobile)
                .with_device_name("Android"),
        ),
        ("cros ", RulePatch::new().with_platform_name("Chrome OS")),
        (
            "mac os x",
            platform("Mac OS X", "mac os x ").with_device_name("Mac"),
        ),
        (
            "macintosh",
            RulePatch::new()
                .with_platform_name("Mac OS X")
                .with_device_name("Mac"),
        ),
        ("linux", RulePatch::new().with_platform_name("Linux")),
        // device classes
        (
            "mobile",
            RulePatch::new().with_device_class(DeviceClass::Mobile),
        ),
        (
            "tablet",
            RulePatch::new().with_device_class(DeviceClass::Mobile),
        ),
    ]
    .into_iter()
    .map(|(key, patch)| Rule::new(key, patch))
}
