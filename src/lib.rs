//! Agent identity facts.
//!
//! This crate classifies an opaque agent identity string (e.g. a `User-Agent` header value)
//! into a small set of facts: the agent (name and version), the platform it runs on (name and version),
//! the device (name) and the class of that device (desktop or mobile). Versions can then be compared
//! against textual queries at the precision of the query, such that `"17"` matches `17.4.1`.
//!
//! Classification is driven by an ordered [`RuleTable`]. Each [`Rule`] pairs a lowercase substring
//! with a [`RulePatch`]; all rules contained in the identity string contribute, but for every fact
//! only the first rule (in table order) that sets it wins. Reordering a table therefore changes the result,
//! which is what allows narrow rules to refine the more general rules listed after them.
//!
//! ```
//! use uafacts::{AgentIdentity, DeviceClass};
//!
//! let identity = AgentIdentity::new(
//!     "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
//! );
//! assert!(identity.is_agent("Safari"));
//! assert!(identity.agent_version_is("17.4"));
//! assert!(identity.is_platform("iOS"));
//! assert!(identity.platform_version_at_least("17"));
//! assert_eq!(identity.device_class(), DeviceClass::Mobile);
//! assert_eq!(
//!     identity.summary().to_string(),
//!     "Safari 17.4.0 on iOS 17.4.0 on an iPhone (mobile)",
//! );
//! ```
//!
//! # Remarks
//!
//! Matching is plain substring containment, ASCII case insensitive. There are no regular expressions
//! and no attempt is made to detect spoofed identity strings. Unknown identities are not an error,
//! all facts simply fall back to their defaults (see [`PropertyRecord`]).
//!
//! The [builtin](RuleTable::builtin) table recognises the mainstream agents and platforms.
//! Custom tables can be built with [`RuleTable::builder`] or loaded from JSON
//! with [`RuleTable::from_json_str`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error;
pub mod rule;
pub mod version;

mod search;

mod classify;
pub use classify::{Classifier, classify};

mod identity;
pub use identity::AgentIdentity;

mod record;
pub use record::{
    DEFAULT_DEVICE, DeviceClass, PropertyRecord, Summary, UNKNOWN_AGENT, UNKNOWN_PLATFORM,
};

#[doc(inline)]
pub use rule::{Rule, RulePatch, RuleTable};
#[doc(inline)]
pub use version::{VersionQuery, VersionTriple};
