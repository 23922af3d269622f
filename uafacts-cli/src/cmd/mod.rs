//! uafacts commands

use std::{fs::File, io::BufReader, path::Path};
use uafacts::{
    RuleTable,
    error::{BoxError, ErrorContext as _},
};

pub mod classify;
pub mod rules;
pub mod version;

/// Load the rule table found at `path`, or the builtin one if no path is given.
fn load_rules(path: Option<&Path>) -> Result<RuleTable, BoxError> {
    let Some(path) = path else {
        tracing::debug!("using builtin rule table");
        return Ok(RuleTable::builtin());
    };

    let file = File::open(path).with_context(|| format!("open rule table {}", path.display()))?;
    let rules = RuleTable::from_json_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), rules = rules.len(), "using custom rule table");
    Ok(rules)
}
