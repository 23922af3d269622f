//! print the effective rule table

use clap::Args;
use std::{io::Write as _, path::PathBuf};
use uafacts::error::{BoxError, ErrorContext as _};

#[derive(Debug, Args)]
/// print the (ordered) rule table as json
pub struct CliCommandRules {
    #[arg(long, short = 'r')]
    /// json file with the rule table to print instead of the builtin one
    rules: Option<PathBuf>,
}

/// run the rules command
pub fn run(cfg: CliCommandRules) -> Result<(), BoxError> {
    let rules = super::load_rules(cfg.rules.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &rules).context("write rules as json")?;
    writeln!(stdout).context("write to stdout")?;
    Ok(())
}
