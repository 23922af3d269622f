//! normalize and compare versions

use clap::{Args, Subcommand};
use std::{cmp::Ordering, io::Write as _};
use uafacts::{
    VersionQuery,
    error::{BoxError, ErrorContext as _},
    version::normalize,
};

#[derive(Debug, Args)]
/// normalize raw version tokens and compare versions
pub struct CliCommandVersion {
    #[command(subcommand)]
    cmd: VersionCommand,
}

#[derive(Debug, Subcommand)]
enum VersionCommand {
    /// normalize a raw version token into major.minor.patch
    Normalize {
        /// the raw version token (e.g. "10_15_7)")
        raw: String,
    },
    /// compare a version query against a version, at the precision of the query
    ///
    /// Prints "less", "equal" or "more", describing the query relative to the target.
    Compare {
        /// the version query (e.g. "17" or "17.4")
        query: String,
        /// the version to compare against, normalized first
        target: String,
    },
}

/// run the version command
pub fn run(cfg: CliCommandVersion) -> Result<(), BoxError> {
    let output = match cfg.cmd {
        VersionCommand::Normalize { raw } => normalize(&raw).to_string(),
        VersionCommand::Compare { query, target } => {
            let target = normalize(&target);
            let query = VersionQuery::new(&query);
            tracing::debug!(%query, %target, "compare version");
            match query.cmp_triple(&target) {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "more",
            }
            .to_owned()
        }
    };

    writeln!(std::io::stdout().lock(), "{output}").context("write to stdout")?;
    Ok(())
}
