//! classify an identity string

use clap::Args;
use std::{
    io::{BufRead as _, Write as _},
    path::PathBuf,
};
use uafacts::{
    AgentIdentity, Classifier,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// classify an agent identity string (e.g. a User-Agent header value)
pub struct CliCommandClassify {
    #[arg(env = "UAFACTS_IDENTITY")]
    /// the identity string to classify
    ///
    /// Read from the first line of stdin if not given.
    identity: Option<String>,

    #[arg(long, short = 'r')]
    /// json file with the (ordered) rule table to use instead of the builtin one
    rules: Option<PathBuf>,

    #[arg(long)]
    /// print the resolved facts as json instead of a summary line
    json: bool,
}

/// run the classify command
pub fn run(cfg: CliCommandClassify) -> Result<(), BoxError> {
    let raw = match cfg.identity {
        Some(identity) => identity,
        None => read_identity_from_stdin()?,
    };

    let classifier = Classifier::new(super::load_rules(cfg.rules.as_deref())?);
    let identity = AgentIdentity::with_classifier(raw, &classifier);
    tracing::debug!(identity = %identity, summary = %identity.summary(), "identity resolved");

    let mut stdout = std::io::stdout().lock();
    if cfg.json {
        serde_json::to_writer_pretty(&mut stdout, identity.record())
            .context("write record as json")?;
        writeln!(stdout).context("write to stdout")?;
    } else {
        writeln!(stdout, "{}", identity.summary()).context("write to stdout")?;
    }

    Ok(())
}

fn read_identity_from_stdin() -> Result<String, BoxError> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read identity from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}
