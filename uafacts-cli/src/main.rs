//! entrypoint for uafacts-cli

#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

pub mod cmd;
use self::cmd::{classify, rules, version};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uafacts")]
#[command(bin_name = "uafacts")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, short = 'v', global = true)]
    /// log debug information to stderr
    verbose: bool,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Classify(classify::CliCommandClassify),
    Version(version::CliCommandVersion),
    Rules(rules::CliCommandRules),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let result = trace::init_tracing(directive).and_then(|()| match cli.cmds {
        CliCommands::Classify(cfg) => classify::run(cfg),
        CliCommands::Version(cfg) => version::run(cfg),
        CliCommands::Rules(cfg) => rules::run(cfg),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("🚩 exit with error: {err}");
            ExitCode::FAILURE
        }
    }
}
