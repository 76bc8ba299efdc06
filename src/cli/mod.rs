//! Command-line interface for git-match-run
//!
//! Parses flags with clap, sets up logging and hands an immutable
//! [`RunSettings`] to the pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{DEFAULT_CONFIG_FILE, DEFAULT_GIT_PROGRAM, DEFAULT_TO_REF, RunSettings};
use crate::external::ProcessRunner;
use crate::pipeline;
use crate::rules::Report;

mod output;

pub use output::Output;

/// Run commands when files changed between two git refs match configured patterns
#[derive(Debug, Parser)]
#[command(name = "git-match-run", author, version, about, long_about = None)]
pub struct Cli {
    /// Rules file: a YAML list of pattern/command/args entries
    #[arg(long, value_name = "FILE", env = "GIT_MATCH_RUN_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Git ref to start finding changes from
    #[arg(long, value_name = "REF", env = "GIT_MATCH_RUN_FROM", default_value = "")]
    pub from: String,

    /// Git ref to end finding changes at
    #[arg(long, value_name = "REF", env = "GIT_MATCH_RUN_TO", default_value = DEFAULT_TO_REF)]
    pub to: String,

    /// Run the matching commands instead of only reporting them
    #[arg(long, env = "GIT_MATCH_RUN_RUN")]
    pub run: bool,

    /// Git executable used to list changed files
    #[arg(long, value_name = "PROGRAM", env = "GIT_MATCH_RUN_GIT", default_value = DEFAULT_GIT_PROGRAM)]
    pub git: String,

    /// Run as if started in <DIR> instead of current working directory
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Settings for this run, fixed before any work starts
    pub fn settings(&self) -> RunSettings {
        RunSettings {
            config_path: self.config.clone(),
            from_ref: self.from.clone(),
            to_ref: self.to.clone(),
            execute: self.run,
            git_program: self.git.clone(),
        }
    }

    pub async fn run(self) -> Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
        }

        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let settings = self.settings();
        tracing::debug!("Run settings: {:?}", settings);

        let report = pipeline::execute(&settings, &ProcessRunner, &output)?;
        print_summary(&report, settings.execute, &output);
        Ok(())
    }
}

fn print_summary(report: &Report, execute: bool, output: &Output) {
    let summary = format!(
        "{} of {} rules matched",
        report.matched(),
        report.total()
    );

    if execute {
        output.success(&format!("{summary}, {} ran", report.executed()));
    } else {
        output.success(&format!("{summary} (dry run, pass --run to execute)"));
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
