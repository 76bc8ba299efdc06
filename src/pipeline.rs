//! Load rules, list changes, evaluate: one run of the tool

use crate::cli::Output;
use crate::config::{RunConfig, RunSettings};
use crate::error::Result;
use crate::external::Runner;
use crate::git::GitDiff;
use crate::rules::{Evaluator, Report};

/// Execute a complete run with the given settings
///
/// The stages run in sequence and the first failure ends the run; no
/// changes are listed when the rules file is unusable.
pub fn execute(settings: &RunSettings, runner: &dyn Runner, output: &Output) -> Result<Report> {
    let config = RunConfig::load(&settings.config_path)?;

    let changed = GitDiff::new(runner, &settings.git_program)
        .changed_files(&settings.from_ref, &settings.to_ref)?;
    output.verbose(&format!(
        "{} changed files between '{}' and '{}'",
        changed.len(),
        settings.from_ref,
        settings.to_ref
    ));

    Evaluator::new(runner, output, settings.execute).evaluate(&config, &changed)
}
